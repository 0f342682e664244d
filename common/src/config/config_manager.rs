use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Reads and validates the stored config once, then serves the cached copy.
    /// Missing content yields `TConfig::default()`.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }

    pub fn invalidate(&self) {
        if let Ok(mut current) = self.config.lock() {
            *current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::SnakeSettings;

    fn temp_path() -> String {
        std::env::temp_dir()
            .join(format!("snake_egg_manager_{}.yaml", rand::random::<u64>()))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_missing_file_yields_default() {
        let manager: ConfigManager<_, SnakeSettings> = ConfigManager::from_yaml_file(&temp_path());
        assert_eq!(manager.get_config().unwrap().initial_length, SnakeSettings::default().initial_length);
    }

    #[test]
    fn test_invalidate_rereads_external_changes() {
        let path = temp_path();
        let manager: ConfigManager<_, SnakeSettings> = ConfigManager::from_yaml_file(&path);
        manager.set_config(&SnakeSettings::default()).unwrap();

        let changed = SnakeSettings {
            initial_length: 5,
            ..SnakeSettings::default()
        };
        let content = YamlConfigSerializer::new().serialize(&changed).unwrap();
        std::fs::write(&path, content).unwrap();

        assert_eq!(manager.get_config().unwrap().initial_length, 3);
        manager.invalidate();
        assert_eq!(manager.get_config().unwrap().initial_length, 5);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let path = temp_path();
        let manager: ConfigManager<_, SnakeSettings> = ConfigManager::from_yaml_file(&path);
        let bad = SnakeSettings {
            initial_length: 1,
            ..SnakeSettings::default()
        };
        assert!(manager.set_config(&bad).is_err());
        assert!(!std::path::Path::new(&path).exists());
    }
}
