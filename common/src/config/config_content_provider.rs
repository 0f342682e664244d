use std::io::ErrorKind;
use std::sync::Mutex;

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read {}: {}", self.file_path, err)),
            },
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write {}: {}", self.file_path, e))
    }
}

/// Keeps content in memory, the stand-in for a browser cookie or localStorage slot.
#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ConfigContentProvider for MemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        let content = self
            .content
            .lock()
            .map_err(|_| "Memory content lock poisoned".to_string())?;
        Ok(content.clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        let mut current = self
            .content
            .lock()
            .map_err(|_| "Memory content lock poisoned".to_string())?;
        *current = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_none() {
        let path = std::env::temp_dir().join(format!("snake_egg_missing_{}.yaml", rand::random::<u64>()));
        let provider = FileContentConfigProvider::new(path.to_string_lossy().to_string());
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_memory_provider_round_trip() {
        let provider = MemoryContentProvider::new();
        assert_eq!(provider.get_config_content(), Ok(None));
        provider.set_config_content("gamesPlayed: 1").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("gamesPlayed: 1".to_string())));
    }

    #[test]
    fn test_file_provider_writes_and_reads() {
        let path = std::env::temp_dir().join(format!("snake_egg_provider_{}.yaml", rand::random::<u64>()));
        let provider = FileContentConfigProvider::new(path.to_string_lossy().to_string());
        provider.set_config_content("mode: Survival").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("mode: Survival".to_string())));
        let _ = std::fs::remove_file(&path);
    }
}
