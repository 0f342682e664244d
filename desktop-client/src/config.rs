pub(crate) use snake_egg_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_egg_common::games::snake::{GameMode, SnakeSettings};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "snake_egg_config.yaml";
const STATS_FILE: &str = "snake_egg_stats.json";

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: SnakeSettings,
    pub stats_path: String,
    pub show_grid: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.stats_path.is_empty() {
            return Err("stats_path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: SnakeSettings::default(),
            stats_path: STATS_FILE.to_string(),
            show_grid: true,
        }
    }
}

/// Accepts a mode by display name or identifier, ignoring case and spaces
/// ("time attack", "TimeAttack", "time-attack").
pub fn parse_mode(value: &str) -> Result<GameMode, String> {
    let wanted = normalize(value);
    GameMode::ALL
        .into_iter()
        .find(|mode| normalize(mode.name()) == wanted)
        .ok_or_else(|| {
            let names: Vec<&str> = GameMode::ALL.iter().map(|m| m.name()).collect();
            format!("unknown mode '{}', expected one of: {}", value, names.join(", "))
        })
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
