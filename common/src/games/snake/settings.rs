use serde::{Deserialize, Serialize};

use crate::config::{Validate, check_range};
use super::entity::MIN_LENGTH;
use super::grid::Grid;
use super::modes::GameMode;

pub const FRAMES_PER_SECOND: f64 = 60.0;

pub const GRID_WIDTH: u32 = 40;
pub const GRID_HEIGHT: u32 = 30;
pub const CELL_SIZE: u32 = 20;

pub const INITIAL_LENGTH: usize = 3;
pub const MOVE_INTERVAL_SECS: f64 = 0.2;

pub const POWER_UP_CHANCE: f64 = 0.01;
pub const POWER_UP_DURATION_FRAMES: u32 = 300;
pub const POWER_UP_SPEED_BONUS: f64 = 1.0;

pub const COMBO_WINDOW_FRAMES: u32 = 1800;
pub const COMBO_THRESHOLD: u32 = 5;
pub const COMBO_BONUS_MULTIPLIER: u32 = 10;

pub const FOOD_POINTS: u32 = 10;
pub const LEVEL_UP_THRESHOLD: u32 = 100;

pub const OBSTACLE_BASE_COUNT: u32 = 2;
pub const OBSTACLE_CAP: u32 = 20;

/// Every tunable of a session. Defaults reproduce the classic 800x600 game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub grid_width: u32,
    pub grid_height: u32,
    pub cell_size: u32,
    pub initial_length: usize,
    pub move_interval_secs: f64,
    pub power_up_chance: f64,
    pub power_up_duration_frames: u32,
    pub power_up_speed_bonus: f64,
    pub combo_window_frames: u32,
    pub combo_threshold: u32,
    pub combo_bonus_multiplier: u32,
    pub food_points: u32,
    pub level_up_threshold: u32,
    pub obstacle_base_count: u32,
    pub obstacle_cap: u32,
    pub mode: GameMode,
    pub seed: Option<u64>,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            initial_length: INITIAL_LENGTH,
            move_interval_secs: MOVE_INTERVAL_SECS,
            power_up_chance: POWER_UP_CHANCE,
            power_up_duration_frames: POWER_UP_DURATION_FRAMES,
            power_up_speed_bonus: POWER_UP_SPEED_BONUS,
            combo_window_frames: COMBO_WINDOW_FRAMES,
            combo_threshold: COMBO_THRESHOLD,
            combo_bonus_multiplier: COMBO_BONUS_MULTIPLIER,
            food_points: FOOD_POINTS,
            level_up_threshold: LEVEL_UP_THRESHOLD,
            obstacle_base_count: OBSTACLE_BASE_COUNT,
            obstacle_cap: OBSTACLE_CAP,
            mode: GameMode::Classic,
            seed: None,
        }
    }
}

impl SnakeSettings {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.grid_width * self.cell_size, self.grid_height * self.cell_size)
    }

    pub fn move_interval_frames(&self) -> f64 {
        self.move_interval_secs * FRAMES_PER_SECOND
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("grid_width", self.grid_width, 10, 200)?;
        check_range("grid_height", self.grid_height, 10, 200)?;
        check_range("cell_size", self.cell_size, 4, 64)?;
        check_range("initial_length", self.initial_length, MIN_LENGTH, self.grid_width as usize)?;
        check_range("move_interval_secs", self.move_interval_secs, 0.01, 5.0)?;
        check_range("power_up_chance", self.power_up_chance, 0.0, 1.0)?;
        check_range("power_up_duration_frames", self.power_up_duration_frames, 1, 36_000)?;
        check_range("power_up_speed_bonus", self.power_up_speed_bonus, 0.0, 10.0)?;
        check_range("combo_window_frames", self.combo_window_frames, 1, 36_000)?;
        check_range("combo_threshold", self.combo_threshold, 1, 100)?;
        check_range("combo_bonus_multiplier", self.combo_bonus_multiplier, 0, 1000)?;
        check_range("food_points", self.food_points, 1, 1000)?;
        check_range("level_up_threshold", self.level_up_threshold, 1, 100_000)?;
        check_range("obstacle_base_count", self.obstacle_base_count, 0, 100)?;
        check_range("obstacle_cap", self.obstacle_cap, 0, 500)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_canvas_is_800_by_600() {
        assert_eq!(SnakeSettings::default().canvas_size(), (800, 600));
    }

    #[test]
    fn test_move_interval_is_twelve_frames() {
        assert_eq!(SnakeSettings::default().move_interval_frames(), 12.0);
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let settings = SnakeSettings {
            grid_width: 5,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_single_segment_snake_rejected() {
        let settings = SnakeSettings {
            initial_length: 1,
            ..SnakeSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("initial_length"));

        let settings = SnakeSettings {
            initial_length: 2,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_chance_rejected() {
        let settings = SnakeSettings {
            power_up_chance: -0.1,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_merges_with_defaults() {
        let serializer = YamlConfigSerializer::new();
        let settings: SnakeSettings = serializer
            .deserialize("grid_width: 20\nmode: SpeedRun\nseed: 99\n")
            .unwrap();
        assert_eq!(settings.grid_width, 20);
        assert_eq!(settings.grid_height, GRID_HEIGHT);
        assert_eq!(settings.mode, GameMode::SpeedRun);
        assert_eq!(settings.seed, Some(99));
        assert!(settings.validate().is_ok());
    }
}
