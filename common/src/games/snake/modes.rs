use serde::{Deserialize, Serialize};

use super::settings::FRAMES_PER_SECOND;
use super::types::GameOverReason;

pub const TIME_ATTACK_LIMIT_SECS: f64 = 120.0;
pub const SURVIVAL_DIFFICULTY_INTERVAL_FRAMES: u64 = 1800;
pub const SPEED_RUN_TARGET_SCORE: u32 = 500;
pub const SURVIVAL_SPEED_PER_DIFFICULTY: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Classic,
    TimeAttack,
    ObstacleCourse,
    Survival,
    SpeedRun,
}

/// Per-session progress a mode keys its rules on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeClock {
    pub elapsed_frames: u64,
    pub difficulty: u32,
    frames_since_difficulty: u64,
}

impl Default for ModeClock {
    fn default() -> Self {
        Self {
            elapsed_frames: 0,
            difficulty: 1,
            frames_since_difficulty: 0,
        }
    }
}

impl ModeClock {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_frames as f64 / FRAMES_PER_SECOND
    }
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Classic,
        GameMode::TimeAttack,
        GameMode::ObstacleCourse,
        GameMode::Survival,
        GameMode::SpeedRun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::TimeAttack => "Time Attack",
            GameMode::ObstacleCourse => "Obstacle Course",
            GameMode::Survival => "Survival",
            GameMode::SpeedRun => "Speed Run",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameMode::Classic => "Traditional snake game with increasing difficulty",
            GameMode::TimeAttack => "Score as many points as possible in 2 minutes",
            GameMode::ObstacleCourse => "Navigate through increasingly complex obstacle patterns",
            GameMode::Survival => "How long can you survive the endless challenge?",
            GameMode::SpeedRun => "Race to 500 points as fast as possible",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    pub fn next(self) -> GameMode {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> GameMode {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn base_speed(self) -> f64 {
        match self {
            GameMode::Classic | GameMode::Survival => 1.0,
            GameMode::TimeAttack => 1.5,
            GameMode::ObstacleCourse => 0.8,
            GameMode::SpeedRun => 2.5,
        }
    }

    pub fn speed_per_level(self) -> f64 {
        match self {
            GameMode::Classic | GameMode::SpeedRun => 0.2,
            GameMode::TimeAttack | GameMode::Survival => 0.1,
            GameMode::ObstacleCourse => 0.05,
        }
    }

    pub fn speed_for_level(self, level: u32) -> f64 {
        self.base_speed() + level.saturating_sub(1) as f64 * self.speed_per_level()
    }

    /// Level speed plus the survival pressure that builds with difficulty.
    pub fn speed(self, level: u32, clock: &ModeClock) -> f64 {
        let pressure = match self {
            GameMode::Survival => clock.difficulty.saturating_sub(1) as f64 * SURVIVAL_SPEED_PER_DIFFICULTY,
            _ => 0.0,
        };
        self.speed_for_level(level) + pressure
    }

    /// Obstacles wanted at `level`. Classic uses the configured base and cap.
    pub fn obstacle_count(self, level: u32, clock: &ModeClock, base: u32, cap: u32) -> u32 {
        match self {
            GameMode::Classic => (base + level).min(cap),
            GameMode::TimeAttack | GameMode::SpeedRun => 0,
            GameMode::ObstacleCourse => (8 + 2 * level).min(35),
            GameMode::Survival => (5 + clock.difficulty).min(30),
        }
    }

    pub fn food_bonus(self, score: u32, level: u32, clock: &ModeClock) -> u32 {
        match self {
            GameMode::Classic => 0,
            GameMode::TimeAttack => (Self::time_remaining_secs(clock) / 10.0).floor() as u32,
            GameMode::ObstacleCourse => level * 5,
            GameMode::Survival => clock.difficulty * 2,
            GameMode::SpeedRun => (score / 50) * 2,
        }
    }

    pub fn score_multiplier(self, level: u32, clock: &ModeClock) -> f64 {
        match self {
            GameMode::Classic => 1.0,
            GameMode::TimeAttack => 2.0,
            GameMode::ObstacleCourse => 1.5 + level.saturating_sub(1) as f64 * 0.2,
            GameMode::Survival => 1.0 + clock.difficulty as f64 * 0.25,
            GameMode::SpeedRun => 1.5,
        }
    }

    /// Points for one food before the combo bonus is added.
    pub fn food_points(self, base_points: u32, score: u32, level: u32, clock: &ModeClock) -> u32 {
        let raw = (base_points + self.food_bonus(score, level, clock)) as f64;
        (raw * self.score_multiplier(level, clock)).round() as u32
    }

    /// Advances the clock by `delta_frames`. Returns the new survival difficulty when it rises.
    pub fn advance(self, clock: &mut ModeClock, delta_frames: u64) -> Option<u32> {
        clock.elapsed_frames += delta_frames;
        if self != GameMode::Survival {
            return None;
        }
        clock.frames_since_difficulty += delta_frames;
        if clock.frames_since_difficulty >= SURVIVAL_DIFFICULTY_INTERVAL_FRAMES {
            clock.frames_since_difficulty = 0;
            clock.difficulty += 1;
            return Some(clock.difficulty);
        }
        None
    }

    pub fn end_condition(self, score: u32, clock: &ModeClock) -> Option<GameOverReason> {
        match self {
            GameMode::TimeAttack if Self::time_remaining_secs(clock) <= 0.0 => {
                Some(GameOverReason::TimeUp)
            }
            GameMode::SpeedRun if score >= SPEED_RUN_TARGET_SCORE => {
                Some(GameOverReason::TargetReached)
            }
            _ => None,
        }
    }

    pub fn time_remaining_secs(clock: &ModeClock) -> f64 {
        (TIME_ATTACK_LIMIT_SECS - clock.elapsed_secs()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_matches_base_rules() {
        let clock = ModeClock::default();
        assert_eq!(GameMode::Classic.speed_for_level(1), 1.0);
        assert!((GameMode::Classic.speed_for_level(2) - 1.2).abs() < 1e-9);
        assert_eq!(GameMode::Classic.food_points(10, 0, 1, &clock), 10);
        assert_eq!(GameMode::Classic.food_points(10, 450, 5, &clock), 10);
        assert_eq!(GameMode::Classic.obstacle_count(1, &clock, 2, 20), 3);
        assert_eq!(GameMode::Classic.obstacle_count(30, &clock, 2, 20), 20);
    }

    #[test]
    fn test_mode_cycle_wraps() {
        assert_eq!(GameMode::Classic.next(), GameMode::TimeAttack);
        assert_eq!(GameMode::SpeedRun.next(), GameMode::Classic);
        assert_eq!(GameMode::Classic.previous(), GameMode::SpeedRun);
        for mode in GameMode::ALL {
            assert_eq!(mode.next().previous(), mode);
        }
    }

    #[test]
    fn test_time_attack_ends_after_two_minutes() {
        let mut clock = ModeClock::default();
        GameMode::TimeAttack.advance(&mut clock, 60 * 119);
        assert_eq!(GameMode::TimeAttack.end_condition(0, &clock), None);
        GameMode::TimeAttack.advance(&mut clock, 60);
        assert_eq!(GameMode::TimeAttack.end_condition(0, &clock), Some(GameOverReason::TimeUp));
    }

    #[test]
    fn test_time_attack_bonus_shrinks() {
        let mut clock = ModeClock::default();
        // (10 + 12) * 2
        assert_eq!(GameMode::TimeAttack.food_points(10, 0, 1, &clock), 44);
        GameMode::TimeAttack.advance(&mut clock, 60 * 100);
        // (10 + 2) * 2
        assert_eq!(GameMode::TimeAttack.food_points(10, 0, 1, &clock), 24);
    }

    #[test]
    fn test_survival_difficulty_rises_every_1800_frames() {
        let mut clock = ModeClock::default();
        assert_eq!(GameMode::Survival.advance(&mut clock, 1799), None);
        assert_eq!(GameMode::Survival.advance(&mut clock, 1), Some(2));
        assert_eq!(clock.difficulty, 2);
        assert_eq!(GameMode::Survival.obstacle_count(1, &clock, 2, 20), 7);
    }

    #[test]
    fn test_survival_speeds_up_with_difficulty() {
        let mut clock = ModeClock::default();
        assert_eq!(GameMode::Survival.speed(1, &clock), 1.0);
        for _ in 0..3 {
            GameMode::Survival.advance(&mut clock, 1800);
        }
        assert_eq!(clock.difficulty, 4);
        assert!((GameMode::Survival.speed(1, &clock) - 1.3).abs() < 1e-9);
        assert!((GameMode::Survival.speed(2, &clock) - 1.4).abs() < 1e-9);
        assert_eq!(GameMode::Classic.speed(1, &clock), 1.0);
    }

    #[test]
    fn test_difficulty_fixed_outside_survival() {
        let mut clock = ModeClock::default();
        assert_eq!(GameMode::Classic.advance(&mut clock, 5000), None);
        assert_eq!(clock.difficulty, 1);
        assert_eq!(clock.elapsed_frames, 5000);
    }

    #[test]
    fn test_speed_run_target() {
        let clock = ModeClock::default();
        assert_eq!(GameMode::SpeedRun.end_condition(499, &clock), None);
        assert_eq!(
            GameMode::SpeedRun.end_condition(500, &clock),
            Some(GameOverReason::TargetReached)
        );
        // momentum bonus: 200 / 50 * 2 = 8, (10 + 8) * 1.5 = 27
        assert_eq!(GameMode::SpeedRun.food_points(10, 200, 1, &clock), 27);
    }
}
