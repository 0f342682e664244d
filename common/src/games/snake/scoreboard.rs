use super::modes::{GameMode, ModeClock};

/// Score, level and the speed multiplier derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scoreboard {
    score: u32,
    level: u32,
    speed: f64,
    level_threshold: u32,
    boost_bonus: f64,
}

impl Scoreboard {
    pub fn new(level_threshold: u32, boost_bonus: f64, mode: GameMode) -> Self {
        Self {
            score: 0,
            level: 1,
            speed: mode.speed_for_level(1),
            level_threshold: level_threshold.max(1),
            boost_bonus,
        }
    }

    pub fn reset(&mut self, mode: GameMode) {
        self.score = 0;
        self.level = 1;
        self.recompute_speed(mode, &ModeClock::default(), false);
    }

    pub fn add_score(&mut self, delta: u32) -> u32 {
        self.score = self.score.saturating_add(delta);
        self.score
    }

    /// Commits the level implied by the score. Returns the new level when it rose.
    pub fn check_level_up(&mut self, mode: GameMode, clock: &ModeClock, boosted: bool) -> Option<u32> {
        let new_level = self.score / self.level_threshold + 1;
        if new_level <= self.level {
            return None;
        }
        self.level = new_level;
        self.recompute_speed(mode, clock, boosted);
        Some(new_level)
    }

    pub fn recompute_speed(&mut self, mode: GameMode, clock: &ModeClock, boosted: bool) {
        let boost = if boosted { self.boost_bonus } else { 0.0 };
        self.speed = mode.speed(self.level, clock) + boost;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Scoreboard {
        Scoreboard::new(100, 1.0, GameMode::Classic)
    }

    fn clock() -> ModeClock {
        ModeClock::default()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_score_99_stays_level_1() {
        let mut board = board();
        board.add_score(99);
        assert_eq!(board.check_level_up(GameMode::Classic, &clock(), false), None);
        assert_eq!(board.level(), 1);
        assert_eq!(board.speed(), 1.0);
    }

    #[test]
    fn test_score_100_reaches_level_2() {
        let mut board = board();
        board.add_score(100);
        assert_eq!(board.check_level_up(GameMode::Classic, &clock(), false), Some(2));
        assert!(close(board.speed(), 1.2));
        assert_eq!(board.check_level_up(GameMode::Classic, &clock(), false), None);
    }

    #[test]
    fn test_big_jump_skips_levels() {
        let mut board = board();
        board.add_score(260);
        assert_eq!(board.check_level_up(GameMode::Classic, &clock(), false), Some(3));
        assert!(close(board.speed(), 1.4));
    }

    #[test]
    fn test_boost_formula() {
        let mut board = board();
        board.recompute_speed(GameMode::Classic, &clock(), true);
        assert!(close(board.speed(), 2.0));
        board.add_score(100);
        board.check_level_up(GameMode::Classic, &clock(), true);
        assert!(close(board.speed(), 2.2));
        board.recompute_speed(GameMode::Classic, &clock(), false);
        assert!(close(board.speed(), 1.2));
    }

    #[test]
    fn test_reset() {
        let mut board = board();
        board.add_score(500);
        board.check_level_up(GameMode::Classic, &clock(), true);
        board.reset(GameMode::SpeedRun);
        assert_eq!(board.score(), 0);
        assert_eq!(board.level(), 1);
        assert_eq!(board.speed(), 2.5);
    }

    #[test]
    fn test_survival_difficulty_adds_speed() {
        let mut board = Scoreboard::new(100, 1.0, GameMode::Survival);
        let mut clock = ModeClock::default();
        GameMode::Survival.advance(&mut clock, 1800);
        board.recompute_speed(GameMode::Survival, &clock, false);
        assert!(close(board.speed(), 1.1));
        board.recompute_speed(GameMode::Survival, &clock, true);
        assert!(close(board.speed(), 2.1));
    }
}
