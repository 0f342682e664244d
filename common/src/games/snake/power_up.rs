use std::collections::HashSet;

use crate::games::SessionRng;
use super::grid::Grid;
use super::types::Position;

/// The collectible on the grid. Its timed effect lives in [`SpeedBoost`].
#[derive(Clone, Debug, Default)]
pub struct PowerUp {
    position: Position,
    active: bool,
}

impl PowerUp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Option<Position> {
        self.active.then_some(self.position)
    }

    /// Places the power-up on a free cell. Stays hidden when the grid is full.
    pub fn spawn(&mut self, grid: &Grid, occupied: &HashSet<Position>, rng: &mut SessionRng) -> Option<Position> {
        match grid.random_free(occupied, rng) {
            Some(pos) => {
                self.position = pos;
                self.active = true;
                Some(pos)
            }
            None => {
                self.hide();
                None
            }
        }
    }

    pub fn hide(&mut self) {
        self.active = false;
    }

    pub fn collides_with(&self, head: Position) -> bool {
        self.active && self.position == head
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: Position) {
        self.position = position;
        self.active = true;
    }
}

/// Countdown of a collected power-up's speed boost, in frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpeedBoost {
    remaining_frames: u32,
    running: bool,
}

impl SpeedBoost {
    pub fn start(&mut self, duration_frames: u32) {
        self.remaining_frames = duration_frames;
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_frames(&self) -> u32 {
        self.remaining_frames
    }

    /// One frame down. Returns true on the tick the boost expires.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_frames = self.remaining_frames.saturating_sub(1);
        if self.remaining_frames == 0 {
            self.running = false;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.remaining_frames = 0;
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_activates_on_free_cell() {
        let grid = Grid::new(10, 10);
        let mut rng = SessionRng::new(9);
        let occupied: HashSet<Position> = [Position::new(0, 0), Position::new(1, 0)].into();
        let mut power_up = PowerUp::new();
        assert!(!power_up.is_active());
        assert_eq!(power_up.position(), None);

        let pos = power_up.spawn(&grid, &occupied, &mut rng).unwrap();
        assert!(power_up.is_active());
        assert!(!occupied.contains(&pos));
        assert!(power_up.collides_with(pos));
    }

    #[test]
    fn test_hidden_power_up_never_collides() {
        let mut power_up = PowerUp::new();
        power_up.place_at(Position::new(3, 3));
        power_up.hide();
        assert!(!power_up.collides_with(Position::new(3, 3)));
    }

    #[test]
    fn test_spawn_on_full_grid_stays_hidden() {
        let grid = Grid::new(10, 10);
        let mut rng = SessionRng::new(9);
        let occupied: HashSet<Position> = grid.free_cells(&HashSet::new()).into_iter().collect();
        let mut power_up = PowerUp::new();
        assert_eq!(power_up.spawn(&grid, &occupied, &mut rng), None);
        assert!(!power_up.is_active());
    }

    #[test]
    fn test_boost_expires_after_duration() {
        let mut boost = SpeedBoost::default();
        boost.start(3);
        assert!(!boost.tick());
        assert!(!boost.tick());
        assert!(boost.tick());
        assert!(!boost.is_running());
        assert!(!boost.tick());
    }
}
