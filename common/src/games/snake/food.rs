use std::collections::HashSet;

use crate::games::SessionRng;
use crate::log_warn;
use super::grid::Grid;
use super::types::Position;

#[derive(Clone, Debug)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new() -> Self {
        Self {
            position: Position::ORIGIN,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Re-places the food on a random free cell; the origin when none is left.
    pub fn respawn(&mut self, grid: &Grid, occupied: &HashSet<Position>, rng: &mut SessionRng) -> Position {
        self.position = match grid.random_free(occupied, rng) {
            Some(pos) => pos,
            None => {
                log_warn!("No free cell for food, falling back to origin");
                Position::ORIGIN
            }
        };
        self.position
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: Position) {
        self.position = position;
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}
