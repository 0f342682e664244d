use std::collections::HashSet;

use crate::games::SessionRng;
use super::types::Position;

/// The fixed playing field in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Every cell not in `excluded`, row by row.
    pub fn free_cells(&self, excluded: &HashSet<Position>) -> Vec<Position> {
        let mut cells = Vec::with_capacity(self.cell_count().saturating_sub(excluded.len()));
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let pos = Position::new(x, y);
                if !excluded.contains(&pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    pub fn random_free(&self, excluded: &HashSet<Position>, rng: &mut SessionRng) -> Option<Position> {
        let cells = self.free_cells(excluded);
        if cells.is_empty() {
            return None;
        }
        Some(cells[rng.random_range(0..cells.len())])
    }
}
