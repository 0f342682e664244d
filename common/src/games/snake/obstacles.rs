use std::collections::HashSet;

use crate::games::SessionRng;
use super::grid::Grid;
use super::types::Position;

#[derive(Clone, Debug, Default)]
pub struct Obstacles {
    cells: Vec<Position>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Replaces the set with up to `count` distinct free cells.
    pub fn regenerate(
        &mut self,
        count: u32,
        grid: &Grid,
        occupied: &HashSet<Position>,
        rng: &mut SessionRng,
    ) -> usize {
        self.cells.clear();
        let mut available = grid.free_cells(occupied);
        for _ in 0..count {
            if available.is_empty() {
                break;
            }
            let idx = rng.random_range(0..available.len());
            self.cells.push(available.swap_remove(idx));
        }
        self.cells.len()
    }

    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn collides_with(&self, head: Position) -> bool {
        self.cells.contains(&head)
    }

    #[cfg(test)]
    pub(crate) fn set_positions(&mut self, cells: Vec<Position>) {
        self.cells = cells;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regenerate_distinct_and_free() {
        let grid = Grid::new(10, 10);
        let mut rng = SessionRng::new(17);
        let occupied: HashSet<Position> = (0..10).map(|x| Position::new(x, 5)).collect();
        let mut obstacles = Obstacles::new();
        assert_eq!(obstacles.regenerate(20, &grid, &occupied, &mut rng), 20);

        let unique: HashSet<Position> = obstacles.positions().iter().copied().collect();
        assert_eq!(unique.len(), 20);
        assert!(unique.iter().all(|p| !occupied.contains(p) && grid.contains(*p)));
    }

    #[test]
    fn test_regenerate_replaces_previous_set() {
        let grid = Grid::new(10, 10);
        let mut rng = SessionRng::new(17);
        let mut obstacles = Obstacles::new();
        obstacles.regenerate(3, &grid, &HashSet::new(), &mut rng);
        obstacles.regenerate(4, &grid, &HashSet::new(), &mut rng);
        assert_eq!(obstacles.len(), 4);
    }

    #[test]
    fn test_regenerate_limited_by_free_cells() {
        let grid = Grid::new(10, 10);
        let mut rng = SessionRng::new(17);
        let occupied: HashSet<Position> = grid.free_cells(&HashSet::new()).into_iter().skip(2).collect();
        let mut obstacles = Obstacles::new();
        assert_eq!(obstacles.regenerate(5, &grid, &occupied, &mut rng), 2);
    }

    #[test]
    fn test_collision() {
        let grid = Grid::new(10, 10);
        let mut rng = SessionRng::new(17);
        let mut obstacles = Obstacles::new();
        obstacles.regenerate(1, &grid, &HashSet::new(), &mut rng);
        let cell = obstacles.positions()[0];
        assert!(obstacles.collides_with(cell));
        obstacles.clear();
        assert!(!obstacles.collides_with(cell));
    }
}
