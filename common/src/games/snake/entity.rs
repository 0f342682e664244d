use std::collections::VecDeque;

use super::grid::Grid;
use super::settings::FRAMES_PER_SECOND;
use super::types::{Direction, Position};

/// Accumulated floating-point frame deltas may land a hair short of the interval.
const MOVE_TIMER_EPSILON: f64 = 1e-9;

/// A single segment would grow onto its own head.
pub const MIN_LENGTH: usize = 2;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    move_timer_frames: f64,
    initial_length: usize,
    move_interval_frames: f64,
}

impl Snake {
    pub fn new(initial_length: usize, move_interval_secs: f64) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(initial_length.max(MIN_LENGTH)),
            direction: Direction::Right,
            pending_direction: None,
            move_timer_frames: 0.0,
            initial_length: initial_length.max(MIN_LENGTH),
            move_interval_frames: move_interval_secs * FRAMES_PER_SECOND,
        };
        snake.reset();
        snake
    }

    /// Horizontal line on the top row, head rightmost, heading right.
    pub fn reset(&mut self) {
        self.body.clear();
        for x in (0..self.initial_length as i32).rev() {
            self.body.push_back(Position::new(x, 0));
        }
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.move_timer_frames = 0.0;
    }

    pub fn set_next_direction(&mut self, direction: Direction) {
        if direction != self.direction {
            self.pending_direction = Some(direction);
        }
    }

    /// Advances the move timer by `delta_frames` (already scaled by speed) and moves
    /// at most once. Leftover time past the interval is dropped, not carried.
    pub fn update(&mut self, delta_frames: f64) -> bool {
        self.move_timer_frames += delta_frames;
        if self.move_timer_frames + MOVE_TIMER_EPSILON >= self.move_interval_frames {
            self.step();
            self.move_timer_frames = 0.0;
            return true;
        }
        false
    }

    /// One cell forward. A buffered turn is applied only if it does not reverse
    /// the direction held at this moment; the buffer is cleared either way.
    pub fn step(&mut self) -> Position {
        if let Some(next) = self.pending_direction.take()
            && !next.is_opposite(&self.direction)
        {
            self.direction = next;
        }

        let new_head = self.head().offset(self.direction);
        self.body.push_front(new_head);
        self.body.pop_back();
        new_head
    }

    /// Duplicates the tail so the next step's pop leaves the snake one longer.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
    }

    pub fn head(&self) -> Position {
        self.body.front().copied().unwrap_or(Position::ORIGIN)
    }

    pub fn tail(&self) -> Position {
        self.body.back().copied().unwrap_or(Position::ORIGIN)
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn move_timer_secs(&self) -> f64 {
        self.move_timer_frames / FRAMES_PER_SECOND
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn collides_with(&self, pos: Position) -> bool {
        self.head() == pos
    }

    pub fn hits_wall(&self, grid: &Grid) -> bool {
        !grid.contains(self.head())
    }

    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Position], direction: Direction, move_interval_secs: f64) -> Self {
        Self {
            body: segments.iter().copied().collect(),
            direction,
            pending_direction: None,
            move_timer_frames: 0.0,
            initial_length: segments.len(),
            move_interval_frames: move_interval_secs * FRAMES_PER_SECOND,
        }
    }
}
