use super::types::Direction;

/// Holds at most one decoded direction between ticks. Owned by the session
/// instead of living in a process-wide input singleton.
#[derive(Clone, Copy, Debug)]
pub struct InputBuffer {
    current: Direction,
    next: Option<Direction>,
}

impl InputBuffer {
    pub fn new(current: Direction) -> Self {
        Self { current, next: None }
    }

    /// Keeps `direction` unless it repeats or reverses the last committed direction.
    pub fn submit(&mut self, direction: Direction) -> bool {
        if direction == self.current || direction.is_opposite(&self.current) {
            return false;
        }
        self.next = Some(direction);
        true
    }

    pub fn take(&mut self) -> Option<Direction> {
        self.next.take()
    }

    pub fn peek(&self) -> Option<Direction> {
        self.next
    }

    pub fn set_current(&mut self, direction: Direction) {
        self.current = direction;
    }

    pub fn reset(&mut self, current: Direction) {
        self.current = current;
        self.next = None;
    }
}
