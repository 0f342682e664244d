/// A grid cell. Signed so a head that has left the field is still representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn to_pixels(self, cell_size: u32) -> (i32, i32) {
        let cell = cell_size as i32;
        (self.x * cell, self.y * cell)
    }

    pub fn from_pixels(x: i32, y: i32, cell_size: u32) -> Self {
        let cell = cell_size as i32;
        Self::new(x.div_euclid(cell), y.div_euclid(cell))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Screen coordinates: y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    ObstacleCollision,
    WallCollision,
    SelfCollision,
    TimeUp,
    TargetReached,
}

impl GameOverReason {
    pub fn describe(self) -> &'static str {
        match self {
            GameOverReason::ObstacleCollision => "Hit an obstacle",
            GameOverReason::WallCollision => "Hit the wall",
            GameOverReason::SelfCollision => "Bit its own tail",
            GameOverReason::TimeUp => "Time's up",
            GameOverReason::TargetReached => "Target score reached",
        }
    }
}

/// Copy-out view of the score state handed to presentation code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameSnapshot {
    pub score: u32,
    pub level: u32,
    pub speed: f64,
    pub is_game_over: bool,
}
