mod achievements;
mod combo;
mod entity;
mod events;
mod food;
mod grid;
mod input;
mod modes;
mod obstacles;
mod power_up;
mod scoreboard;
mod session;
mod settings;
mod types;

pub use achievements::{Achievement, AchievementId, AchievementTracker};
pub use combo::{ComboResult, ComboTracker};
pub use entity::Snake;
pub use events::{EventLog, GameEvent, GameObserver};
pub use food::Food;
pub use grid::Grid;
pub use input::InputBuffer;
pub use modes::{GameMode, ModeClock};
pub use obstacles::Obstacles;
pub use power_up::{PowerUp, SpeedBoost};
pub use scoreboard::Scoreboard;
pub use session::SnakeSession;
pub use settings::{FRAMES_PER_SECOND, SnakeSettings};
pub use types::{Direction, GameOverReason, GamePhase, GameSnapshot, Position};
