use std::cell::RefCell;
use std::rc::Rc;

use super::modes::GameMode;
use super::types::{GameOverReason, Position};

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    GameStarted { mode: GameMode },
    Paused,
    Resumed,
    FoodEaten { position: Position },
    FoodSpawned { position: Position },
    ScoreChanged { score: u32 },
    LevelChanged { level: u32 },
    ComboTriggered { count: u32, bonus: u32 },
    PowerUpSpawned { position: Position },
    PowerUpCollected { position: Position },
    PowerUpExpired,
    ObstaclesPlaced { count: usize },
    DifficultyIncreased { difficulty: u32 },
    ObstacleHit { position: Position },
    WallHit { position: Position },
    SelfHit { position: Position },
    GameOver { final_score: u32, reason: GameOverReason, frames_played: u64 },
}

/// Receives every event a session emits, synchronously and in order.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl<T: GameObserver> GameObserver for Rc<RefCell<T>> {
    fn notify(&mut self, event: &GameEvent) {
        self.borrow_mut().notify(event);
    }
}

/// Collects events; handy for hosts that poll instead of reacting.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
