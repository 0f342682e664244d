use crate::log;
use super::events::{GameEvent, GameObserver};

const COMBO_MASTER_TRIGGERS: u32 = 10;
const POWER_USER_COLLECTIONS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AchievementId {
    FirstFood,
    Score100,
    Score500,
    Level5,
    ComboMaster,
    PowerUser,
}

impl AchievementId {
    pub const ALL: [AchievementId; 6] = [
        AchievementId::FirstFood,
        AchievementId::Score100,
        AchievementId::Score500,
        AchievementId::Level5,
        AchievementId::ComboMaster,
        AchievementId::PowerUser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AchievementId::FirstFood => "First Bite",
            AchievementId::Score100 => "Century",
            AchievementId::Score500 => "High Scorer",
            AchievementId::Level5 => "Level Master",
            AchievementId::ComboMaster => "Combo Master",
            AchievementId::PowerUser => "Power User",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AchievementId::FirstFood => "Eat your first food",
            AchievementId::Score100 => "Reach 100 points",
            AchievementId::Score500 => "Reach 500 points",
            AchievementId::Level5 => "Reach level 5",
            AchievementId::ComboMaster => "Trigger 10 combos",
            AchievementId::PowerUser => "Collect 5 power-ups",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementId,
    pub unlocked: bool,
}

/// Unlocks achievements from session events. Unlocks persist across games;
/// the combo and power-up counters start over with each game.
#[derive(Debug)]
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
    combo_triggers: u32,
    power_ups_collected: u32,
    newly_unlocked: Vec<AchievementId>,
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self {
            achievements: AchievementId::ALL
                .iter()
                .map(|&id| Achievement { id, unlocked: false })
                .collect(),
            combo_triggers: 0,
            power_ups_collected: 0,
            newly_unlocked: Vec::new(),
        }
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.achievements.iter().any(|a| a.id == id && a.unlocked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Unlocks since the last call, oldest first.
    pub fn take_unlocked(&mut self) -> Vec<AchievementId> {
        std::mem::take(&mut self.newly_unlocked)
    }

    fn unlock(&mut self, id: AchievementId) {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id == id) else {
            return;
        };
        if achievement.unlocked {
            return;
        }
        achievement.unlocked = true;
        log!("Achievement unlocked: {}", id.name());
        self.newly_unlocked.push(id);
    }
}

impl GameObserver for AchievementTracker {
    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::GameStarted { .. } => {
                self.combo_triggers = 0;
                self.power_ups_collected = 0;
            }
            GameEvent::ScoreChanged { score } => {
                if score >= 10 {
                    self.unlock(AchievementId::FirstFood);
                }
                if score >= 100 {
                    self.unlock(AchievementId::Score100);
                }
                if score >= 500 {
                    self.unlock(AchievementId::Score500);
                }
            }
            GameEvent::LevelChanged { level } if level >= 5 => {
                self.unlock(AchievementId::Level5);
            }
            GameEvent::ComboTriggered { .. } => {
                self.combo_triggers += 1;
                if self.combo_triggers >= COMBO_MASTER_TRIGGERS {
                    self.unlock(AchievementId::ComboMaster);
                }
            }
            GameEvent::PowerUpCollected { .. } => {
                self.power_ups_collected += 1;
                if self.power_ups_collected >= POWER_USER_COLLECTIONS {
                    self.unlock(AchievementId::PowerUser);
                }
            }
            _ => {}
        }
    }
}
