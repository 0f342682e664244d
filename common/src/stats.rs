use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigContentProvider, ConfigManager, JsonConfigSerializer, Validate};
use crate::games::snake::{GameEvent, GameObserver};
use crate::{log, log_warn};

/// Lifetime statistics, stored as a small JSON blob with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStats {
    pub games_played: u32,
    pub highest_score: u32,
    pub total_score: u64,
    pub average_score: u32,
    pub last_played: Option<String>,
}

impl GameStats {
    pub fn record_game(&mut self, final_score: u32, now: DateTime<Utc>) {
        self.games_played += 1;
        self.highest_score = self.highest_score.max(final_score);
        self.total_score += u64::from(final_score);
        self.average_score = (self.total_score as f64 / f64::from(self.games_played)).round() as u32;
        self.last_played = Some(now.to_rfc3339());
    }

    pub fn is_first_time(&self) -> bool {
        self.games_played == 0
    }
}

impl Validate for GameStats {
    fn validate(&self) -> Result<(), String> {
        if self.average_score > self.highest_score {
            return Err(format!(
                "averageScore {} exceeds highestScore {}",
                self.average_score, self.highest_score
            ));
        }
        if self.games_played == 0 && self.total_score > 0 {
            return Err("totalScore is set but no games were played".to_string());
        }
        Ok(())
    }
}

/// Loads and saves [`GameStats`] through any content provider.
/// Unreadable or corrupt content loads as fresh statistics.
pub struct StatsStore<P: ConfigContentProvider> {
    manager: ConfigManager<P, GameStats, JsonConfigSerializer>,
}

impl<P: ConfigContentProvider> StatsStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            manager: ConfigManager::new(provider, JsonConfigSerializer::new()),
        }
    }

    pub fn load(&self) -> GameStats {
        match self.manager.get_config() {
            Ok(stats) => stats,
            Err(e) => {
                log_warn!("Stats unreadable, starting fresh: {}", e);
                GameStats::default()
            }
        }
    }

    pub fn save(&self, stats: &GameStats) -> Result<(), String> {
        self.manager.set_config(stats)
    }

    pub fn record_game(&self, final_score: u32) -> Result<GameStats, String> {
        let mut stats = self.load();
        stats.record_game(final_score, Utc::now());
        self.save(&stats)?;
        Ok(stats)
    }

    /// Raises the stored high score. Returns true when `score` beat it.
    pub fn update_high_score(&self, score: u32) -> Result<bool, String> {
        let mut stats = self.load();
        if score <= stats.highest_score {
            return Ok(false);
        }
        stats.highest_score = score;
        self.save(&stats)?;
        Ok(true)
    }

    pub fn reset(&self) -> Result<(), String> {
        self.save(&GameStats::default())
    }

    pub fn is_first_time(&self) -> bool {
        self.load().is_first_time()
    }
}

/// Records every finished game into a [`StatsStore`].
pub struct StatsRecorder<P: ConfigContentProvider> {
    store: StatsStore<P>,
    latest: Option<GameStats>,
}

impl<P: ConfigContentProvider> StatsRecorder<P> {
    pub fn new(store: StatsStore<P>) -> Self {
        Self { store, latest: None }
    }

    pub fn store(&self) -> &StatsStore<P> {
        &self.store
    }

    pub fn latest(&self) -> Option<&GameStats> {
        self.latest.as_ref()
    }
}

impl<P: ConfigContentProvider> GameObserver for StatsRecorder<P> {
    fn notify(&mut self, event: &GameEvent) {
        let GameEvent::GameOver { final_score, .. } = *event else {
            return;
        };
        match self.store.record_game(final_score) {
            Ok(stats) => {
                log!(
                    "Stats saved: {} games, best {}, average {}",
                    stats.games_played,
                    stats.highest_score,
                    stats.average_score
                );
                self.latest = Some(stats);
            }
            Err(e) => log_warn!("Failed to save stats: {}", e),
        }
    }
}
