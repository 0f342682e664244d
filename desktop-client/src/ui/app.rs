use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use snake_egg_common::config::FileContentConfigProvider;
use snake_egg_common::games::snake::{
    AchievementTracker, Direction, FRAMES_PER_SECOND, GameEvent, GamePhase, SnakeSession,
};
use snake_egg_common::log;
use snake_egg_common::stats::{GameStats, StatsRecorder, StatsStore};

use super::toasts::Toasts;
use super::{board, hud};
use crate::config::Config;

/// A long hitch (window drag, breakpoint) is clamped so the snake never jumps.
const MAX_FRAMES_PER_UPDATE: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Turn(Direction),
    Start,
    TogglePause,
    Restart,
    NextMode,
    PreviousMode,
    ToggleGrid,
}

pub struct SnakeApp {
    session: SnakeSession,
    achievements: Rc<RefCell<AchievementTracker>>,
    recorder: Rc<RefCell<StatsRecorder<FileContentConfigProvider>>>,
    stats: GameStats,
    toasts: Toasts,
    show_grid: bool,
}

impl SnakeApp {
    pub fn new(config: Config) -> Self {
        let mut session = SnakeSession::new(config.game.clone());
        let store = StatsStore::new(FileContentConfigProvider::new(config.stats_path.clone()));
        let stats = store.load();
        if stats.is_first_time() {
            log!("No stats at {}, starting fresh", config.stats_path);
        } else {
            log!("Loaded stats: {} games, best {}", stats.games_played, stats.highest_score);
        }

        let achievements = Rc::new(RefCell::new(AchievementTracker::new()));
        let recorder = Rc::new(RefCell::new(StatsRecorder::new(store)));
        session.subscribe(Box::new(achievements.clone()));
        session.subscribe(Box::new(recorder.clone()));

        Self {
            session,
            achievements,
            recorder,
            stats,
            toasts: Toasts::default(),
            show_grid: config.show_grid,
        }
    }

    fn read_actions(input: &egui::InputState) -> Vec<Action> {
        let mut actions = Vec::new();

        let turn = if input.key_pressed(egui::Key::ArrowUp) || input.key_pressed(egui::Key::W) {
            Some(Direction::Up)
        } else if input.key_pressed(egui::Key::ArrowDown) || input.key_pressed(egui::Key::S) {
            Some(Direction::Down)
        } else if input.key_pressed(egui::Key::ArrowLeft) || input.key_pressed(egui::Key::A) {
            Some(Direction::Left)
        } else if input.key_pressed(egui::Key::ArrowRight) || input.key_pressed(egui::Key::D) {
            Some(Direction::Right)
        } else {
            None
        };
        if let Some(direction) = turn {
            actions.push(Action::Turn(direction));
        }

        if input.key_pressed(egui::Key::Enter) {
            actions.push(Action::Start);
        }
        if input.key_pressed(egui::Key::Space)
            || input.key_pressed(egui::Key::P)
            || input.key_pressed(egui::Key::Escape)
        {
            actions.push(Action::TogglePause);
        }
        if input.key_pressed(egui::Key::R) {
            actions.push(Action::Restart);
        }
        if input.key_pressed(egui::Key::M) {
            if input.modifiers.shift {
                actions.push(Action::PreviousMode);
            } else {
                actions.push(Action::NextMode);
            }
        }
        if input.key_pressed(egui::Key::G) {
            actions.push(Action::ToggleGrid);
        }
        actions
    }

    fn apply(&mut self, action: Action) {
        let phase = self.session.phase();
        let idle = matches!(phase, GamePhase::Ready | GamePhase::GameOver);

        let events = match action {
            Action::Turn(direction) => {
                self.session.submit_direction(direction);
                Vec::new()
            }
            Action::Start if idle => self.session.start(),
            Action::TogglePause => self.session.toggle_pause(),
            Action::Restart if phase != GamePhase::Ready => self.session.restart(),
            Action::NextMode if idle => {
                self.session.set_mode(self.session.next_mode().next());
                Vec::new()
            }
            Action::PreviousMode if idle => {
                self.session.set_mode(self.session.next_mode().previous());
                Vec::new()
            }
            Action::ToggleGrid => {
                self.show_grid = !self.show_grid;
                Vec::new()
            }
            Action::Start | Action::Restart | Action::NextMode | Action::PreviousMode => Vec::new(),
        };
        self.handle_events(&events);
    }

    fn handle_events(&mut self, events: &[GameEvent]) {
        if events.iter().any(|e| matches!(e, GameEvent::GameOver { .. }))
            && let Some(latest) = self.recorder.borrow().latest()
        {
            self.stats = latest.clone();
        }

        let unlocked = self.achievements.borrow_mut().take_unlocked();
        for id in unlocked {
            self.toasts.push(id.name(), id.description());
        }
    }

    fn run_frame(&mut self, dt_secs: f32) {
        if self.session.phase() == GamePhase::Playing {
            let events = self.session.tick(frames_for(dt_secs));
            self.handle_events(&events);
        }
        self.toasts.advance(dt_secs);
    }

    fn render_toasts(&self, ctx: &egui::Context) {
        for (index, toast) in self.toasts.iter().enumerate() {
            egui::Area::new(egui::Id::new(("achievement_toast", index)))
                .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 60.0 + index as f32 * 56.0))
                .show(ctx, |ui| {
                    ui.set_opacity(toast.opacity());
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(egui::RichText::new(toast.title.as_str()).strong());
                        ui.label(egui::RichText::new(&toast.body).small());
                    });
                });
        }
    }
}

/// Elapsed wall time in 60 Hz frames, the unit the session ticks in.
fn frames_for(dt_secs: f32) -> f64 {
    (f64::from(dt_secs) * FRAMES_PER_SECOND).clamp(0.0, MAX_FRAMES_PER_UPDATE)
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = ctx.input(Self::read_actions);
        for action in actions {
            self.apply(action);
        }

        let dt = ctx.input(|i| i.stable_dt);
        self.run_frame(dt);

        egui::TopBottomPanel::top("hud").show(ctx, |ui| {
            hud::render(ui, &self.session, &self.stats);
        });

        egui::TopBottomPanel::bottom("help").show(ctx, |ui| {
            ui.label(
                egui::RichText::new(
                    "Arrows/WASD steer  Space pause  R restart  Enter start  M mode  G grid",
                )
                .color(egui::Color32::GRAY)
                .small(),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                board::render(ui, &self.session, self.show_grid);
            });
        });

        self.render_toasts(ctx);
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_egg_common::games::snake::GameMode;

    fn test_app() -> (SnakeApp, String) {
        let mut path = std::env::temp_dir();
        path.push(format!("temp_snake_egg_stats_{}.json", rand::random::<u32>()));
        let stats_path = path.to_str().unwrap().to_string();
        let mut config = Config {
            stats_path: stats_path.clone(),
            ..Config::default()
        };
        config.game.seed = Some(5);
        config.game.power_up_chance = 0.0;
        config.game.obstacle_cap = 0;
        (SnakeApp::new(config), stats_path)
    }

    #[test]
    fn test_frames_for_clamps_hitches() {
        assert!((frames_for(1.0 / 60.0) - 1.0).abs() < 1e-6);
        assert_eq!(frames_for(1.0), MAX_FRAMES_PER_UPDATE);
        assert_eq!(frames_for(-0.5), 0.0);
    }

    #[test]
    fn test_mode_changes_only_between_games() {
        let (mut app, _) = test_app();
        app.apply(Action::NextMode);
        assert_eq!(app.session.next_mode(), GameMode::TimeAttack);
        app.apply(Action::PreviousMode);
        app.apply(Action::PreviousMode);
        assert_eq!(app.session.next_mode(), GameMode::SpeedRun);

        app.apply(Action::Start);
        assert_eq!(app.session.phase(), GamePhase::Playing);
        assert_eq!(app.session.mode(), GameMode::SpeedRun);
        app.apply(Action::NextMode);
        assert_eq!(app.session.next_mode(), GameMode::SpeedRun);
    }

    #[test]
    fn test_start_pause_and_restart() {
        let (mut app, _) = test_app();
        app.apply(Action::Restart);
        assert_eq!(app.session.phase(), GamePhase::Ready);

        app.apply(Action::Start);
        app.apply(Action::TogglePause);
        assert_eq!(app.session.phase(), GamePhase::Paused);
        app.apply(Action::Start);
        assert_eq!(app.session.phase(), GamePhase::Paused);
        app.apply(Action::TogglePause);
        assert_eq!(app.session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_game_over_records_stats() {
        let (mut app, stats_path) = test_app();
        app.apply(Action::Start);
        app.apply(Action::Turn(Direction::Up));
        for _ in 0..20 {
            app.run_frame(1.0 / 60.0);
        }
        assert_eq!(app.session.phase(), GamePhase::GameOver);
        assert_eq!(app.stats.games_played, 1);

        let reopened = StatsStore::new(FileContentConfigProvider::new(stats_path.clone()));
        assert_eq!(reopened.load().games_played, 1);
        let _ = std::fs::remove_file(&stats_path);
    }
}
