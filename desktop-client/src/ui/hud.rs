use eframe::egui;
use snake_egg_common::games::snake::{FRAMES_PER_SECOND, GameMode, SnakeSession};
use snake_egg_common::stats::GameStats;

pub fn render(ui: &mut egui::Ui, session: &SnakeSession, stats: &GameStats) {
    let snapshot = session.snapshot();

    ui.horizontal(|ui| {
        ui.heading(format!("Score: {}", snapshot.score));
        ui.separator();
        ui.label(format!("Level {}", snapshot.level));
        ui.separator();
        ui.label(format!("Speed x{:.1}", snapshot.speed));
        ui.separator();
        ui.label(session.mode().name());

        if session.combo_count() > 1 {
            ui.separator();
            let secs = session.combo_timer() as f64 / FRAMES_PER_SECOND;
            ui.label(
                egui::RichText::new(format!("Combo x{} ({:.0}s)", session.combo_count(), secs))
                    .color(egui::Color32::GOLD),
            );
        }

        if let Some(frames) = session.boost_remaining_frames() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("Boost {:.1}s", frames as f64 / FRAMES_PER_SECOND))
                    .color(egui::Color32::LIGHT_BLUE),
            );
        }

        if let Some(remaining) = session.time_remaining_secs() {
            ui.separator();
            ui.label(format!("Time {:.0}s", remaining.ceil()));
        }

        if session.mode() == GameMode::Survival {
            ui.separator();
            ui.label(format!("Difficulty {}", session.difficulty()));
        }
    });

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "Best {}  Games {}  Average {}",
                stats.highest_score, stats.games_played, stats.average_score
            ))
            .color(egui::Color32::GRAY)
            .small(),
        );
    });
}
