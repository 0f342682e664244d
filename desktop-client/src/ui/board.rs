use eframe::egui;
use snake_egg_common::games::snake::{GamePhase, Position, SnakeSession};

use crate::colors;

pub fn render(ui: &mut egui::Ui, session: &SnakeSession, show_grid: bool) {
    let cell_size = session.settings().cell_size;
    let cell = cell_size as f32;
    let grid = session.grid();
    let size = egui::vec2(grid.width as f32 * cell, grid.height as f32 * cell);

    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let board = response.rect;
    painter.rect_filled(board, 4.0, colors::BACKGROUND);

    if show_grid {
        let stroke = egui::Stroke::new(1.0, colors::GRID_LINE);
        for x in 1..grid.width {
            let px = board.min.x + x as f32 * cell;
            painter.line_segment([egui::pos2(px, board.min.y), egui::pos2(px, board.max.y)], stroke);
        }
        for y in 1..grid.height {
            let py = board.min.y + y as f32 * cell;
            painter.line_segment([egui::pos2(board.min.x, py), egui::pos2(board.max.x, py)], stroke);
        }
    }

    let cell_rect = |pos: Position| {
        let (x, y) = pos.to_pixels(cell_size);
        egui::Rect::from_min_size(board.min + egui::vec2(x as f32, y as f32), egui::vec2(cell, cell))
    };

    for &obstacle in session.obstacle_positions() {
        painter.rect_filled(cell_rect(obstacle).shrink(1.0), 3.0, colors::OBSTACLE);
    }

    painter.circle_filled(cell_rect(session.food_position()).center(), cell * 0.4, colors::FOOD);

    if let Some(position) = session.power_up_position() {
        let time = ui.input(|i| i.time);
        let pulse = 0.35 + 0.08 * (time * 6.0).sin() as f32;
        painter.circle_filled(cell_rect(position).center(), cell * pulse, colors::POWER_UP);
    }

    let body = session.snake().body();
    let boosted = session.boost_remaining_frames().is_some();
    for (index, &segment) in body.iter().enumerate().rev() {
        let color = match index {
            0 if boosted => colors::BOOSTED_HEAD,
            0 => colors::HEAD,
            _ => colors::body_color(index, body.len()),
        };
        painter.rect_filled(cell_rect(segment).shrink(1.0), 4.0, color);
    }

    match session.phase() {
        GamePhase::Ready => overlay(
            &painter,
            board,
            "Snake",
            &format!(
                "{}: {}\nEnter to start, M to change mode",
                session.next_mode().name(),
                session.next_mode().description()
            ),
        ),
        GamePhase::Paused => overlay(&painter, board, "Paused", "Space to resume"),
        GamePhase::GameOver => {
            let reason = session.game_over_reason().map(|r| r.describe()).unwrap_or_default();
            overlay(
                &painter,
                board,
                "Game Over",
                &format!(
                    "{}\nScore {}  Level {}\nEnter to play again, M to change mode",
                    reason,
                    session.snapshot().score,
                    session.snapshot().level
                ),
            );
        }
        GamePhase::Playing => {}
    }
}

fn overlay(painter: &egui::Painter, board: egui::Rect, title: &str, subtitle: &str) {
    painter.rect_filled(board, 4.0, colors::OVERLAY);
    painter.text(
        board.center() - egui::vec2(0.0, 30.0),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(36.0),
        egui::Color32::WHITE,
    );
    painter.text(
        board.center() + egui::vec2(0.0, 25.0),
        egui::Align2::CENTER_CENTER,
        subtitle,
        egui::FontId::proportional(16.0),
        egui::Color32::LIGHT_GRAY,
    );
}
