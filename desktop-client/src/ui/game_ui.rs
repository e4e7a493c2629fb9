use eframe::egui;
use egui::{Align, Layout};
use snake_common::games::snake::{Direction, FieldSize, Point, SnakeCommand, SnakeFrame};
use std::time::Duration;

use crate::state::GameOverNotice;
use super::colors;

const FLASH_DURATION: Duration = Duration::from_millis(400);
const FLASH_MAX_ALPHA: f32 = 128.0;
const SEGMENT_RADIUS: f32 = 0.45;
const FOOD_RADIUS: f32 = 0.38;

/// Draws the field and reports a restart when the canvas changes size, since
/// cell geometry is derived from it.
#[derive(Default)]
pub struct GameUi {
    last_canvas_size: Option<egui::Vec2>,
}

impl GameUi {
    pub fn new() -> Self {
        Self {
            last_canvas_size: None,
        }
    }

    pub fn render_scores(&self, ui: &mut egui::Ui, frame: Option<&SnakeFrame>) {
        let (score, high_score) = frame.map_or((0, 0), |f| (f.score, f.high_score));
        ui.horizontal(|ui| {
            ui.heading(format!("High Score: {}", high_score));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.heading(format!("Score: {}", score));
            });
        });
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        frame: Option<&SnakeFrame>,
        game_over: Option<&GameOverNotice>,
    ) -> Option<SnakeCommand> {
        let Some(frame) = frame else {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            return None;
        };

        let canvas_size = ui.available_size();
        let command = self.track_canvas_size(canvas_size);

        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::FIELD_BACKGROUND);
        self.draw_grid(&painter, rect, frame.field_size);
        self.draw_food(&painter, cell_rect(rect, frame.field_size, frame.food));
        self.draw_snake(&painter, rect, frame);

        if let Some(alpha) = game_over.and_then(|notice| flash_alpha(notice.received_at.elapsed())) {
            painter.rect_filled(rect, 0.0, colors::game_over_flash(alpha));
        }

        command
    }

    fn track_canvas_size(&mut self, size: egui::Vec2) -> Option<SnakeCommand> {
        let previous = self.last_canvas_size.replace(size);
        match previous {
            Some(previous) if (previous - size).length() > 0.5 => Some(SnakeCommand::Restart),
            _ => None,
        }
    }

    fn draw_grid(&self, painter: &egui::Painter, rect: egui::Rect, field: FieldSize) {
        let stroke = egui::Stroke::new(1.0, colors::GRID_LINE);
        let cell_width = rect.width() / field.width as f32;
        let cell_height = rect.height() / field.height as f32;

        for row in 0..=field.height {
            let y = rect.min.y + row as f32 * cell_height;
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                stroke,
            );
        }
        for col in 0..=field.width {
            let x = rect.min.x + col as f32 * cell_width;
            painter.line_segment(
                [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
                stroke,
            );
        }
    }

    fn draw_food(&self, painter: &egui::Painter, cell: egui::Rect) {
        let radius = cell.width().min(cell.height()) * FOOD_RADIUS;
        painter.circle_filled(cell.center(), radius, colors::FOOD);

        let leaf_center = cell.center() + egui::vec2(radius * 0.4, -radius * 0.9);
        painter.circle_filled(leaf_center, radius * 0.3, colors::FOOD_LEAF);
    }

    fn draw_snake(&self, painter: &egui::Painter, rect: egui::Rect, frame: &SnakeFrame) {
        // Tail first so the head ends up on top.
        for (index, segment) in frame.segments.iter().enumerate().rev() {
            let cell = cell_rect(rect, frame.field_size, *segment);
            let radius = cell.width().min(cell.height()) * SEGMENT_RADIUS;

            if index > 0 {
                painter.circle_filled(cell.center(), radius, colors::SNAKE_BODY);
                continue;
            }

            painter.circle_filled(cell.center(), radius, colors::SNAKE_HEAD);
            for eye in eye_positions(cell, frame.head_direction) {
                painter.circle_filled(eye, radius * 0.18, colors::SNAKE_EYE);
            }
        }
    }
}

/// Screen rectangle of `cell`; row 0 is drawn at the top of `canvas`.
pub fn cell_rect(canvas: egui::Rect, field: FieldSize, cell: Point) -> egui::Rect {
    let cell_width = canvas.width() / field.width as f32;
    let cell_height = canvas.height() / field.height as f32;
    let min = egui::pos2(
        canvas.min.x + cell.x as f32 * cell_width,
        canvas.min.y + cell.y as f32 * cell_height,
    );
    egui::Rect::from_min_size(min, egui::vec2(cell_width, cell_height))
}

/// Both eyes sit towards the front of the head, one on each side of the
/// travel direction.
pub fn eye_positions(cell: egui::Rect, direction: Direction) -> [egui::Pos2; 2] {
    let (dx, dy) = direction.delta();
    let forward = egui::vec2(dx as f32 * cell.width(), dy as f32 * cell.height()) * 0.2;
    let side = egui::vec2(-dy as f32 * cell.width(), dx as f32 * cell.height()) * 0.2;
    let center = cell.center() + forward;
    [center + side, center - side]
}

pub fn flash_alpha(elapsed: Duration) -> Option<u8> {
    if elapsed >= FLASH_DURATION {
        return None;
    }
    let remaining = 1.0 - elapsed.as_secs_f32() / FLASH_DURATION.as_secs_f32();
    Some((FLASH_MAX_ALPHA * remaining).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 720.0))
    }

    #[test]
    fn test_cell_rect_scales_to_canvas() {
        let rect = cell_rect(canvas(), FieldSize::new(20, 20), Point::new(3, 2));

        assert_eq!(rect.min, egui::pos2(120.0, 72.0));
        assert_eq!(rect.size(), egui::vec2(40.0, 36.0));
    }

    #[test]
    fn test_eyes_point_in_travel_direction() {
        let cell = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(10.0, 10.0));

        let [left, right] = eye_positions(cell, Direction::Right);
        assert!(left.x > 5.0 && right.x > 5.0);
        assert_ne!(left.y, right.y);

        let [a, b] = eye_positions(cell, Direction::Up);
        assert!(a.y < 5.0 && b.y < 5.0);
        assert_ne!(a.x, b.x);
    }

    #[test]
    fn test_flash_fades_out() {
        assert_eq!(flash_alpha(Duration::ZERO), Some(128));
        let halfway = flash_alpha(FLASH_DURATION / 2).unwrap();
        assert!(halfway > 0 && halfway < 128);
        assert_eq!(flash_alpha(FLASH_DURATION), None);
    }

    #[test]
    fn test_resize_requests_restart() {
        let mut game_ui = GameUi::new();

        assert_eq!(game_ui.track_canvas_size(egui::vec2(800.0, 720.0)), None);
        assert_eq!(game_ui.track_canvas_size(egui::vec2(800.0, 720.0)), None);
        assert_eq!(
            game_ui.track_canvas_size(egui::vec2(600.0, 520.0)),
            Some(SnakeCommand::Restart)
        );
    }
}
