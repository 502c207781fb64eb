use eframe::egui;

use super::CirclesApp;
use super::geometry::circle_center;

const GRID_SPACING: f32 = 40.0;

pub(super) fn draw_background(painter: &egui::Painter, rect: egui::Rect, show_grid: bool) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(248));
    if !show_grid {
        return;
    }
    let grid_color = egui::Color32::from_gray(225);
    let mut x = rect.min.x + GRID_SPACING;
    while x < rect.max.x {
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            egui::Stroke::new(1.0, grid_color),
        );
        x += GRID_SPACING;
    }
    let mut y = rect.min.y + GRID_SPACING;
    while y < rect.max.y {
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(1.0, grid_color),
        );
        y += GRID_SPACING;
    }
}

impl CirclesApp {
    pub(super) fn draw_circles(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let radius = self.diameter * 0.5;
        let offset = origin.to_vec2();
        let dragged = self.drag.map(|d| d.circle_id);

        for (&id, &stored) in self.circles() {
            if Some(id) == dragged {
                continue;
            }
            let center = circle_center(stored, self.diameter) + offset;
            let color = if self.selected == Some(id) {
                egui::Color32::from_rgb(40, 90, 200)
            } else {
                egui::Color32::BLACK
            };
            painter.circle_stroke(center, radius, egui::Stroke::new(self.line_weight, color));
        }

        // the dragged circle goes last so it stays on top
        if let Some(drag) = self.drag {
            if let Some(stored) = self.board.get(drag.circle_id) {
                let ghost = circle_center(stored, self.diameter) + offset;
                painter.circle_stroke(
                    ghost,
                    radius,
                    egui::Stroke::new(1.0, egui::Color32::from_gray(170)),
                );
                let shown = self.display_position(drag.circle_id, stored);
                let center = circle_center(shown, self.diameter) + offset;
                painter.circle_stroke(
                    center,
                    radius,
                    egui::Stroke::new(self.line_weight, egui::Color32::from_rgb(40, 90, 200)),
                );
            }
        }
    }
}
