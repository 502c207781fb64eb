use crate::model::{self, CircleId, Circles};
use eframe::egui;

pub(super) fn circle_center(top_left: model::Point, diameter: f32) -> egui::Pos2 {
    top_left.to_pos2() + egui::vec2(diameter, diameter) * 0.5
}

pub(super) fn hit_test_circle(p: egui::Pos2, top_left: model::Point, diameter: f32, threshold: f32) -> bool {
    (p - circle_center(top_left, diameter)).length() <= diameter * 0.5 + threshold
}

/// Circles are drawn in id order, so the last hit is the one on top.
pub(super) fn topmost_hit(
    circles: &Circles,
    p: egui::Pos2,
    diameter: f32,
    threshold: f32,
) -> Option<CircleId> {
    circles
        .iter()
        .rev()
        .find(|(_, top_left)| hit_test_circle(p, **top_left, diameter, threshold))
        .map(|(id, _)| *id)
}

/// `bounds` is the area the top-left corner may occupy.
pub(super) fn clamp_to_canvas(top_left: egui::Pos2, bounds: egui::Vec2) -> model::Point {
    model::Point::new(
        top_left.x.clamp(0.0, bounds.x.max(0.0)),
        top_left.y.clamp(0.0, bounds.y.max(0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_inside_and_outside() {
        let top_left = model::Point::new(0.0, 0.0);
        assert!(hit_test_circle(egui::pos2(20.0, 20.0), top_left, 40.0, 0.0));
        assert!(hit_test_circle(egui::pos2(40.0, 20.0), top_left, 40.0, 0.0));
        // bounding-box corner is outside the circle
        assert!(!hit_test_circle(egui::pos2(1.0, 1.0), top_left, 40.0, 0.0));
        assert!(hit_test_circle(egui::pos2(43.0, 20.0), top_left, 40.0, 3.0));
    }

    #[test]
    fn overlapping_circles_pick_highest_id() {
        let mut circles = Circles::new();
        circles.insert(0, model::Point::new(0.0, 0.0));
        circles.insert(5, model::Point::new(10.0, 0.0));
        circles.insert(9, model::Point::new(200.0, 200.0));

        assert_eq!(topmost_hit(&circles, egui::pos2(25.0, 20.0), 40.0, 0.0), Some(5));
        assert_eq!(topmost_hit(&circles, egui::pos2(5.0, 20.0), 40.0, 0.0), Some(0));
        assert_eq!(topmost_hit(&circles, egui::pos2(120.0, 120.0), 40.0, 0.0), None);
    }

    #[test]
    fn clamp_keeps_circle_on_canvas() {
        let bounds = egui::vec2(100.0, 50.0);
        assert_eq!(clamp_to_canvas(egui::pos2(-5.0, 60.0), bounds), model::Point::new(0.0, 50.0));
        assert_eq!(clamp_to_canvas(egui::pos2(30.0, 20.0), bounds), model::Point::new(30.0, 20.0));
        assert_eq!(
            clamp_to_canvas(egui::pos2(30.0, 20.0), egui::vec2(-10.0, -10.0)),
            model::Point::new(0.0, 0.0)
        );
    }
}
