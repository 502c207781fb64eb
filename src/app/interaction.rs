use crate::model;
use eframe::egui;

use super::geometry::{clamp_to_canvas, topmost_hit};
use super::{CirclesApp, Drag};

const HIT_THRESHOLD: f32 = 2.0;

impl CirclesApp {
    /// Select on click, drag to move. The move is committed once, on release.
    pub(super) fn interact_canvas(
        &mut self,
        ctx: &egui::Context,
        response: &egui::Response,
        origin: egui::Pos2,
    ) {
        let pointer = ctx
            .input(|i| i.pointer.interact_pos())
            .map(|p| (p - origin).to_pos2());

        if response.clicked() {
            self.select_at(pointer);
        }

        if response.drag_started() {
            let press = ctx
                .input(|i| i.pointer.press_origin())
                .map(|p| (p - origin).to_pos2())
                .or(pointer);
            self.begin_drag(press);
        }

        if response.dragged() {
            if let Some(p) = pointer {
                self.update_drag(p);
            }
        }

        if response.drag_stopped() {
            self.finish_drag();
        }
    }

    /// Selects the topmost circle under `pointer`, or clears the selection.
    pub(super) fn select_at(&mut self, pointer: Option<egui::Pos2>) {
        self.selected = pointer
            .and_then(|p| topmost_hit(self.board.circles(), p, self.diameter, HIT_THRESHOLD));
    }

    pub(super) fn begin_drag(&mut self, press: Option<egui::Pos2>) {
        self.drag = None;
        let Some(p) = press else {
            return;
        };
        let hit = topmost_hit(self.board.circles(), p, self.diameter, HIT_THRESHOLD);
        self.selected = hit;
        let Some(circle_id) = hit else {
            return;
        };
        let Some(start) = self.board.get(circle_id) else {
            return;
        };
        self.drag = Some(Drag {
            circle_id,
            start,
            current: start,
            grab_offset: p - start.to_pos2(),
        });
    }

    pub(super) fn update_drag(&mut self, pointer: egui::Pos2) {
        let bounds = self.canvas_size;
        if let Some(drag) = &mut self.drag {
            drag.current = clamp_to_canvas(pointer - drag.grab_offset, bounds);
        }
    }

    pub(super) fn finish_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if drag.current == drag.start {
            return;
        }
        if self.move_circle(drag.circle_id, drag.current) {
            self.status = Some(format!("Moved circle {}", drag.circle_id));
        }
    }

    pub(super) fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Where a circle should be drawn this frame, accounting for a live drag.
    pub(super) fn display_position(&self, id: model::CircleId, stored: model::Point) -> model::Point {
        match self.drag {
            Some(drag) if drag.circle_id == id => drag.current,
            _ => stored,
        }
    }
}
