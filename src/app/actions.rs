use crate::error::Result;
use crate::model::{self, CircleId, Circles};
use eframe::egui;

use super::{document, settings, CirclesApp};

impl CirclesApp {
    pub(super) fn circles(&self) -> &Circles {
        self.board.circles()
    }

    pub(super) fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub(super) fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn record(&mut self) {
        self.history.record(self.board.circles().clone());
    }

    /// Adds a circle at a random spot inside the canvas. Returns `None` and
    /// reports in the status bar if no id is left to hand out.
    pub(super) fn add_circle(&mut self) -> Option<CircleId> {
        let max_x = self.canvas_size.x.max(0.0).floor() as u32;
        let max_y = self.canvas_size.y.max(0.0).floor() as u32;
        let x = self.random.generate(max_x) as f32;
        let y = self.random.generate(max_y) as f32;
        match self.board.add_circle(model::Point::new(x, y)) {
            Ok(id) => {
                self.record();
                log::info!("added circle {id} at ({x}, {y})");
                Some(id)
            }
            Err(e) => {
                log::error!("add circle failed: {e}");
                self.status = Some(format!("Add failed: {e}"));
                None
            }
        }
    }

    pub(super) fn move_circle(&mut self, id: CircleId, position: model::Point) -> bool {
        if !self.board.move_circle(id, position) {
            log::warn!("move ignored: no circle {id}");
            return false;
        }
        self.record();
        log::debug!("moved circle {id} to ({}, {})", position.x, position.y);
        true
    }

    pub(super) fn remove_circle(&mut self, id: CircleId) -> bool {
        if !self.board.remove_circle(id) {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag.is_some_and(|d| d.circle_id == id) {
            self.drag = None;
        }
        self.record();
        log::info!("removed circle {id}");
        true
    }

    pub(super) fn remove_selected(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        if self.remove_circle(id) {
            self.status = Some(format!("Removed circle {id}"));
        }
    }

    pub(super) fn clear(&mut self) {
        if self.board.is_empty() {
            return;
        }
        let count = self.board.len();
        self.board.clear();
        self.selected = None;
        self.drag = None;
        self.record();
        self.status = Some(format!("Cleared {count} circle(s)"));
        log::info!("cleared {count} circle(s)");
    }

    /// Empty board and fresh history.
    pub(super) fn new_board(&mut self) {
        self.board = model::Board::default();
        self.history.reset(self.board.circles().clone());
        self.selected = None;
        self.drag = None;
        self.status = Some("New board".to_string());
        log::info!("started a new board");
    }

    pub(super) fn undo(&mut self) {
        if self.history.undo().is_none() {
            return;
        }
        self.restore_current();
        log::debug!("undo -> position {}", self.history.position());
    }

    pub(super) fn redo(&mut self) {
        if self.history.redo().is_none() {
            return;
        }
        self.restore_current();
        log::debug!("redo -> position {}", self.history.position());
    }

    fn restore_current(&mut self) {
        self.board.restore(self.history.current().clone());
        self.drag = None;
        if self.selected.is_some_and(|id| self.board.get(id).is_none()) {
            self.selected = None;
        }
        self.status = None;
    }

    pub(super) fn save_to_path(&mut self, path: &str) -> Result<()> {
        document::save_board(path, &self.board)?;
        log::info!("saved {} circle(s) to {path}", self.board.len());
        Ok(())
    }

    /// Loading counts as an action so it can be undone.
    pub(super) fn load_from_path(&mut self, path: &str) -> Result<()> {
        let loaded = document::load_board(path)?;
        self.board.replace_with_loaded(loaded)?;
        self.selected = None;
        self.drag = None;
        self.record();
        log::info!("loaded {} circle(s) from {path}", self.board.len());
        Ok(())
    }

    pub(super) fn quick_save(&mut self) {
        let path = self.file_path.clone();
        self.status = Some(match self.save_to_path(&path) {
            Ok(()) => format!("Saved {path}"),
            Err(e) => {
                log::error!("save to {path} failed: {e}");
                format!("Save failed: {e}")
            }
        });
    }

    pub(super) fn save_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&self.file_path)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        let path_str = path.display().to_string();
        self.status = Some(match self.save_to_path(&path_str) {
            Ok(()) => {
                self.file_path = path_str.clone();
                format!("Saved {path_str}")
            }
            Err(e) => {
                log::error!("save to {path_str} failed: {e}");
                format!("Save failed: {e}")
            }
        });
    }

    pub(super) fn open_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        let path_str = path.display().to_string();
        self.status = Some(match self.load_from_path(&path_str) {
            Ok(()) => {
                self.file_path = path_str.clone();
                format!("Loaded {path_str}")
            }
            Err(e) => {
                log::error!("load from {path_str} failed: {e}");
                format!("Load failed: {e}")
            }
        });
    }

    pub(super) fn settings_snapshot(&self) -> settings::AppSettings {
        settings::AppSettings {
            file_path: self.file_path.clone(),
            diameter: self.diameter,
            line_weight: self.line_weight,
            history_limit: self.history_limit,
            show_grid: self.show_grid,
        }
    }

    pub(super) fn persist_settings(&mut self) {
        let snapshot = self.settings_snapshot();
        match settings::save_settings(&self.settings_path, &snapshot) {
            Ok(()) => {
                log::info!("saved settings to {}", self.settings_path);
                self.status = Some(format!("Settings saved to {}", self.settings_path));
            }
            Err(e) => {
                log::error!("settings save failed: {e}");
                self.status = Some(format!("Settings save failed: {e}"));
            }
        }
    }

    pub(super) fn apply_settings(&mut self, settings: settings::AppSettings) {
        self.file_path = settings.file_path;
        self.diameter = settings.diameter;
        self.line_weight = settings.line_weight;
        self.show_grid = settings.show_grid;
        self.history_limit = settings.history_limit;
        self.history.set_limit(settings.history_limit);
    }

    pub(super) fn reload_settings(&mut self) {
        let settings = settings::load_or_default(&self.settings_path);
        self.apply_settings(settings);
        self.status = Some("Settings reloaded".to_string());
    }

    pub(super) fn status_line(&self) -> String {
        let mut line = format!(
            "{} circle(s) | undo {} | redo {} | {} snapshot(s)",
            self.board.len(),
            self.history.undo_depth(),
            self.history.redo_depth(),
            self.history.len()
        );
        if let Some(limit) = self.history.limit() {
            line.push_str(&format!(" (max {limit})"));
        }
        if let Some(id) = self.selected {
            line.push_str(&format!(" | selected {id}"));
        }
        line
    }

    /// Called every frame with the drawable canvas size.
    pub(super) fn set_canvas_size(&mut self, available: egui::Vec2) {
        self.canvas_size = (available - egui::vec2(self.diameter, self.diameter)).max(egui::Vec2::ZERO);
    }
}
