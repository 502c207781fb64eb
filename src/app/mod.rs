use crate::history::History;
use crate::model::{self, CircleId, Circles};
use crate::random::{RandomGenerator, ThreadRandom};
use eframe::egui;

mod actions;
mod document;
mod geometry;
mod help;
mod interaction;
mod render;
mod settings;
mod update;

/// A circle being dragged. Positions are canvas coordinates of the top-left
/// corner; nothing is written to the board until the drag ends.
#[derive(Clone, Copy, Debug)]
struct Drag {
    circle_id: CircleId,
    start: model::Point,
    current: model::Point,
    grab_offset: egui::Vec2,
}

pub struct CirclesApp {
    board: model::Board,
    history: History<Circles>,
    random: Box<dyn RandomGenerator>,
    /// Area a circle's top-left corner may occupy: the canvas minus one diameter.
    canvas_size: egui::Vec2,
    selected: Option<CircleId>,
    drag: Option<Drag>,
    diameter: f32,
    line_weight: f32,
    show_grid: bool,
    history_limit: Option<usize>,
    file_path: String,
    settings_path: String,
    status: Option<String>,
    show_help: bool,
}

impl CirclesApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path =
            settings::config_path().unwrap_or_else(|| "settings.toml".to_string());
        let settings = settings::load_or_default(&settings_path);
        Self::with_parts(settings, Box::new(ThreadRandom), settings_path)
    }

    fn with_parts(
        settings: settings::AppSettings,
        random: Box<dyn RandomGenerator>,
        settings_path: String,
    ) -> Self {
        let board = model::Board::default();
        let mut history = History::new(board.circles().clone());
        history.set_limit(settings.history_limit);
        Self {
            board,
            history,
            random,
            canvas_size: egui::Vec2::ZERO,
            selected: None,
            drag: None,
            diameter: settings.diameter,
            line_weight: settings.line_weight,
            show_grid: settings.show_grid,
            history_limit: settings.history_limit,
            file_path: settings.file_path,
            settings_path,
            status: None,
            show_help: false,
        }
    }
}
