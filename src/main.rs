mod app;
mod error;
mod history;
mod model;
mod random;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Circles",
        native_options,
        Box::new(|cc| Ok(Box::new(app::CirclesApp::new(cc)))),
    )
}
