use eframe::egui;

pub(super) fn draw_help_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Help")
        .open(open)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Keyboard Shortcuts");
                ui.separator();
                help_row(ui, "N / ⌘N", "Add a circle at a random spot");
                help_row(ui, "⌘Z", "Undo");
                help_row(ui, "⌘⇧Z / ⌘Y", "Redo");
                help_row(ui, "Delete / Backspace", "Remove selected circle");
                help_row(ui, "Escape", "Cancel drag and clear selection");
                help_row(ui, "⌘S", "Save circles (JSON)");
                help_row(ui, "⌘O", "Open circles");
                help_row(ui, "F1", "Show this window");

                ui.add_space(10.0);
                ui.heading("Mouse");
                ui.separator();
                help_row(ui, "Click", "Select a circle");
                help_row(ui, "Drag", "Move a circle; one undo step per drop");

                ui.add_space(10.0);
                ui.heading("Settings");
                ui.separator();
                ui.label("Settings are read from ~/.config/circlepad.toml or ./settings.toml:");
                ui.add_space(5.0);
                ui.code(r##"file_path = "circles.json"
diameter = 40.0
line_weight = 3.0
history_limit = 200
show_grid = true"##);
                ui.add_space(5.0);
                ui.label("Leave out history_limit to keep every step.");
            });
        });
}

fn help_row(ui: &mut egui::Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [130.0, 16.0],
            egui::Label::new(egui::RichText::new(shortcut).monospace().strong()),
        );
        ui.label(description);
    });
}
