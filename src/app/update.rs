use eframe::egui;

use super::CirclesApp;
use super::help::draw_help_window;
use super::render::draw_background;

impl eframe::App for CirclesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wants_keyboard = ctx.wants_keyboard_input();
        ctx.input_mut(|i| {
            if i.consume_key(egui::Modifiers::NONE, egui::Key::F1) {
                self.show_help = true;
            }
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::S) {
                self.save_dialog();
            }
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::O) {
                self.open_dialog();
            }
            if wants_keyboard {
                return;
            }
            if i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Z)
                || i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y)
            {
                self.redo();
            } else if i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z) {
                self.undo();
            }
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::N)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::N)
            {
                self.add_circle();
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Delete)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::Backspace)
            {
                self.remove_selected();
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                self.cancel_drag();
                self.selected = None;
            }
        });

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New board").clicked() {
                        self.new_board();
                        ui.close_menu();
                    }
                    if ui.button("Open... (⌘O)").clicked() {
                        self.open_dialog();
                        ui.close_menu();
                    }
                    if ui.button("Save... (⌘S)").clicked() {
                        self.save_dialog();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.small("Quick save path:");
                    ui.text_edit_singleline(&mut self.file_path);
                    if ui.button("Quick save").clicked() {
                        self.quick_save();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Save settings").clicked() {
                        self.persist_settings();
                        ui.close_menu();
                    }
                    if ui.button("Reload settings").clicked() {
                        self.reload_settings();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui.button("Add circle (N)").clicked() {
                        self.add_circle();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.can_undo(), egui::Button::new("Undo (⌘Z)"))
                        .clicked()
                    {
                        self.undo();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.can_redo(), egui::Button::new("Redo (⌘⇧Z)"))
                        .clicked()
                    {
                        self.redo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.selected.is_some(), egui::Button::new("Delete selected"))
                        .clicked()
                    {
                        self.remove_selected();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(!self.circles().is_empty(), egui::Button::new("Clear"))
                        .clicked()
                    {
                        self.clear();
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_grid, "Grid");
                    ui.add(egui::Slider::new(&mut self.diameter, 10.0..=120.0).text("Diameter"));
                    ui.add(egui::Slider::new(&mut self.line_weight, 1.0..=10.0).text("Line weight"));
                });
                if ui.button("Help").clicked() {
                    self.show_help = true;
                }
                ui.separator();
                if ui.button("Add circle").clicked() {
                    self.add_circle();
                }
                if ui.add_enabled(self.can_undo(), egui::Button::new("Undo")).clicked() {
                    self.undo();
                }
                if ui.add_enabled(self.can_redo(), egui::Button::new("Redo")).clicked() {
                    self.redo();
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_line());
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.set_canvas_size(rect.size());
                self.interact_canvas(ctx, &response, rect.min);

                let painter = ui.painter_at(rect);
                draw_background(&painter, rect, self.show_grid);
                self.draw_circles(&painter, rect.min);
            });

        draw_help_window(ctx, &mut self.show_help);
    }
}
