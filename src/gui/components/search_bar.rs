// src/gui/components/search_bar.rs
//
// Header + query input + trigger. Enter in the text field counts as a
// click, same as the button.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("🏏 Smart Cricket Analyzer");
    ui.label(format!("System Status: {}", app.db_status_line()));
    ui.add_space(6.0);

    let mut go = false;
    ui.horizontal(|ui| {
        let edit = egui::TextEdit::singleline(&mut app.state.gui.query_text)
            .hint_text("e.g. Virat Kohli")
            .desired_width(320.0);
        let resp = ui.add(edit);
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            go = true;
        }

        if ui.button("Analyze 🚀").clicked() {
            go = true;
        }
    });

    ui.label(app.status_text());

    if go {
        let ctx = ui.ctx().clone();
        actions::analyze(app, &ctx);
    }
}
