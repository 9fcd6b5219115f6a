// src/gui/components/history_panel.rs
//
// Sidebar log of recent queries. Pull model: rows load at startup and on
// Refresh, not live, so an offline store just shows an empty list.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Log");

    if ui.button("Refresh").clicked() {
        actions::refresh_log(app);
    }

    ui.separator();

    if app.log_rows.is_empty() {
        ui.weak("No queries yet");
        return;
    }

    for rec in &app.log_rows {
        ui.small(format!("{} - {}", rec.query, rec.source));
        ui.weak(rec.timestamp.format("%Y-%m-%d %H:%M").to_string());
        ui.add_space(4.0);
    }
}
