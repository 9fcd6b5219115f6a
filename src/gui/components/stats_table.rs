// src/gui/components/stats_table.rs
//
// Draws the career table. The column set is whatever the source gave us;
// missing headers fall back to "Col N". Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(result) = &app.result else { return };
    let table = &result.table;

    let cols = table.column_count();
    if cols == 0 {
        return;
    }

    ui.label(RichText::new("📊 Career Performance").heading());
    ui.add_space(4.0);

    let headers: Vec<String> = match &table.headers {
        Some(h) => h.clone(),
        None => (1..=cols).map(|i| format!("Col {i}")).collect(),
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(110.0))
        .columns(Column::auto().at_least(70.0), cols.saturating_sub(1))
        .header(22.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(20.0, |mut out| {
                    for i in 0..cols {
                        out.col(|ui| {
                            ui.label(row.get(i).map(String::as_str).unwrap_or(""));
                        });
                    }
                });
            }
        });
}
