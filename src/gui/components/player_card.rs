// src/gui/components/player_card.rs
//
// Portrait + name + provenance banner. Provenance must always be visible:
// live data renders success-styled, the AI approximation warning-styled.
// Nothing is drawn while there is no result.

use eframe::egui::{self, Color32, RichText};

use crate::core::sanitize::title_case;
use crate::data::SourceLabel;
use crate::gui::app::App;

const SUCCESS: Color32 = Color32::from_rgb(46, 125, 50);
const WARNING: Color32 = Color32::from_rgb(230, 145, 20);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(result) = &app.result else { return };

    ui.horizontal(|ui| {
        if let Some(tex) = &app.portrait {
            let size = tex.size_vec2();
            let scaled = size * (150.0 / size.x.max(1.0));
            ui.image((tex.id(), scaled));
        }

        ui.vertical(|ui| {
            ui.heading(title_case(&result.player));
            match result.label {
                SourceLabel::Live => {
                    ui.colored_label(
                        SUCCESS,
                        RichText::new(format!("Source: {}", result.label.label())).strong(),
                    );
                }
                SourceLabel::AiGenerated | SourceLabel::Unknown => {
                    ui.colored_label(
                        WARNING,
                        RichText::new(format!(
                            "Source: {} (Live search blocked/failed)",
                            result.label.label()
                        ))
                        .strong(),
                    );
                }
            }
        });
    });

    ui.separator();
}
