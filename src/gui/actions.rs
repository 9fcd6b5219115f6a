// src/gui/actions.rs
//
// Button "executive" actions. Layout stays in components/; the operational
// logic lives here. The Analyze run is synchronous: one click, one full
// pipeline pass, UI repaints when it returns (interactive single-user
// scale, bounded by the per-call timeouts).

use eframe::egui;

use crate::config::consts::HISTORY_LIMIT;
use crate::gui::app::App;
use crate::gui::progress::GuiProgress;
use crate::runner;

pub fn analyze(app: &mut App, ctx: &egui::Context) {
    let player = app.state.gui.query_text.trim().to_string();
    if player.is_empty() {
        app.status("Enter a player name first");
        return;
    }

    logf!("Analyze: Begin player={player:?}");
    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the whole lookup happens ←
    match runner::run(&player, &app.sources, &app.history, Some(&mut prog)) {
        Ok(lookup) => {
            app.portrait = load_portrait(app, ctx, &lookup.image_url);
            app.status(format!("Source: {}", lookup.label.label()));
            app.result = Some(lookup);
            refresh_log(app);
        }
        Err(e) => {
            loge!("Analyze: Error player={player:?}: {e}");
            app.result = None;
            app.portrait = None;
            app.status(format!("{e}"));
        }
    }
}

pub fn refresh_log(app: &mut App) {
    app.log_rows = app.history.recent(HISTORY_LIMIT);
    logd!("Log: refreshed, {} row(s)", app.log_rows.len());
}

/// Fetch and decode the portrait into a texture. Best-effort; the card
/// renders without an image when this comes back `None`.
fn load_portrait(app: &App, ctx: &egui::Context, url: &str) -> Option<egui::TextureHandle> {
    let bytes = app.sources.download(url)?;
    let decoded = match image::load_from_memory(&bytes) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            logd!("Portrait: decode failed for {url}: {e}");
            return None;
        }
    };
    let (w, h) = decoded.dimensions();
    let color = egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        decoded.as_raw(),
    );
    Some(ctx.load_texture("portrait", color, egui::TextureOptions::LINEAR))
}
