// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::consts::HISTORY_LIMIT,
    config::state::AppState,
    data::QueryRecord,
    history::History,
    runner::{Lookup, WebSources},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app = App::new(AppState::from_env())?;
    eframe::run_native(
        "Cricket Stats Hub",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // pipeline collaborators; one blocking run per Analyze click
    pub sources: WebSources,
    pub history: History,

    // last successful lookup + decoded portrait
    pub result: Option<Lookup>,
    pub portrait: Option<egui::TextureHandle>,

    // sidebar log view (manual refresh, like the rest of the UI: pull, not push)
    pub log_rows: Vec<QueryRecord>,

    // status line (pipeline writes here via GuiProgress)
    pub status: Arc<Mutex<String>>,

    pub db_connected: bool,
}

impl App {
    pub fn new(state: AppState) -> Result<Self, Box<dyn Error>> {
        let sources = WebSources::new(&state.options)?;
        let history = History::open(&state.options.db_path);
        let db_connected = history.is_connected();
        let log_rows = history.recent(HISTORY_LIMIT);

        logf!(
            "Init: db_connected={}, log_rows={}",
            db_connected,
            log_rows.len()
        );

        Ok(Self {
            state,
            sources,
            history,
            result: None,
            portrait: None,
            log_rows,
            status: Arc::new(Mutex::new(s!("Idle"))),
            db_connected,
        })
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap().clone()
    }

    pub fn db_status_line(&self) -> &'static str {
        if self.db_connected { "✅ DB Connected" } else { "⚠️ DB Offline" }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("log")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::history_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::player_card::draw(ui, self);

            crate::gui::components::stats_table::draw(ui, self);
        });
    }
}
