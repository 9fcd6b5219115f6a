// src/gui/components/mod.rs
pub mod history_panel;
pub mod player_card;
pub mod search_bar;
pub mod stats_table;
