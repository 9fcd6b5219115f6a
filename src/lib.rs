// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod cli;
pub mod data;
pub mod gui;
pub mod history;
pub mod progress;
pub mod runner;
