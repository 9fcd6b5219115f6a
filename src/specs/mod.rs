// src/specs/mod.rs
//! # Source adapter "specs"
//!
//! Each spec encodes **where the ground truth lives for one external
//! source** and how to extract it tolerantly:
//!
//! - `cricbuzz` – locate a player profile via web search and read the
//!   batting career table off the live stats page.
//! - `gemini` – last-resort generated stats from a text model, parsed out
//!   of (possibly fenced) JSON.
//! - `wikipedia` – portrait lookup by exact page title.
//!
//! Specs only extract. Sequencing, provenance labelling and history live
//! in `runner`; persistence lives in `history`; presentation lives in
//! `gui`/`cli`.
//!
//! Conventions:
//! - Case-insensitive tag scanning via `core::html`; no brittle
//!   full-document regexes.
//! - Failures degrade to `None` (or a placeholder for the portrait) and go
//!   to the debug log; nothing here raises to the caller.

pub mod cricbuzz;
pub mod gemini;
pub mod wikipedia;
