// src/data.rs
//
// Core data shapes shared by the pipeline, the history store and both
// frontends.
//
// - StatsTable: opaque rows × columns; the column set varies by source
//   ("Runs", "Matches", "Format", …) and is never validated here. The
//   presentation layer renders whatever it is handed.
// - SourceLabel: provenance tag carried alongside a table. Drives UI
//   styling and is persisted (as its display string) in QueryRecord.
// - QueryRecord: one append-only row per successful lookup. Owned by the
//   History log; the runner only ever appends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tabular stats as scraped or generated. Headers are optional because a
/// live page does not always carry a `<th>` row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsTable {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl StatsTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    /// All cell text flattened to one lowercase string. This is what the
    /// batting-table heuristic matches against, so layout changes on the
    /// source page don't break token detection.
    pub fn flatten_lower(&self) -> String {
        let mut out = String::new();
        if let Some(h) = &self.headers {
            for c in h {
                out.push_str(&crate::core::html::to_lower(c));
                out.push(' ');
            }
        }
        for row in &self.rows {
            for c in row {
                out.push_str(&crate::core::html::to_lower(c));
                out.push(' ');
            }
        }
        out
    }
}

/// Which pipeline stage produced a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceLabel {
    Live,
    AiGenerated,
    Unknown,
}

impl SourceLabel {
    /// User-facing label, persisted verbatim in the history store.
    pub fn label(&self) -> &'static str {
        match self {
            SourceLabel::Live => "Live Cricbuzz Data 🔴",
            SourceLabel::AiGenerated => "AI Generated (Backup) 🤖",
            SourceLabel::Unknown => "Unknown",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, SourceLabel::Live)
    }
}

/// One logged lookup. Never mutated, never deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryRecord {
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

impl QueryRecord {
    pub fn new(query: &str, label: SourceLabel) -> Self {
        Self {
            query: s!(query),
            timestamp: Utc::now(),
            source: s!(label.label()),
        }
    }
}
