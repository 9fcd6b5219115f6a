// src/history.rs
//
// Append-only query log backed by SQLite. Logging is best-effort by
// contract: if the store cannot be opened, both operations silently
// become no-ops and the rest of the system keeps working.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

use crate::data::QueryRecord;

pub struct History {
    conn: Option<Connection>,
}

impl History {
    /// Open (or create) the history database. Never fails outward: an
    /// unreachable store degrades to a disconnected no-op log.
    pub fn open(path: &Path) -> Self {
        match Self::try_open(path) {
            Ok(conn) => {
                logf!("History: Connected → {}", path.display());
                Self { conn: Some(conn) }
            }
            Err(e) => {
                loge!("History: Offline ({}): {e}", path.display());
                Self { conn: None }
            }
        }
    }

    /// A log that drops everything. Used when no persistence is wanted.
    pub fn disabled() -> Self {
        Self { conn: None }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn try_open(path: &Path) -> Result<Connection, Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS search_history (
                id        INTEGER PRIMARY KEY,
                query     TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                source    TEXT NOT NULL
            );",
        )?;
        Ok(conn)
    }

    /// Append one record. Best-effort: failures go to the debug log only.
    pub fn append(&self, record: &QueryRecord) {
        let Some(conn) = &self.conn else {
            logd!("History: append dropped (offline)");
            return;
        };
        let res = conn.execute(
            "INSERT INTO search_history (query, timestamp, source) VALUES (?1, ?2, ?3)",
            params![
                record.query,
                record.timestamp.to_rfc3339(),
                record.source
            ],
        );
        match res {
            Ok(_) => logd!("History: appended {:?} ({})", record.query, record.source),
            Err(e) => loge!("History: append failed: {e}"),
        }
    }

    /// Most recent `n` records, newest first. Empty when offline.
    pub fn recent(&self, n: usize) -> Vec<QueryRecord> {
        let Some(conn) = &self.conn else {
            return Vec::new();
        };

        let mut stmt = match conn.prepare(
            "SELECT query, timestamp, source FROM search_history
             ORDER BY timestamp DESC LIMIT ?1",
        ) {
            Ok(s) => s,
            Err(e) => {
                loge!("History: recent() prepare failed: {e}");
                return Vec::new();
            }
        };

        let rows = stmt.query_map(params![n as i64], |row| {
            let query: String = row.get(0)?;
            let ts: String = row.get(1)?;
            let source: String = row.get(2)?;
            Ok((query, ts, source))
        });

        let mut out = Vec::new();
        match rows {
            Ok(iter) => {
                for item in iter.flatten() {
                    let (query, ts, source) = item;
                    // Skip rows with a mangled timestamp rather than guessing one
                    let Ok(parsed) = DateTime::parse_from_rfc3339(&ts) else {
                        logd!("History: skipping row with bad timestamp {ts:?}");
                        continue;
                    };
                    out.push(QueryRecord {
                        query,
                        timestamp: parsed.with_timezone(&Utc),
                        source,
                    });
                }
            }
            Err(e) => loge!("History: recent() query failed: {e}"),
        }
        out
    }
}
