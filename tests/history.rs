// tests/history.rs
use std::fs;
use std::path::PathBuf;

use chrono::{Duration, Utc};

use cric_stats::data::{QueryRecord, SourceLabel};
use cric_stats::history::History;

fn tmp_db(name: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!("cric_history_{name}.db"));
    let _ = fs::remove_file(&p);
    p
}

fn record_at(query: &str, minutes_ago: i64) -> QueryRecord {
    QueryRecord {
        query: query.into(),
        timestamp: Utc::now() - Duration::minutes(minutes_ago),
        source: SourceLabel::Live.label().into(),
    }
}

#[test]
fn recent_returns_newest_first_and_respects_limit() {
    let db = tmp_db("order");
    let history = History::open(&db);
    assert!(history.is_connected());

    history.append(&record_at("oldest", 30));
    history.append(&record_at("middle", 20));
    history.append(&record_at("newest", 10));

    let two = history.recent(2);
    assert_eq!(two.len(), 2);
    assert_eq!(two[0].query, "newest");
    assert_eq!(two[1].query, "middle");
    assert!(two[0].timestamp > two[1].timestamp);

    let all = history.recent(10);
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].query, "oldest");

    let _ = fs::remove_file(&db);
}

#[test]
fn records_survive_reopen() {
    let db = tmp_db("reopen");
    {
        let history = History::open(&db);
        history.append(&record_at("persisted", 1));
    }
    let history = History::open(&db);
    let rows = history.recent(5);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].query, "persisted");
    assert!(rows[0].source.contains("Live"));

    let _ = fs::remove_file(&db);
}

#[test]
fn unreachable_store_degrades_to_noop() {
    // A path whose parent cannot be created: under a regular file.
    let blocker = tmp_db("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let inside = blocker.join("sub").join("history.db");

    let history = History::open(&inside);
    assert!(!history.is_connected());

    // Both operations are silent no-ops
    history.append(&record_at("dropped", 1));
    assert!(history.recent(5).is_empty());

    let _ = fs::remove_file(&blocker);
}

#[test]
fn disabled_log_is_noop() {
    let history = History::disabled();
    assert!(!history.is_connected());
    history.append(&record_at("dropped", 1));
    assert!(history.recent(1).is_empty());
}
