// tests/pipeline.rs
//
// Fallback-chain properties, verified with stub sources and call counters.
// No network anywhere in here.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use cric_stats::data::{SourceLabel, StatsTable};
use cric_stats::history::History;
use cric_stats::runner::{self, Sources};

/// Scripted collaborators. Each call bumps its counter.
struct StubSources {
    url: Option<String>,
    live: Option<StatsTable>,
    ai: Option<StatsTable>,
    locate_calls: Cell<usize>,
    live_calls: Cell<usize>,
    ai_calls: Cell<usize>,
    image_calls: Cell<usize>,
}

impl StubSources {
    fn new(url: Option<&str>, live: Option<StatsTable>, ai: Option<StatsTable>) -> Self {
        Self {
            url: url.map(String::from),
            live,
            ai,
            locate_calls: Cell::new(0),
            live_calls: Cell::new(0),
            ai_calls: Cell::new(0),
            image_calls: Cell::new(0),
        }
    }
}

impl Sources for StubSources {
    fn locate(&self, _player: &str) -> Option<String> {
        self.locate_calls.set(self.locate_calls.get() + 1);
        self.url.clone()
    }
    fn fetch_live(&self, _url: &str) -> Option<StatsTable> {
        self.live_calls.set(self.live_calls.get() + 1);
        self.live.clone()
    }
    fn fetch_ai(&self, _player: &str) -> Option<StatsTable> {
        self.ai_calls.set(self.ai_calls.get() + 1);
        self.ai.clone()
    }
    fn resolve_image(&self, _player: &str) -> String {
        self.image_calls.set(self.image_calls.get() + 1);
        String::from("https://placehold.co/200x200?text=No+Img")
    }
}

fn batting_table() -> StatsTable {
    StatsTable {
        headers: Some(vec!["Format".into(), "Matches".into(), "Runs".into()]),
        rows: vec![
            vec!["Test".into(), "200".into(), "15921".into()],
            vec!["ODI".into(), "463".into(), "18426".into()],
        ],
    }
}

fn ai_table() -> StatsTable {
    StatsTable {
        headers: Some(vec!["Format".into(), "Runs".into()]),
        rows: vec![vec!["Test".into(), "5000".into()]],
    }
}

fn tmp_db(name: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!("cric_pipeline_{name}.db"));
    let _ = fs::remove_file(&p);
    p
}

#[test]
fn live_success_means_live_label_and_no_ai_call() {
    let sources = StubSources::new(
        Some("https://www.cricbuzz.com/profiles/25/sachin-tendulkar/stats"),
        Some(batting_table()),
        None,
    );
    let db = tmp_db("live");
    let history = History::open(&db);

    let start = Utc::now();
    let lookup = runner::run("Sachin Tendulkar", &sources, &history, None).unwrap();

    assert_eq!(lookup.label, SourceLabel::Live);
    assert_eq!(lookup.label.label(), "Live Cricbuzz Data 🔴");
    assert_eq!(sources.ai_calls.get(), 0, "AI must not run when live data exists");
    assert_eq!(sources.locate_calls.get(), 1);
    assert_eq!(sources.live_calls.get(), 1);
    assert_eq!(sources.image_calls.get(), 1);

    // Record appended with a Live source and a timestamp >= call start
    let recent = history.recent(1);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].query, "Sachin Tendulkar");
    assert!(recent[0].source.contains("Live"));
    assert!(recent[0].timestamp >= start);

    let _ = fs::remove_file(&db);
}

#[test]
fn locate_absent_invokes_ai_exactly_once() {
    let sources = StubSources::new(None, Some(batting_table()), Some(ai_table()));
    let history = History::disabled();

    let lookup = runner::run("Unknown Player", &sources, &history, None).unwrap();

    assert_eq!(sources.ai_calls.get(), 1);
    assert_eq!(sources.live_calls.get(), 0, "no URL, nothing to scrape");
    assert_eq!(lookup.label, SourceLabel::AiGenerated);
}

#[test]
fn live_fetch_absent_invokes_ai_exactly_once() {
    let sources = StubSources::new(
        Some("https://www.cricbuzz.com/profiles/1/x/stats"),
        None,
        Some(ai_table()),
    );
    let db = tmp_db("fallback");
    let history = History::open(&db);

    let lookup = runner::run("Some Player", &sources, &history, None).unwrap();

    assert_eq!(sources.live_calls.get(), 1);
    assert_eq!(sources.ai_calls.get(), 1);
    assert_eq!(lookup.label, SourceLabel::AiGenerated);

    let recent = history.recent(1);
    assert_eq!(recent.len(), 1);
    assert!(recent[0].source.contains("AI"));

    let _ = fs::remove_file(&db);
}

#[test]
fn total_failure_appends_nothing_and_errors() {
    let sources = StubSources::new(None, None, None);
    let db = tmp_db("failure");
    let history = History::open(&db);

    let res = runner::run("Zzqx Notaplayer", &sources, &history, None);

    assert!(res.is_err());
    assert_eq!(sources.ai_calls.get(), 1);
    // Image resolver is still consulted; its result must not change the outcome
    assert_eq!(sources.image_calls.get(), 1);
    assert!(history.recent(10).is_empty(), "failed lookups produce no record");

    let _ = fs::remove_file(&db);
}

#[test]
fn blank_player_name_is_rejected_before_any_call() {
    let sources = StubSources::new(None, None, None);
    let history = History::disabled();

    assert!(runner::run("   ", &sources, &history, None).is_err());
    assert_eq!(sources.locate_calls.get(), 0);
    assert_eq!(sources.ai_calls.get(), 0);
    assert_eq!(sources.image_calls.get(), 0);
}

#[test]
fn image_url_flows_through_on_success() {
    let sources = StubSources::new(None, None, Some(ai_table()));
    let history = History::disabled();

    let lookup = runner::run("Some Player", &sources, &history, None).unwrap();
    assert_eq!(lookup.image_url, "https://placehold.co/200x200?text=No+Img");
}
