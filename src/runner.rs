// src/runner.rs
//
// The lookup pipeline. Linear, no branching back:
//
//   locate → live fetch → AI fallback → enrich (image) → record → present
//
// Fallback order is fixed priority: live data is authoritative when
// available, the generated table is a degraded-confidence substitute tried
// only after the preferred path is exhausted. Never speculative — one
// extra round trip is irrelevant at interactive, single-user latency.

use std::error::Error;

use reqwest::blocking::Client;

use crate::config::consts::{DEFAULT_TIMEOUT_SECS, SCRAPE_TIMEOUT_SECS};
use crate::config::options::AppOptions;
use crate::core::net;
use crate::data::{QueryRecord, SourceLabel, StatsTable};
use crate::history::History;
use crate::progress::Progress;
use crate::specs::{cricbuzz, gemini, wikipedia};

/// Seam between the pipeline and its external collaborators. Production
/// uses [`WebSources`]; tests substitute stubs and count calls.
pub trait Sources {
    /// Candidate profile URL for the player, or absent.
    fn locate(&self, player: &str) -> Option<String>;
    /// Batting career table scraped from the live page, or absent.
    fn fetch_live(&self, url: &str) -> Option<StatsTable>;
    /// Model-generated approximation, or absent.
    fn fetch_ai(&self, player: &str) -> Option<StatsTable>;
    /// Portrait URL; a placeholder when nothing suitable exists.
    fn resolve_image(&self, player: &str) -> String;
}

/// Real collaborators over HTTP.
pub struct WebSources {
    /// Short-timeout client for the scrape path, so a slow page can't
    /// hang the interactive flow.
    scrape_client: Client,
    /// Longer-timeout client for API calls (model inference is slow).
    api_client: Client,
    options: AppOptions,
}

impl WebSources {
    pub fn new(options: &AppOptions) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            scrape_client: net::client(SCRAPE_TIMEOUT_SECS)?,
            api_client: net::client(DEFAULT_TIMEOUT_SECS)?,
            options: options.clone(),
        })
    }

    /// Raw image bytes for the GUI's portrait texture. Best-effort.
    pub fn download(&self, url: &str) -> Option<Vec<u8>> {
        match net::get_bytes(&self.api_client, url) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                logd!("Download: {url} failed: {e}");
                None
            }
        }
    }
}

impl Sources for WebSources {
    fn locate(&self, player: &str) -> Option<String> {
        cricbuzz::locate_profile(&self.api_client, player)
    }

    fn fetch_live(&self, url: &str) -> Option<StatsTable> {
        cricbuzz::fetch_stats(&self.scrape_client, url)
    }

    fn fetch_ai(&self, player: &str) -> Option<StatsTable> {
        let Some(key) = &self.options.gemini_api_key else {
            logd!("AiFallback: skipped, no API key configured");
            return None;
        };
        gemini::generate_stats(&self.api_client, key, &self.options.model, player)
    }

    fn resolve_image(&self, player: &str) -> String {
        wikipedia::find_portrait(&self.api_client, player)
    }
}

/// Everything the presentation layer needs for one successful lookup.
pub struct Lookup {
    pub player: String,
    pub table: StatsTable,
    pub label: SourceLabel,
    pub image_url: String,
}

/// Run the full pipeline for one player name.
///
/// Returns `Err` only on total failure (neither live nor AI produced a
/// table); every other external failure degrades internally. A record is
/// appended to `history` exactly when a table was obtained.
pub fn run(
    player: &str,
    sources: &dyn Sources,
    history: &History,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Lookup, Box<dyn Error>> {
    let player = player.trim();
    if player.is_empty() {
        return Err("No player name given".into());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(4);
        p.log(&format!("Searching data sources for {player}…"));
    }
    logf!("Run: Begin player={player:?}");

    let mut table: Option<StatsTable> = None;
    let mut label = SourceLabel::Unknown;

    // Step 1+2: locate, then scrape the live page
    if let Some(url) = sources.locate(player) {
        if let Some(p) = progress.as_deref_mut() {
            p.stage_done("locate");
            p.log("Reading live stats page…");
        }
        if let Some(live) = sources.fetch_live(&url) {
            logf!("Run: live table ({} rows) from {url}", live.rows.len());
            table = Some(live);
            label = SourceLabel::Live;
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("live fetch");
    }

    // Step 3: AI backup, only on exhaustion of the live path
    if table.is_none() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Live search failed — asking the AI backup…");
        }
        if let Some(generated) = sources.fetch_ai(player) {
            logf!("Run: AI table ({} rows)", generated.rows.len());
            table = Some(generated);
            label = SourceLabel::AiGenerated;
        }
        if let Some(p) = progress.as_deref_mut() {
            p.stage_done("ai fallback");
        }
    }

    // Step 4: enrich — independent of table success
    if let Some(p) = progress.as_deref_mut() {
        p.log("Looking up portrait…");
    }
    let image_url = sources.resolve_image(player);
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("image");
        p.finish();
    }

    // Step 5+6: record and present, or signal total failure
    let Some(table) = table else {
        loge!("Run: total failure for {player:?}");
        return Err("System Failure: Both Live Search and AI Backup failed. \
                    Please check your internet or API Key."
            .into());
    };

    history.append(&QueryRecord::new(player, label));
    logf!("Run: Done player={player:?} source={}", label.label());

    Ok(Lookup {
        player: s!(player),
        table,
        label,
        image_url,
    })
}
