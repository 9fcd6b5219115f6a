// src/config/options.rs
use std::env;
use std::path::{Path, PathBuf};

use super::consts::*;

/// Runtime settings for the lookup pipeline.
/// Secrets come from the environment; nothing is embedded in the binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Generative model API key. Absence disables the AI fallback path
    /// (the lookup still works when live scraping succeeds).
    pub gemini_api_key: Option<String>,
    /// Model identifier for the fallback generator.
    pub model: String,
    /// SQLite file backing the query history.
    pub db_path: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: s!(DEFAULT_MODEL),
            db_path: Path::new(STORE_DIR).join(DEFAULT_DB_FILE),
        }
    }
}

impl AppOptions {
    pub fn from_env() -> Self {
        let mut opts = Self::default();

        match env::var(ENV_GEMINI_API_KEY) {
            Ok(k) if !k.trim().is_empty() => opts.gemini_api_key = Some(k),
            _ => logd!("Config: {} not set; AI fallback disabled", ENV_GEMINI_API_KEY),
        }
        if let Ok(m) = env::var(ENV_GEMINI_MODEL) {
            if !m.trim().is_empty() {
                opts.model = m;
            }
        }
        if let Ok(p) = env::var(ENV_DB_PATH) {
            if !p.trim().is_empty() {
                opts.db_path = PathBuf::from(p);
            }
        }

        logf!(
            "Config: model={}, db={}, ai_key={}",
            opts.model,
            opts.db_path.display(),
            if opts.gemini_api_key.is_some() { "present" } else { "missing" }
        );
        opts
    }
}
