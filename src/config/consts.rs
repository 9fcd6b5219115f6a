// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const SCRAPE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

// Search
pub const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
pub const SEARCH_MAX_RESULTS: usize = 3;
pub const PROFILE_PATH_PATTERN: &str = "cricbuzz.com/profiles/";

// AI fallback
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

// Image lookup
pub const WIKIPEDIA_API: &str = "https://en.wikipedia.org/w/api.php";
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/200x200?text=No+Img";

// History
pub const HISTORY_LIMIT: usize = 5;
pub const DEFAULT_DB_FILE: &str = "history.db";

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Env vars (secrets externalized; never embedded)
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_DB_PATH: &str = "CRICKET_DB_PATH";
