// Single source of truth for all default values.

// --- Parsing ---
pub const DEFAULT_FALLBACK_MODE: &str = "duplicate";

// --- Extraction ---
pub const DEFAULT_ORDINAL_WINDOW_CHARS: usize = 100;
pub const DEFAULT_SEMANTIC_MATCHING: bool = true;

// --- Scoring ---
pub const DEFAULT_SAMPLE_MENTION_CAP: usize = 5;
pub const DEFAULT_QUERY_PREVIEW_CHARS: usize = 50;
pub const DEFAULT_RESPONSE_PREVIEW_CHARS: usize = 200;
pub const DEFAULT_SAMPLE_COMPETITOR_COUNT: usize = 2;
pub const DEFAULT_INCLUDE_QUERY_LOG: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// --- Files & environment ---
pub const PROJECT_CONFIG_FILENAME: &str = "sightline.toml";
pub const LOG_ENV_VAR: &str = "SIGHTLINE_LOG";
