//! Mention/rank extraction configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters inspected after an ordinal token. Default: 100.
    pub ordinal_window_chars: Option<usize>,
    /// Consult the injected semantic matcher, if any. Default: true.
    pub semantic_matching: Option<bool>,
}

impl ExtractionConfig {
    /// Returns the effective ordinal window, defaulting to 100.
    pub fn effective_ordinal_window_chars(&self) -> usize {
        self.ordinal_window_chars
            .unwrap_or(defaults::DEFAULT_ORDINAL_WINDOW_CHARS)
    }

    /// Returns whether semantic matching is enabled, defaulting to true.
    pub fn effective_semantic_matching(&self) -> bool {
        self.semantic_matching
            .unwrap_or(defaults::DEFAULT_SEMANTIC_MATCHING)
    }
}
