//! Report building configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Maximum sample mention lines in a report. Default: 5.
    pub sample_mention_cap: Option<usize>,
    /// Query text length in sample lines before truncation. Default: 50.
    pub query_preview_chars: Option<usize>,
    /// Response length in the query log before truncation. Default: 200.
    pub response_preview_chars: Option<usize>,
    /// Co-mentioned competitors named per sample line. Default: 2.
    pub sample_competitor_count: Option<usize>,
    /// Emit the per-query log. Default: true.
    pub include_query_log: Option<bool>,
}

impl ScoringConfig {
    pub fn effective_sample_mention_cap(&self) -> usize {
        self.sample_mention_cap
            .unwrap_or(defaults::DEFAULT_SAMPLE_MENTION_CAP)
    }

    pub fn effective_query_preview_chars(&self) -> usize {
        self.query_preview_chars
            .unwrap_or(defaults::DEFAULT_QUERY_PREVIEW_CHARS)
    }

    pub fn effective_response_preview_chars(&self) -> usize {
        self.response_preview_chars
            .unwrap_or(defaults::DEFAULT_RESPONSE_PREVIEW_CHARS)
    }

    pub fn effective_sample_competitor_count(&self) -> usize {
        self.sample_competitor_count
            .unwrap_or(defaults::DEFAULT_SAMPLE_COMPETITOR_COUNT)
    }

    pub fn effective_include_query_log(&self) -> bool {
        self.include_query_log
            .unwrap_or(defaults::DEFAULT_INCLUDE_QUERY_LOG)
    }
}
