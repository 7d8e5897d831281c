//! Semantic matcher errors.
//!
//! These never escape the extractor: a failing matcher downgrades the
//! analysis to exact matching only.

use super::error_code::{self, SightlineErrorCode};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MatchError {
    #[error("semantic matcher unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("semantic match failed: {reason}")]
    Failed { reason: String },
}

impl SightlineErrorCode for MatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::SEMANTIC_MATCH_UNAVAILABLE,
            Self::Failed { .. } => error_code::SEMANTIC_MATCH_FAILED,
        }
    }
}
