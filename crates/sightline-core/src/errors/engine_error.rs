//! Top-level engine error, aggregating subsystem errors via `From`.

use super::error_code::SightlineErrorCode;
use super::{AllocationError, ConfigError, MatchError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Allocation error: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Matcher error: {0}")]
    Match(#[from] MatchError),
}

impl SightlineErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Allocation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Match(e) => e.error_code(),
        }
    }
}
