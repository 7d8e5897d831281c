//! Batch parsing configuration.

use serde::{Deserialize, Serialize};

/// What the batch parser puts in each slot when no strategy recovers enough
/// segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Repeat the whole blob in every slot.
    #[default]
    Duplicate,
    /// Leave every slot empty.
    Empty,
}

impl FallbackMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "duplicate" => Some(Self::Duplicate),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParsingConfig {
    /// Fallback behaviour. Default: duplicate.
    pub fallback: Option<FallbackMode>,
}

impl ParsingConfig {
    pub fn effective_fallback(&self) -> FallbackMode {
        self.fallback.unwrap_or_default()
    }
}
