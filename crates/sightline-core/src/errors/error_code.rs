//! Stable string codes for every error variant, for callers that log or
//! serialize errors across a process boundary.

pub const INVALID_ALLOCATION_INPUT: &str = "INVALID_ALLOCATION_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SEMANTIC_MATCH_UNAVAILABLE: &str = "SEMANTIC_MATCH_UNAVAILABLE";
pub const SEMANTIC_MATCH_FAILED: &str = "SEMANTIC_MATCH_FAILED";

/// Maps an error to its stable code.
pub trait SightlineErrorCode {
    fn error_code(&self) -> &'static str;
}
