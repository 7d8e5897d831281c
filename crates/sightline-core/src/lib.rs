//! # sightline-core
//!
//! Foundation crate for the Sightline visibility engine.
//! Defines the value types that flow between stages, the semantic matcher
//! capability, errors, config, tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SightlineConfig;
pub use errors::{AllocationError, ConfigError, EngineError, MatchError, SightlineErrorCode};
pub use models::{
    Category, CategoryTable, Degradation, MentionAnalysis, Query, ResponseTable, VisibilityReport,
};
pub use traits::SemanticMatcher;
