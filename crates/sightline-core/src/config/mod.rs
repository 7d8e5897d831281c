//! Configuration system for Sightline.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod defaults;
pub mod extraction_config;
pub mod observability_config;
pub mod parsing_config;
pub mod scoring_config;
pub mod sightline_config;

pub use extraction_config::ExtractionConfig;
pub use observability_config::ObservabilityConfig;
pub use parsing_config::{FallbackMode, ParsingConfig};
pub use scoring_config::ScoringConfig;
pub use sightline_config::SightlineConfig;
