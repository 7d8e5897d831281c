//! Error handling for Sightline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod allocation_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod match_error;

pub use allocation_error::AllocationError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::SightlineErrorCode;
pub use match_error::MatchError;
