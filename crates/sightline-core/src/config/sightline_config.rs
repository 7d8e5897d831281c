//! Top-level Sightline configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{ExtractionConfig, FallbackMode, ObservabilityConfig, ParsingConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SIGHTLINE_*`)
/// 2. Project config (`sightline.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SightlineConfig {
    pub parsing: ParsingConfig,
    pub extraction: ExtractionConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl SightlineConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SightlineConfig) -> Result<(), ConfigError> {
        if config.extraction.ordinal_window_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.ordinal_window_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scoring.query_preview_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.query_preview_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scoring.response_preview_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.response_preview_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref level) = config.observability.log_level {
            if !defaults::LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_level".to_string(),
                    message: format!("must be one of {}", defaults::LOG_LEVELS.join(", ")),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut SightlineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SightlineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut SightlineConfig, other: &SightlineConfig) {
        if other.parsing.fallback.is_some() {
            base.parsing.fallback = other.parsing.fallback;
        }

        if other.extraction.ordinal_window_chars.is_some() {
            base.extraction.ordinal_window_chars = other.extraction.ordinal_window_chars;
        }
        if other.extraction.semantic_matching.is_some() {
            base.extraction.semantic_matching = other.extraction.semantic_matching;
        }

        if other.scoring.sample_mention_cap.is_some() {
            base.scoring.sample_mention_cap = other.scoring.sample_mention_cap;
        }
        if other.scoring.query_preview_chars.is_some() {
            base.scoring.query_preview_chars = other.scoring.query_preview_chars;
        }
        if other.scoring.response_preview_chars.is_some() {
            base.scoring.response_preview_chars = other.scoring.response_preview_chars;
        }
        if other.scoring.sample_competitor_count.is_some() {
            base.scoring.sample_competitor_count = other.scoring.sample_competitor_count;
        }
        if other.scoring.include_query_log.is_some() {
            base.scoring.include_query_log = other.scoring.include_query_log;
        }

        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SIGHTLINE_PARSING_FALLBACK`, `SIGHTLINE_EXTRACTION_ORDINAL_WINDOW_CHARS`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut SightlineConfig) {
        if let Ok(val) = std::env::var("SIGHTLINE_PARSING_FALLBACK") {
            if let Some(mode) = FallbackMode::parse(&val) {
                config.parsing.fallback = Some(mode);
            }
        }
        if let Ok(val) = std::env::var("SIGHTLINE_EXTRACTION_ORDINAL_WINDOW_CHARS") {
            if let Ok(v) = val.parse::<usize>() {
                config.extraction.ordinal_window_chars = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIGHTLINE_EXTRACTION_SEMANTIC_MATCHING") {
            if let Ok(v) = val.parse::<bool>() {
                config.extraction.semantic_matching = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIGHTLINE_SCORING_SAMPLE_MENTION_CAP") {
            if let Ok(v) = val.parse::<usize>() {
                config.scoring.sample_mention_cap = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIGHTLINE_LOG_LEVEL") {
            config.observability.log_level = Some(val.to_ascii_lowercase());
        }
    }
}
