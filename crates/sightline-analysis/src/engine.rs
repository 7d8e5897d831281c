//! VisibilityEngine: binds configuration and an optional semantic matcher to
//! the pipeline stages.
//!
//! allocate budget → plan queries → (providers answer) → split batches →
//! analyze responses → score

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use sightline_core::config::SightlineConfig;
use sightline_core::errors::EngineError;
use sightline_core::models::{
    CategoryTable, MentionAnalysis, OrderedTally, Query, ResponseTable, VisibilityReport,
};
use sightline_core::traits::SemanticMatcher;

use crate::allocation::allocate_table;
use crate::batch::{BatchParse, BatchResponseParser};
use crate::extraction::MentionExtractor;
use crate::scoring::ScoringAggregator;

/// Entry point for hosts that drive the whole scoring flow.
///
/// Stateless between calls and `Send + Sync`; share it behind an `Arc` to
/// fan out per provider.
#[derive(Clone)]
pub struct VisibilityEngine {
    config: SightlineConfig,
    matcher: Option<Arc<dyn SemanticMatcher>>,
    parser: BatchResponseParser,
}

impl std::fmt::Debug for VisibilityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityEngine")
            .field("config", &self.config)
            .field("matcher", &self.matcher.as_ref().map(|m| m.name().to_string()))
            .finish()
    }
}

impl Default for VisibilityEngine {
    fn default() -> Self {
        Self::new(SightlineConfig::default())
    }
}

impl VisibilityEngine {
    pub fn new(config: SightlineConfig) -> Self {
        let parser = BatchResponseParser::from_config(&config.parsing);
        Self {
            config,
            matcher: None,
            parser,
        }
    }

    /// Load `sightline.toml` from `root` (plus env overrides) and build.
    pub fn from_project(root: &Path) -> Result<Self, EngineError> {
        let config = SightlineConfig::load(root)?;
        info!(root = %root.display(), "visibility engine configured");
        Ok(Self::new(config))
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn SemanticMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn config(&self) -> &SightlineConfig {
        &self.config
    }

    pub fn matcher(&self) -> Option<&dyn SemanticMatcher> {
        self.matcher.as_deref()
    }

    /// Split `total` queries across the table's categories.
    ///
    /// Weights are normalized first, so any non-negative weights work.
    pub fn allocate(&self, total: usize, categories: &CategoryTable) -> Result<OrderedTally, EngineError> {
        Ok(allocate_table(total, &categories.normalized())?)
    }

    /// Recover `expected_count` answers from a batched reply.
    pub fn split_batch(&self, blob: &str, expected_count: usize) -> BatchParse {
        self.parser.parse_with_outcome(blob, expected_count)
    }

    pub fn analyze_response(
        &self,
        response: &str,
        target: &str,
        competitors: &[String],
    ) -> MentionAnalysis {
        self.extractor().analyze(response, target, competitors)
    }

    pub fn score(
        &self,
        target: &str,
        queries: &[Query],
        responses: &ResponseTable,
        categories: &CategoryTable,
        competitors: &[String],
    ) -> VisibilityReport {
        ScoringAggregator::new(target)
            .with_extractor(self.extractor())
            .with_config(self.config.scoring.clone())
            .aggregate(queries, responses, categories, competitors)
    }

    fn extractor(&self) -> MentionExtractor<'_> {
        MentionExtractor::from_config(&self.config.extraction, self.matcher.as_deref())
    }
}
