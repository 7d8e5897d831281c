//! # sightline-analysis
//!
//! The visibility scoring pipeline:
//! budget allocation → batch response splitting → per-response mention/rank
//! extraction → aggregation into a [`VisibilityReport`].
//!
//! [`VisibilityReport`]: sightline_core::VisibilityReport

pub mod allocation;
pub mod batch;
pub mod engine;
pub mod extraction;
pub mod matching;
pub mod scoring;

pub use allocation::{allocate, allocate_table, deduplicate_queries, QueryPlan};
pub use batch::{parse_batch, BatchParse, BatchResponseParser, SplitStrategy};
pub use engine::VisibilityEngine;
pub use extraction::{analyze, ExtractionOutcome, MentionExtractor, RankStrategy};
pub use matching::{AliasMatcher, AliasMatcherBuilder};
pub use scoring::ScoringAggregator;
