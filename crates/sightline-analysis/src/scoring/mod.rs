//! Report construction: aggregation, rankings and number formatting.

pub mod aggregator;
pub mod format;
pub mod rankings;

pub use aggregator::ScoringAggregator;
