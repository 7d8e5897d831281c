//! Recovering per-query answers from a provider reply that batched several.
//!
//! Strategies run in [`SplitStrategy::CASCADE`] order; the first one producing
//! at least `expected_count` segments wins and is truncated to exactly that
//! many. When none does, every slot is filled by the configured fallback, so
//! the output length always equals `expected_count`.

pub mod strategies;

use serde::{Deserialize, Serialize};

use sightline_core::batch_parse_span;
use sightline_core::config::{FallbackMode, ParsingConfig};
use sightline_core::models::Degradation;
use sightline_core::tracing_setup::events;

pub use strategies::SplitStrategy;

/// Parser output with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParse {
    pub answers: Vec<String>,
    pub strategy: SplitStrategy,
    /// True when the answers are fallback content rather than real segments.
    pub degraded: bool,
    /// Segments the winning strategy found, or the most any strategy found
    /// when degraded.
    pub recovered: usize,
}

impl BatchParse {
    /// The degradation event for a fallback parse.
    pub fn degradation(&self) -> Option<Degradation> {
        self.degraded.then(|| Degradation::ParseDegraded {
            expected: self.answers.len(),
            recovered: self.recovered,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchResponseParser {
    fallback: FallbackMode,
}

impl BatchResponseParser {
    pub fn new(fallback: FallbackMode) -> Self {
        Self { fallback }
    }

    pub fn from_config(config: &ParsingConfig) -> Self {
        Self::new(config.effective_fallback())
    }

    /// Split `blob` into exactly `expected_count` answers. Never fails.
    pub fn parse(&self, blob: &str, expected_count: usize) -> Vec<String> {
        self.parse_with_outcome(blob, expected_count).answers
    }

    /// Like [`parse`](Self::parse), also reporting which strategy won.
    pub fn parse_with_outcome(&self, blob: &str, expected_count: usize) -> BatchParse {
        let span = batch_parse_span!(expected_count);
        let _guard = span.enter();

        if expected_count == 0 {
            return BatchParse {
                answers: Vec::new(),
                strategy: SplitStrategy::Fallback,
                degraded: false,
                recovered: 0,
            };
        }

        let mut best = 0usize;
        for strategy in SplitStrategy::CASCADE {
            let mut segments = strategy.split(blob);
            let recovered = segments.len();
            if recovered >= expected_count {
                events::batch_parsed(strategy.name(), expected_count, recovered);
                segments.truncate(expected_count);
                return BatchParse {
                    answers: segments,
                    strategy,
                    degraded: false,
                    recovered,
                };
            }
            best = best.max(recovered);
        }

        let (fill, fallback_name) = match self.fallback {
            FallbackMode::Duplicate => (blob.to_string(), "duplicate"),
            FallbackMode::Empty => (String::new(), "empty"),
        };
        events::parse_degraded(expected_count, best, fallback_name);

        BatchParse {
            answers: vec![fill; expected_count],
            strategy: SplitStrategy::Fallback,
            degraded: true,
            recovered: best,
        }
    }
}

/// Split with the default (duplicating) fallback.
pub fn parse_batch(blob: &str, expected_count: usize) -> Vec<String> {
    BatchResponseParser::default().parse(blob, expected_count)
}
