//! Per-response analysis: is the target mentioned, at what rank, and next to
//! which competitors.

pub mod competitors;
pub mod mention;
pub mod rank;

use sightline_core::config::ExtractionConfig;
use sightline_core::config::defaults::DEFAULT_ORDINAL_WINDOW_CHARS;
use sightline_core::models::{Degradation, MentionAnalysis};
use sightline_core::traits::SemanticMatcher;

pub use rank::{RankContext, RankStrategy};

/// A mention analysis plus the details that do not belong in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    pub analysis: MentionAnalysis,
    /// Strategy that produced the rank, if any.
    pub rank_strategy: Option<RankStrategy>,
    pub degradation: Option<Degradation>,
}

/// Analyzes single responses for one target.
///
/// The semantic matcher is injected; without one, competitor detection is
/// exact-match only.
#[derive(Clone, Copy)]
pub struct MentionExtractor<'a> {
    matcher: Option<&'a dyn SemanticMatcher>,
    ordinal_window_chars: usize,
}

impl Default for MentionExtractor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MentionExtractor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MentionExtractor")
            .field("matcher", &self.matcher.map(|m| m.name()))
            .field("ordinal_window_chars", &self.ordinal_window_chars)
            .finish()
    }
}

impl<'a> MentionExtractor<'a> {
    pub fn new() -> Self {
        Self {
            matcher: None,
            ordinal_window_chars: DEFAULT_ORDINAL_WINDOW_CHARS,
        }
    }

    /// Build from config; the matcher is dropped when semantic matching is
    /// switched off.
    pub fn from_config(config: &ExtractionConfig, matcher: Option<&'a dyn SemanticMatcher>) -> Self {
        Self {
            matcher: matcher.filter(|_| config.effective_semantic_matching()),
            ordinal_window_chars: config.effective_ordinal_window_chars(),
        }
    }

    pub fn with_matcher(mut self, matcher: &'a dyn SemanticMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn with_ordinal_window(mut self, chars: usize) -> Self {
        self.ordinal_window_chars = chars;
        self
    }

    pub fn analyze(&self, response: &str, target: &str, competitors: &[String]) -> MentionAnalysis {
        self.analyze_detailed(response, target, competitors).analysis
    }

    pub fn analyze_detailed(
        &self,
        response: &str,
        target: &str,
        competitors: &[String],
    ) -> ExtractionOutcome {
        if response.trim().is_empty() {
            return ExtractionOutcome {
                analysis: MentionAnalysis::empty(),
                rank_strategy: None,
                degradation: None,
            };
        }

        let response_lower = response.to_lowercase();
        let target_lower = target.trim().to_lowercase();

        let mentioned = mention::is_mentioned(&response_lower, target);

        let ranked = if mentioned {
            let competitors_lower: Vec<String> = competitors
                .iter()
                .map(|c| c.trim().to_lowercase())
                .collect();
            rank::infer_rank(&RankContext {
                response_lower: &response_lower,
                target_lower: &target_lower,
                competitors_lower: &competitors_lower,
                ordinal_window_chars: self.ordinal_window_chars,
            })
        } else {
            None
        };

        let scan = competitors::scan(response, &response_lower, competitors, self.matcher);

        ExtractionOutcome {
            analysis: MentionAnalysis {
                mentioned,
                rank: ranked.map(|(rank, _)| rank),
                competitors: scan.found,
            },
            rank_strategy: ranked.map(|(_, strategy)| strategy),
            degradation: scan.degradation,
        }
    }
}

/// One-shot analysis of a single response.
pub fn analyze(
    response: &str,
    target: &str,
    competitors: &[String],
    matcher: Option<&dyn SemanticMatcher>,
) -> MentionAnalysis {
    let extractor = MentionExtractor {
        matcher,
        ordinal_window_chars: DEFAULT_ORDINAL_WINDOW_CHARS,
    };
    extractor.analyze(response, target, competitors)
}
