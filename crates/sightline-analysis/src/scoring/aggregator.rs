//! Folds per-response analyses into a [`VisibilityReport`].

use rustc_hash::FxHashMap;

use sightline_core::config::ScoringConfig;
use sightline_core::models::{
    CategoryBreakdown, CategoryStats, CategoryTable, CompetitorStats, Degradation,
    MentionAnalysis, ModelBreakdown, ModelResult, Query, QueryLogEntry, ReportDiagnostics,
    ResponseTable, VisibilityReport,
};
use sightline_core::scoring_span;
use sightline_core::traits::SemanticMatcher;
use sightline_core::tracing_setup::events;

use super::format::{capitalize, percentage, rate, truncate_with_ellipsis};
use super::rankings::build_rankings;
use crate::extraction::MentionExtractor;

/// Scores one target across every (query, model) response.
///
/// Holds no per-run state, so one aggregator can score many runs.
#[derive(Debug, Clone)]
pub struct ScoringAggregator<'a> {
    target: String,
    extractor: MentionExtractor<'a>,
    config: ScoringConfig,
}

/// Insertion-ordered buckets with a key index.
struct Buckets<T> {
    entries: Vec<(String, T)>,
    index: FxHashMap<String, usize>,
}

impl<T: Default> Buckets<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    fn entry(&mut self, key: &str) -> &mut T {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.entries.push((key.to_string(), T::default()));
                self.index.insert(key.to_string(), i);
                i
            }
        };
        &mut self.entries[i].1
    }
}

impl<'a> ScoringAggregator<'a> {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            extractor: MentionExtractor::new(),
            config: ScoringConfig::default(),
        }
    }

    pub fn with_matcher(mut self, matcher: &'a dyn SemanticMatcher) -> Self {
        self.extractor = self.extractor.with_matcher(matcher);
        self
    }

    pub fn with_extractor(mut self, extractor: MentionExtractor<'a>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Build the report.
    ///
    /// Responses are aligned by `Query::index`; a model whose list is too
    /// short for an index is skipped for that query and counted in
    /// `diagnostics.missing_responses`. Visibility still divides by
    /// `queries.len() * num_models`.
    pub fn aggregate(
        &self,
        queries: &[Query],
        responses: &ResponseTable,
        categories: &CategoryTable,
        competitors: &[String],
    ) -> VisibilityReport {
        let span = scoring_span!(self.target, queries.len(), responses.num_models());
        let _guard = span.enter();

        let sample_cap = self.config.effective_sample_mention_cap();
        let response_preview = self.config.effective_response_preview_chars();
        let include_log = self.config.effective_include_query_log();

        let mut by_model: Vec<ModelBreakdown> = responses
            .models()
            .map(|model| ModelBreakdown {
                model: model.to_string(),
                ..Default::default()
            })
            .collect();
        let mut category_stats: Buckets<CategoryStats> = Buckets::new();
        let mut competitor_stats: Buckets<CompetitorStats> = Buckets::new();
        let mut query_log = Vec::new();
        let mut sample_mentions = Vec::new();
        let mut diagnostics = ReportDiagnostics::default();
        let mut total_responses = 0usize;
        let mut total_mentions = 0usize;

        for query in queries {
            let category = query.category_key();
            category_stats.entry(category).total_queries += 1;

            let mut results = Vec::new();
            for (model_responses, breakdown) in responses.iter().zip(by_model.iter_mut()) {
                let model = model_responses.model.as_str();
                let Some(response) = model_responses.responses.get(query.index) else {
                    diagnostics.missing_responses += 1;
                    continue;
                };

                let outcome = self
                    .extractor
                    .analyze_detailed(response, &self.target, competitors);
                if matches!(
                    outcome.degradation,
                    Some(Degradation::SemanticMatchUnavailable { .. })
                ) {
                    diagnostics.semantic_fallbacks += 1;
                }
                let analysis = outcome.analysis;

                total_responses += 1;
                breakdown.total_responses += 1;
                category_stats
                    .entry(category)
                    .record_response(model, analysis.mentioned);

                if analysis.mentioned {
                    total_mentions += 1;
                    breakdown.mentions += 1;
                    if sample_mentions.len() < sample_cap {
                        sample_mentions.push(self.sample_line(&query.text, model, &analysis));
                    }
                }

                for competitor in &analysis.competitors {
                    competitor_stats
                        .entry(competitor)
                        .record_mention(category, model);
                    breakdown.competitor_mentions.increment(competitor);
                }

                if include_log {
                    results.push(ModelResult {
                        model: model.to_string(),
                        mentioned: analysis.mentioned,
                        rank: analysis.rank,
                        competitors_mentioned: analysis.competitors,
                        response_preview: truncate_with_ellipsis(response, response_preview),
                    });
                }
            }

            if include_log {
                query_log.push(QueryLogEntry {
                    query: query.text.clone(),
                    category: category.to_string(),
                    results,
                });
            }
        }

        for breakdown in &mut by_model {
            breakdown.mention_rate = rate(breakdown.mentions, breakdown.total_responses);
        }

        let by_category: Vec<CategoryBreakdown> = category_stats
            .entries
            .iter()
            .map(|(key, stats)| CategoryBreakdown {
                key: key.clone(),
                name: categories.display_name(key).to_string(),
                total_queries: stats.total_queries,
                total_responses: stats.total_responses,
                mentions: stats.mentions,
                visibility: percentage(stats.mentions, stats.total_responses),
                mention_rate: rate(stats.mentions, stats.total_responses),
                by_model: stats.by_model.clone(),
            })
            .collect();

        let possible = queries.len() * responses.num_models();
        let competitor_rankings = build_rankings(
            &competitor_stats.entries,
            possible,
            category_stats.entries.iter().map(|(key, _)| key.as_str()),
        );

        let report = VisibilityReport {
            visibility_score: percentage(total_mentions, possible),
            total_queries: queries.len(),
            total_responses,
            total_mentions,
            mention_rate: rate(total_mentions, total_responses),
            by_model,
            by_category,
            competitor_rankings,
            query_log,
            sample_mentions,
            diagnostics,
        };

        events::report_built(report.visibility_score, total_mentions, total_responses);
        report
    }

    /// `Query: '<query>' -> <Model> mentioned <target>[ at rank N][ (with A, B)]`
    fn sample_line(&self, query: &str, model: &str, analysis: &MentionAnalysis) -> String {
        let query_text = truncate_with_ellipsis(query, self.config.effective_query_preview_chars());
        let rank_info = analysis
            .rank
            .map(|rank| format!(" at rank {rank}"))
            .unwrap_or_default();
        let shown: Vec<&str> = analysis
            .competitors
            .iter()
            .take(self.config.effective_sample_competitor_count())
            .map(String::as_str)
            .collect();
        let comp_info = if shown.is_empty() {
            String::new()
        } else {
            format!(" (with {})", shown.join(", "))
        };
        format!(
            "Query: '{query_text}' -> {} mentioned {}{rank_info}{comp_info}",
            capitalize(model),
            self.target
        )
    }
}
