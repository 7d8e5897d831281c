//! The terminal output of a scoring run.

use serde::{Deserialize, Serialize};

use super::stats::{ModelTally, OrderedTally};

/// Visibility report for one target across all queries and models.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisibilityReport {
    /// Percentage of (query, model) pairs mentioning the target. 2 dp.
    pub visibility_score: f64,
    pub total_queries: usize,
    pub total_responses: usize,
    pub total_mentions: usize,
    /// Mentions over analyzed responses. 4 dp.
    pub mention_rate: f64,
    pub by_model: Vec<ModelBreakdown>,
    pub by_category: Vec<CategoryBreakdown>,
    pub competitor_rankings: CompetitorRankings,
    /// Empty when the query log is disabled.
    pub query_log: Vec<QueryLogEntry>,
    pub sample_mentions: Vec<String>,
    pub diagnostics: ReportDiagnostics,
}

impl VisibilityReport {
    pub fn model(&self, model: &str) -> Option<&ModelBreakdown> {
        self.by_model.iter().find(|m| m.model == model)
    }

    pub fn category(&self, key: &str) -> Option<&CategoryBreakdown> {
        self.by_category.iter().find(|c| c.key == key)
    }

    /// Pretty-printed JSON for hosts that hand the report to a frontend.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelBreakdown {
    pub model: String,
    pub mentions: usize,
    pub total_responses: usize,
    /// 4 dp.
    pub mention_rate: f64,
    pub competitor_mentions: OrderedTally,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub key: String,
    pub name: String,
    pub total_queries: usize,
    pub total_responses: usize,
    pub mentions: usize,
    /// Percentage. 2 dp.
    pub visibility: f64,
    /// 4 dp.
    pub mention_rate: f64,
    pub by_model: Vec<ModelTally>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompetitorRankings {
    pub overall: Vec<CompetitorRanking>,
    pub by_category: Vec<CategoryCompetitorRanking>,
}

impl CompetitorRankings {
    pub fn for_category(&self, key: &str) -> Option<&[CategoryRankingEntry]> {
        self.by_category
            .iter()
            .find(|c| c.category == key)
            .map(|c| c.entries.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompetitorRanking {
    pub name: String,
    pub total_mentions: usize,
    /// Mentions over `num_queries * num_models`. 4 dp.
    pub mention_rate: f64,
    /// `mention_rate` as a percentage. 2 dp.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryCompetitorRanking {
    pub category: String,
    pub entries: Vec<CategoryRankingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryRankingEntry {
    pub name: String,
    pub mentions: usize,
}

/// Everything observed for one query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query: String,
    pub category: String,
    pub results: Vec<ModelResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelResult {
    pub model: String,
    pub mentioned: bool,
    pub rank: Option<u32>,
    pub competitors_mentioned: Vec<String>,
    pub response_preview: String,
}

/// Counts of local fallbacks taken while building the report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportDiagnostics {
    /// Responses whose competitor detection fell back to exact matching.
    pub semantic_fallbacks: usize,
    /// (query, model) pairs with no response at that index.
    pub missing_responses: usize,
}
