//! Typed value objects passed between pipeline stages.

pub mod category;
pub mod degradation;
pub mod mention;
pub mod query;
pub mod report;
pub mod response_table;
pub mod stats;

pub use category::{Category, CategoryTable};
pub use degradation::Degradation;
pub use mention::MentionAnalysis;
pub use query::Query;
pub use report::{
    CategoryBreakdown, CategoryCompetitorRanking, CategoryRankingEntry, CompetitorRanking,
    CompetitorRankings, ModelBreakdown, ModelResult, QueryLogEntry, ReportDiagnostics,
    VisibilityReport,
};
pub use response_table::{ModelResponses, ResponseTable};
pub use stats::{CategoryStats, CompetitorStats, ModelTally, OrderedTally, TallyEntry};
