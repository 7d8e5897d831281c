use serde::{Deserialize, Serialize};

/// A heuristic stage fell back to a lower-quality result instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degradation {
    /// Batch parsing found too few segments and used the fallback.
    ParseDegraded { expected: usize, recovered: usize },
    /// The semantic matcher was missing or failed; exact matching only.
    SemanticMatchUnavailable { matcher: String, reason: String },
}

impl Degradation {
    pub fn component(&self) -> &'static str {
        match self {
            Self::ParseDegraded { .. } => "batch_parser",
            Self::SemanticMatchUnavailable { .. } => "semantic_matcher",
        }
    }
}
