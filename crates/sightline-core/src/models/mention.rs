use serde::{Deserialize, Serialize};

/// Result of analyzing one response for one target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MentionAnalysis {
    pub mentioned: bool,
    /// 1-based position of the target, when one could be inferred.
    pub rank: Option<u32>,
    /// Competitors found, exact matches first, each listed once.
    pub competitors: Vec<String>,
}

impl MentionAnalysis {
    /// The analysis of an empty response.
    pub fn empty() -> Self {
        Self::default()
    }
}
