use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_CATEGORY;

/// A single query sent to every model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    /// Key of the category this query was generated for.
    pub category: String,
    /// Position in the full ordered query list; responses are aligned to it.
    pub index: usize,
}

impl Query {
    pub fn new(text: impl Into<String>, category: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            index,
        }
    }

    /// Category key, or `"unknown"` when none was assigned.
    pub fn category_key(&self) -> &str {
        if self.category.trim().is_empty() {
            UNKNOWN_CATEGORY
        } else {
            &self.category
        }
    }
}
