//! Flattening per-category generated queries into one indexed query list.

use rustc_hash::{FxHashMap, FxHashSet};

use sightline_core::constants::UNKNOWN_CATEGORY;
use sightline_core::models::Query;

/// Remove duplicate queries while preserving order.
///
/// Comparison is case-insensitive on trimmed text; blank entries are dropped
/// and the kept entries are returned trimmed.
pub fn deduplicate_queries<S: AsRef<str>>(queries: &[S]) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut unique = Vec::new();
    for query in queries {
        let trimmed = query.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            unique.push(trimmed.to_string());
        }
    }
    unique
}

/// The ordered query list sent to every model.
///
/// Indices are assigned after de-duplication, so `queries()[i].index == i`
/// and response lists can be aligned to them directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    queries: Vec<Query>,
}

impl QueryPlan {
    /// Build a plan from `(category key, generated texts)` batches, in order.
    ///
    /// A text already planned under an earlier category is kept only there.
    pub fn from_category_batches<I, K, T>(batches: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<T>)>,
        K: Into<String>,
        T: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut queries = Vec::new();
        for (key, texts) in batches {
            let key: String = key.into();
            for text in deduplicate_queries(&texts) {
                if seen.insert(text.to_lowercase()) {
                    let index = queries.len();
                    queries.push(Query::new(text, key.clone(), index));
                }
            }
        }
        Self { queries }
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn into_queries(self) -> Vec<Query> {
        self.queries
    }

    pub fn texts(&self) -> Vec<&str> {
        self.queries.iter().map(|q| q.text.as_str()).collect()
    }

    /// Category key of the query at `index`, `"unknown"` if out of range.
    pub fn category_of(&self, index: usize) -> &str {
        self.queries
            .get(index)
            .map(Query::category_key)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Query index to category key for every planned query.
    pub fn category_index(&self) -> FxHashMap<usize, &str> {
        self.queries
            .iter()
            .map(|q| (q.index, q.category_key()))
            .collect()
    }

    /// Queries planned under `key`.
    pub fn for_category<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Query> + 'a {
        self.queries.iter().filter(move |q| q.category_key() == key)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
