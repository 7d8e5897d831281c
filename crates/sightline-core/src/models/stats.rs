//! Running counters accumulated by the scoring aggregator.

use serde::{Deserialize, Serialize};

/// One keyed count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub key: String,
    pub count: usize,
}

/// Counter keyed by string that remembers first-seen order.
///
/// Key sets here are small (models, categories), so lookups are linear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedTally {
    entries: Vec<TallyEntry>,
}

impl OrderedTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, amount: usize) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.count += amount,
            None => self.entries.push(TallyEntry {
                key: key.to_string(),
                count: amount,
            }),
        }
    }

    /// Count for `key`, zero when never seen.
    pub fn get(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mentions out of responses for one model inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelTally {
    pub model: String,
    pub mentions: usize,
    pub total: usize,
}

/// Per-category counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total_queries: usize,
    pub total_responses: usize,
    pub mentions: usize,
    pub by_model: Vec<ModelTally>,
}

impl CategoryStats {
    /// Count one analyzed response from `model`.
    pub fn record_response(&mut self, model: &str, mentioned: bool) {
        self.total_responses += 1;
        if mentioned {
            self.mentions += 1;
        }

        let tally = match self.by_model.iter().position(|t| t.model == model) {
            Some(i) => &mut self.by_model[i],
            None => {
                self.by_model.push(ModelTally {
                    model: model.to_string(),
                    ..Default::default()
                });
                let last = self.by_model.len() - 1;
                &mut self.by_model[last]
            }
        };
        tally.total += 1;
        if mentioned {
            tally.mentions += 1;
        }
    }
}

/// Per-competitor counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompetitorStats {
    pub total_mentions: usize,
    pub mentions_by_category: OrderedTally,
    pub mentions_by_model: OrderedTally,
}

impl CompetitorStats {
    pub fn record_mention(&mut self, category: &str, model: &str) {
        self.total_mentions += 1;
        self.mentions_by_category.increment(category);
        self.mentions_by_model.increment(model);
    }
}
