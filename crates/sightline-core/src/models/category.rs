use serde::{Deserialize, Serialize};

/// A weighted bucket grouping queries by shared search intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: String,
    /// Share of the query budget, in `[0, 1]` once the table is normalized.
    pub weight: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Category {
    pub fn new(key: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            weight,
            description: String::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered set of categories with unique keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category. A category with the same key is replaced in place.
    pub fn insert(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.key == category.key) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Display name for `key`, falling back to the key itself.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map(|c| c.name.as_str()).unwrap_or(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// `(key, weight)` pairs in insertion order.
    pub fn weights(&self) -> Vec<(String, f64)> {
        self.categories
            .iter()
            .map(|c| (c.key.clone(), c.weight))
            .collect()
    }

    pub fn total_weight(&self) -> f64 {
        self.categories.iter().map(|c| c.weight).sum()
    }

    /// A copy with weights rescaled to sum to 1.0.
    ///
    /// A table whose weights sum to zero (or less) is returned unchanged.
    pub fn normalized(&self) -> Self {
        let total = self.total_weight();
        if total <= 0.0 || !total.is_finite() {
            return self.clone();
        }
        let categories = self
            .categories
            .iter()
            .map(|c| Category {
                weight: c.weight / total,
                ..c.clone()
            })
            .collect();
        Self { categories }
    }
}

impl FromIterator<Category> for CategoryTable {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut table = Self::new();
        for category in iter {
            table.insert(category);
        }
        table
    }
}
