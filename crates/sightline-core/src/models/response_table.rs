use serde::{Deserialize, Serialize};

/// All responses from one model, index-aligned with the query list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResponses {
    pub model: String,
    pub responses: Vec<String>,
}

/// Model id → ordered responses. Models keep their insertion order, which is
/// the order they appear in reports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseTable {
    entries: Vec<ModelResponses>,
}

impl ResponseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the responses for `model`, replacing any existing list in place.
    pub fn insert(&mut self, model: impl Into<String>, responses: Vec<String>) {
        let model = model.into();
        match self.entries.iter_mut().find(|e| e.model == model) {
            Some(existing) => existing.responses = responses,
            None => self.entries.push(ModelResponses { model, responses }),
        }
    }

    /// Append one response to `model`'s list.
    pub fn push_response(&mut self, model: &str, response: impl Into<String>) {
        match self.entries.iter_mut().find(|e| e.model == model) {
            Some(existing) => existing.responses.push(response.into()),
            None => self.entries.push(ModelResponses {
                model: model.to_string(),
                responses: vec![response.into()],
            }),
        }
    }

    pub fn get(&self, model: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.model == model)
            .map(|e| e.responses.as_slice())
    }

    /// Response of `model` at query `index`, if the model answered it.
    pub fn response(&self, model: &str, index: usize) -> Option<&str> {
        self.get(model)
            .and_then(|r| r.get(index))
            .map(String::as_str)
    }

    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.model.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelResponses> {
        self.entries.iter()
    }

    pub fn num_models(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M: Into<String>> FromIterator<(M, Vec<String>)> for ResponseTable {
    fn from_iter<I: IntoIterator<Item = (M, Vec<String>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (model, responses) in iter {
            table.insert(model, responses);
        }
        table
    }
}
