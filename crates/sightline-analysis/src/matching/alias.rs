//! Alias-table semantic matcher backed by an Aho-Corasick automaton.
//!
//! Each alias maps to one canonical competitor name. A response "refers to"
//! a competitor when any of its aliases occurs on word boundaries.
//!
//! ```toml
//! [aliases]
//! "Globex" = ["Globex Corporation", "GBX"]
//! "Initech" = ["Initrode"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

use sightline_core::errors::MatchError;
use sightline_core::traits::SemanticMatcher;

/// On-disk alias table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AliasFile {
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
}

/// Collects `(canonical, alias)` pairs before compiling the automaton.
#[derive(Debug, Clone, Default)]
pub struct AliasMatcherBuilder {
    entries: Vec<(String, String)>,
}

impl AliasMatcherBuilder {
    pub fn alias(mut self, canonical: impl Into<String>, alias: impl Into<String>) -> Self {
        self.entries.push((canonical.into(), alias.into()));
        self
    }

    pub fn aliases<I, S>(mut self, canonical: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let canonical = canonical.into();
        for alias in aliases {
            self.entries.push((canonical.clone(), alias.into()));
        }
        self
    }

    /// Compile the automaton. Blank aliases and canonical names are skipped.
    pub fn build(self) -> Result<AliasMatcher, MatchError> {
        let mut patterns: Vec<String> = Vec::with_capacity(self.entries.len());
        let mut canonical: Vec<String> = Vec::with_capacity(self.entries.len());
        for (name, alias) in self.entries {
            let name = name.trim();
            let alias = alias.trim().to_lowercase();
            if name.is_empty() || alias.is_empty() {
                continue;
            }
            patterns.push(alias);
            canonical.push(name.to_string());
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| MatchError::Failed {
                reason: format!("alias automaton: {e}"),
            })?;

        tracing::debug!(aliases = patterns.len(), "alias matcher built");

        Ok(AliasMatcher {
            automaton,
            canonical,
        })
    }
}

/// Matches competitors by their known aliases.
#[derive(Debug, Clone)]
pub struct AliasMatcher {
    automaton: AhoCorasick,
    /// Canonical name per automaton pattern index.
    canonical: Vec<String>,
}

impl AliasMatcher {
    pub fn builder() -> AliasMatcherBuilder {
        AliasMatcherBuilder::default()
    }

    /// Load an alias table from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, MatchError> {
        let file: AliasFile = toml::from_str(toml_str).map_err(|e| MatchError::Failed {
            reason: format!("alias table parse error: {e}"),
        })?;
        file.aliases
            .into_iter()
            .fold(Self::builder(), |builder, (name, aliases)| {
                builder.aliases(name, aliases)
            })
            .build()
    }

    /// Load an alias table from a file path.
    pub fn from_file(path: &Path) -> Result<Self, MatchError> {
        let content = std::fs::read_to_string(path).map_err(|e| MatchError::Unavailable {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    /// Number of compiled aliases.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Canonical names whose aliases occur in `text`, in order of first
    /// appearance.
    pub fn referenced(&self, text: &str) -> Vec<&str> {
        if self.canonical.is_empty() {
            return Vec::new();
        }
        let lower = text.to_lowercase();
        let mut found: Vec<&str> = Vec::new();
        for m in self.automaton.find_iter(&lower) {
            if !on_word_boundaries(&lower, m.start(), m.end()) {
                continue;
            }
            let Some(name) = self.canonical.get(m.pattern().as_usize()) else {
                continue;
            };
            if !found.contains(&name.as_str()) {
                found.push(name);
            }
        }
        found
    }
}

impl SemanticMatcher for AliasMatcher {
    fn find_matches(&self, text: &str, candidates: &[String]) -> Result<Vec<String>, MatchError> {
        let mut matches = Vec::new();
        for name in self.referenced(text) {
            let candidate = candidates
                .iter()
                .find(|c| c.trim().eq_ignore_ascii_case(name));
            if let Some(candidate) = candidate {
                if !matches.contains(candidate) {
                    matches.push(candidate.clone());
                }
            }
        }
        Ok(matches)
    }

    fn name(&self) -> &str {
        "alias"
    }
}

fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
