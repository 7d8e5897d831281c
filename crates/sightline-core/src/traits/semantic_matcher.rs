use crate::errors::MatchError;

/// Finds candidate names that a text plausibly refers to by meaning, not
/// necessarily verbatim.
///
/// Implementations back onto whatever similarity store the host service runs
/// (embeddings, alias tables). The extractor treats every error as "no
/// semantic matches" and keeps going with exact matching.
pub trait SemanticMatcher: Send + Sync {
    /// Return the subset of `candidates` referenced by `text`.
    ///
    /// Names outside `candidates` are ignored by callers.
    fn find_matches(&self, text: &str, candidates: &[String]) -> Result<Vec<String>, MatchError>;

    /// Human-readable matcher name, used in logs.
    fn name(&self) -> &str;

    /// Whether this matcher is currently able to serve requests.
    fn is_available(&self) -> bool {
        true
    }
}
