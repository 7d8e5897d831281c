pub mod semantic_matcher;

pub use semantic_matcher::SemanticMatcher;
