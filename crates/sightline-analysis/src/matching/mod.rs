//! Built-in [`SemanticMatcher`](sightline_core::SemanticMatcher) implementations.

pub mod alias;

pub use alias::{AliasFile, AliasMatcher, AliasMatcherBuilder};
