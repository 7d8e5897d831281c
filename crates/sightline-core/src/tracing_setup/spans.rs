//! Span definitions per operation.

/// Create a scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($target:expr, $queries:expr, $models:expr) => {
        tracing::info_span!(
            "sightline.scoring",
            target = %$target,
            queries = $queries,
            models = $models
        )
    };
}

/// Create a batch parsing span.
#[macro_export]
macro_rules! batch_parse_span {
    ($expected:expr) => {
        tracing::debug_span!("sightline.batch_parse", expected = $expected)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "sightline.scoring";
    pub const BATCH_PARSE: &str = "sightline.batch_parse";
}
