//! Structured log events for key engine operations.

/// Log a completed budget allocation.
pub fn allocation_computed(total: usize, categories: usize) {
    tracing::debug!(
        event = "allocation_computed",
        total = total,
        categories = categories,
        "query budget allocated"
    );
}

/// Log which strategy split a batched response.
pub fn batch_parsed(strategy: &str, expected: usize, recovered: usize) {
    tracing::debug!(
        event = "batch_parsed",
        strategy = %strategy,
        expected = expected,
        recovered = recovered,
        "batch response split"
    );
}

/// Log a batch parse that fell through to the fallback.
pub fn parse_degraded(expected: usize, recovered: usize, fallback: &str) {
    tracing::warn!(
        event = "parse_degraded",
        expected = expected,
        recovered = recovered,
        fallback = %fallback,
        "batch parsing degraded"
    );
}

/// Log a semantic matcher that was unavailable or failed.
pub fn semantic_match_unavailable(matcher: &str, reason: &str) {
    tracing::debug!(
        event = "semantic_match_unavailable",
        matcher = %matcher,
        reason = %reason,
        "semantic matching skipped, using exact matches only"
    );
}

/// Log a finished visibility report.
pub fn report_built(visibility_score: f64, total_mentions: usize, total_responses: usize) {
    tracing::info!(
        event = "report_built",
        visibility_score = visibility_score,
        total_mentions = total_mentions,
        total_responses = total_responses,
        "visibility report built"
    );
}
