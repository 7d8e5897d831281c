//! Subscriber setup is idempotent and events/spans can fire under it.

use sightline_core::config::ObservabilityConfig;
use sightline_core::tracing_setup::{self, events, spans};
use sightline_core::{batch_parse_span, scoring_span};

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig {
        log_level: Some("debug".to_string()),
    };
    tracing_setup::init_tracing_from_config(&config);
    tracing_setup::init_tracing();
    tracing_setup::init_tracing_with_filter("warn");
}

#[test]
fn events_and_spans_fire() {
    tracing_setup::init_tracing_with_filter("trace");

    let span = scoring_span!("Acme", 2usize, 2usize);
    let _guard = span.enter();
    events::allocation_computed(10, 3);
    events::batch_parsed("query_markers", 3, 3);
    events::parse_degraded(3, 1, "duplicate");
    events::semantic_match_unavailable("alias", "offline");
    events::report_built(50.0, 2, 4);

    let inner = batch_parse_span!(3usize);
    let _inner = inner.enter();
    assert_eq!(spans::names::SCORING, "sightline.scoring");
}
