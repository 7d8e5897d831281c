//! End-to-end report aggregation.

use sightline_analysis::scoring::ScoringAggregator;
use sightline_core::config::ScoringConfig;
use sightline_core::errors::MatchError;
use sightline_core::models::{Category, CategoryTable, Query, ResponseTable};
use sightline_core::traits::SemanticMatcher;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn responses(rows: &[(&str, &[&str])]) -> ResponseTable {
    rows.iter()
        .map(|(model, answers)| (model.to_string(), names(answers)))
        .collect()
}

fn categories() -> CategoryTable {
    [
        Category::new("comparison", "Comparison", 0.6),
        Category::new("pricing", "Pricing", 0.4),
    ]
    .into_iter()
    .collect()
}

fn two_queries() -> Vec<Query> {
    vec![
        Query::new("best crm", "comparison", 0),
        Query::new("cheap crm", "pricing", 1),
    ]
}

#[test]
fn two_queries_two_models() {
    let table = responses(&[
        ("gpt", &["Acme is great", "Try Globex"]),
        ("claude", &["Globex and Acme", "nothing useful"]),
    ]);
    let report = ScoringAggregator::new("Acme").aggregate(
        &two_queries(),
        &table,
        &categories(),
        &names(&["Globex"]),
    );

    assert_eq!(report.total_queries, 2);
    assert_eq!(report.total_responses, 4);
    assert_eq!(report.total_mentions, 2);
    assert_eq!(report.visibility_score, 50.0);
    assert_eq!(report.mention_rate, 0.5);

    let comparison = report.category("comparison").unwrap();
    assert_eq!(comparison.name, "Comparison");
    assert_eq!(comparison.total_queries, 1);
    assert_eq!(comparison.visibility, 100.0);
    assert_eq!(comparison.mention_rate, 1.0);
    assert_eq!(report.category("pricing").unwrap().visibility, 0.0);

    let gpt = report.model("gpt").unwrap();
    assert_eq!(gpt.mentions, 1);
    assert_eq!(gpt.total_responses, 2);
    assert_eq!(gpt.mention_rate, 0.5);
    assert_eq!(gpt.competitor_mentions.get("Globex"), 1);

    let overall = &report.competitor_rankings.overall;
    assert_eq!(overall.len(), 1);
    assert_eq!(overall[0].name, "Globex");
    assert_eq!(overall[0].total_mentions, 2);
    assert_eq!(overall[0].mention_rate, 0.5);
    assert_eq!(overall[0].percentage, 50.0);
    assert_eq!(
        report.competitor_rankings.for_category("pricing").unwrap()[0].mentions,
        1
    );

    assert_eq!(
        report.sample_mentions,
        vec![
            "Query: 'best crm' -> Gpt mentioned Acme".to_string(),
            "Query: 'best crm' -> Claude mentioned Acme at rank 2 (with Globex)".to_string(),
        ]
    );

    assert_eq!(report.query_log.len(), 2);
    assert_eq!(report.query_log[0].results[1].model, "claude");
    assert_eq!(report.query_log[0].results[1].rank, Some(2));
    assert_eq!(report.diagnostics.missing_responses, 0);
}

#[test]
fn zero_queries_or_models_score_zero() {
    let aggregator = ScoringAggregator::new("Acme");

    let report = aggregator.aggregate(&[], &responses(&[("gpt", &[])]), &categories(), &[]);
    assert_eq!(report.visibility_score, 0.0);
    assert_eq!(report.mention_rate, 0.0);

    let report = aggregator.aggregate(&two_queries(), &ResponseTable::new(), &categories(), &[]);
    assert_eq!(report.visibility_score, 0.0);
    assert_eq!(report.total_responses, 0);
    assert_eq!(report.category("comparison").unwrap().visibility, 0.0);
}

#[test]
fn short_response_lists_are_skipped_but_counted() {
    let table = responses(&[("gpt", &["Acme", "Acme"]), ("claude", &["Acme"])]);
    let report = ScoringAggregator::new("Acme").aggregate(&two_queries(), &table, &categories(), &[]);
    assert_eq!(report.total_responses, 3);
    assert_eq!(report.total_mentions, 3);
    assert_eq!(report.visibility_score, 75.0);
    assert_eq!(report.diagnostics.missing_responses, 1);
    assert_eq!(report.query_log[1].results.len(), 1);
}

#[test]
fn sample_mentions_are_capped_and_truncated() {
    let long_query = "which customer relationship management platform is best for a small team";
    let queries: Vec<Query> = (0..7).map(|i| Query::new(long_query, "comparison", i)).collect();
    let table = responses(&[("gpt", &["Acme"; 7])]);

    let report = ScoringAggregator::new("Acme").aggregate(&queries, &table, &categories(), &[]);
    assert_eq!(report.sample_mentions.len(), 5);
    let expected_query: String = long_query.chars().take(50).collect();
    assert!(report.sample_mentions[0].starts_with(&format!("Query: '{expected_query}...'")));

    let capped = ScoringAggregator::new("Acme")
        .with_config(ScoringConfig {
            sample_mention_cap: Some(2),
            ..Default::default()
        })
        .aggregate(&queries, &table, &categories(), &[]);
    assert_eq!(capped.sample_mentions.len(), 2);
}

#[test]
fn sample_lists_at_most_two_competitors() {
    let queries = vec![Query::new("q", "comparison", 0)];
    let table = responses(&[("gpt", &["Acme, Globex, Initech and Hooli"])]);
    let report = ScoringAggregator::new("Acme").aggregate(
        &queries,
        &table,
        &categories(),
        &names(&["Globex", "Initech", "Hooli"]),
    );
    assert_eq!(
        report.sample_mentions[0],
        "Query: 'q' -> Gpt mentioned Acme at rank 1 (with Globex, Initech)"
    );
}

#[test]
fn response_preview_is_truncated() {
    let long_response = "Acme ".repeat(60);
    let queries = vec![Query::new("q", "comparison", 0)];
    let table: ResponseTable = vec![("gpt", vec![long_response.clone()])].into_iter().collect();
    let report = ScoringAggregator::new("Acme").aggregate(&queries, &table, &categories(), &[]);
    let preview = &report.query_log[0].results[0].response_preview;
    assert_eq!(preview.chars().count(), 203);
    assert!(preview.ends_with("..."));
}

#[test]
fn query_log_can_be_disabled() {
    let table = responses(&[("gpt", &["Acme", "none"])]);
    let report = ScoringAggregator::new("Acme")
        .with_config(ScoringConfig {
            include_query_log: Some(false),
            ..Default::default()
        })
        .aggregate(&two_queries(), &table, &categories(), &[]);
    assert!(report.query_log.is_empty());
    assert_eq!(report.total_mentions, 1);
}

#[test]
fn uncategorized_queries_bucket_as_unknown() {
    let queries = vec![Query::new("q", "", 0)];
    let table = responses(&[("gpt", &["Acme"])]);
    let report = ScoringAggregator::new("Acme").aggregate(&queries, &table, &categories(), &[]);
    let unknown = report.category("unknown").unwrap();
    assert_eq!(unknown.name, "unknown");
    assert_eq!(unknown.mentions, 1);
    assert_eq!(report.query_log[0].category, "unknown");
}

#[test]
fn competitor_ties_keep_first_seen_order() {
    let queries = vec![
        Query::new("q0", "comparison", 0),
        Query::new("q1", "pricing", 1),
    ];
    let table = responses(&[("gpt", &["Initech only", "Globex only"])]);
    let report = ScoringAggregator::new("Acme").aggregate(
        &queries,
        &table,
        &categories(),
        &names(&["Globex", "Initech"]),
    );
    let order: Vec<&str> = report
        .competitor_rankings
        .overall
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(order, vec!["Initech", "Globex"]);
    assert!(report.competitor_rankings.for_category("comparison").unwrap()[0].name == "Initech");
}

struct OfflineMatcher;

impl SemanticMatcher for OfflineMatcher {
    fn find_matches(&self, _text: &str, _candidates: &[String]) -> Result<Vec<String>, MatchError> {
        Err(MatchError::Unavailable {
            reason: "no index".into(),
        })
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[test]
fn matcher_failures_are_counted() {
    let matcher = OfflineMatcher;
    let table = responses(&[("gpt", &["Acme and Globex", "Globex"])]);
    let report = ScoringAggregator::new("Acme")
        .with_matcher(&matcher)
        .aggregate(&two_queries(), &table, &categories(), &names(&["Globex"]));
    assert_eq!(report.diagnostics.semantic_fallbacks, 2);
    assert_eq!(report.competitor_rankings.overall[0].total_mentions, 2);
}

#[test]
fn report_is_deterministic() {
    let table = responses(&[
        ("gpt", &["1. Globex\n2. Acme", "Acme first"]),
        ("claude", &["Acme", "Globex"]),
    ]);
    let aggregator = ScoringAggregator::new("Acme");
    let a = aggregator.aggregate(&two_queries(), &table, &categories(), &names(&["Globex"]));
    let b = aggregator.aggregate(&two_queries(), &table, &categories(), &names(&["Globex"]));
    assert_eq!(a, b);
}
