use proptest::prelude::*;

use sightline_analysis::allocation::allocate;
use sightline_analysis::batch::parse_batch;
use sightline_analysis::extraction::analyze;
use sightline_analysis::scoring::ScoringAggregator;
use sightline_core::models::{CategoryTable, Query, ResponseTable};

proptest! {
    #[test]
    fn allocation_sums_to_total(
        total in 0usize..500,
        raw in prop::collection::vec(0.01f64..10.0, 1..10),
    ) {
        let sum: f64 = raw.iter().sum();
        let weights: Vec<(String, f64)> = raw
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("c{i}"), w / sum))
            .collect();
        let allocation = allocate(total, &weights).unwrap();
        let assigned: usize = allocation.iter().map(|e| e.count).sum();
        prop_assert_eq!(assigned, total);
        prop_assert_eq!(allocation.len(), weights.len());
    }

    #[test]
    fn parser_length_matches_expected(blob in ".{0,300}", expected in 0usize..20) {
        prop_assert_eq!(parse_batch(&blob, expected).len(), expected);
    }

    #[test]
    fn query_markers_round_trip(
        answers in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,4}", 1..8),
    ) {
        let blob: String = answers
            .iter()
            .enumerate()
            .map(|(i, a)| format!("Query {}: {}\n", i + 1, a))
            .collect();
        prop_assert_eq!(parse_batch(&blob, answers.len()), answers);
    }

    #[test]
    fn containing_target_means_mentioned(
        prefix in "[a-z ]{0,40}",
        suffix in "[a-z ]{0,40}",
    ) {
        let response = format!("{prefix}Acme{suffix}");
        prop_assert!(analyze(&response, "Acme", &[], None).mentioned);
    }

    #[test]
    fn visibility_is_a_percentage(
        mentioned in prop::collection::vec(any::<bool>(), 0..20),
    ) {
        let queries: Vec<Query> = (0..mentioned.len())
            .map(|i| Query::new(format!("q{i}"), "general", i))
            .collect();
        let answers: Vec<String> = mentioned
            .iter()
            .map(|&m| if m { "Acme".to_string() } else { "nothing".to_string() })
            .collect();
        let table: ResponseTable = vec![("gpt", answers)].into_iter().collect();
        let report = ScoringAggregator::new("Acme")
            .aggregate(&queries, &table, &CategoryTable::new(), &[]);
        prop_assert!((0.0..=100.0).contains(&report.visibility_score));
        prop_assert_eq!(report.total_mentions, mentioned.iter().filter(|&&m| m).count());
    }
}
