//! Property tests for core value objects.

use proptest::prelude::*;

use sightline_core::models::{Category, CategoryTable, OrderedTally};

proptest! {
    #[test]
    fn normalized_weights_sum_to_one(weights in prop::collection::vec(0.01f64..100.0, 1..12)) {
        let table: CategoryTable = weights
            .iter()
            .enumerate()
            .map(|(i, w)| Category::new(format!("c{i}"), format!("C{i}"), *w))
            .collect();
        let normalized = table.normalized();
        prop_assert_eq!(normalized.len(), weights.len());
        prop_assert!((normalized.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tally_total_equals_increments(keys in prop::collection::vec("[a-d]", 0..50)) {
        let mut tally = OrderedTally::new();
        for key in &keys {
            tally.increment(key);
        }
        let total: usize = tally.iter().map(|e| e.count).sum();
        prop_assert_eq!(total, keys.len());
        prop_assert!(tally.len() <= 4);
    }
}
