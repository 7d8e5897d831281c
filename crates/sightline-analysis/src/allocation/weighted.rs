//! Weighted split of an integer query budget across categories.
//!
//! Every category but the lowest-weighted gets `floor(total * weight)`; the
//! lowest-weighted one absorbs the remainder, so the counts always sum to
//! `total` exactly.

use sightline_core::errors::AllocationError;
use sightline_core::models::{CategoryTable, OrderedTally};
use sightline_core::tracing_setup::events;

/// Slack allowed on the weight sum before floors count as over-committed.
const WEIGHT_EPSILON: f64 = 1e-9;

/// Split `total` across `weights`, returned in input order.
///
/// Weights are expected to be normalized by the caller. Ties in weight keep
/// insertion order, so among equally light categories the last one absorbs
/// the remainder.
pub fn allocate(total: usize, weights: &[(String, f64)]) -> Result<OrderedTally, AllocationError> {
    for (key, weight) in weights {
        if !weight.is_finite() {
            return Err(AllocationError::NonFiniteWeight { key: key.clone() });
        }
        if *weight < 0.0 {
            return Err(AllocationError::NegativeWeight {
                key: key.clone(),
                weight: *weight,
            });
        }
    }

    let mut counts = vec![0usize; weights.len()];

    // Heaviest first; sort_by is stable so ties keep insertion order.
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].1.total_cmp(&weights[a].1));

    if let Some((&last, rest)) = order.split_last() {
        // Floors are clamped to what is left so float rounding on huge
        // totals cannot push the sum past `total`.
        let mut assigned = 0usize;
        let mut raw_assigned = 0u128;
        let mut committed_weight = 0.0f64;
        for &i in rest {
            let floor = (total as f64 * weights[i].1).floor() as usize;
            raw_assigned += floor as u128;
            committed_weight += weights[i].1;
            let count = floor.min(total - assigned);
            counts[i] = count;
            assigned += count;
        }
        if raw_assigned > total as u128 && committed_weight > 1.0 + WEIGHT_EPSILON {
            return Err(AllocationError::Overcommitted {
                assigned: usize::try_from(raw_assigned).unwrap_or(usize::MAX),
                total,
            });
        }
        counts[last] = total - assigned;
    }

    let mut allocation = OrderedTally::new();
    for ((key, _), count) in weights.iter().zip(counts) {
        allocation.add(key, count);
    }

    events::allocation_computed(total, weights.len());
    Ok(allocation)
}

/// [`allocate`] over a category table's weights.
pub fn allocate_table(total: usize, table: &CategoryTable) -> Result<OrderedTally, AllocationError> {
    allocate(total, &table.weights())
}
