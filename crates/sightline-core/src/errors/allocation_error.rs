//! Allocation errors. Every variant is an `InvalidAllocationInput`.

use super::error_code::{self, SightlineErrorCode};

/// Contract violations on allocator input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllocationError {
    #[error("category {key} has negative weight {weight}")]
    NegativeWeight { key: String, weight: f64 },

    #[error("category {key} has non-finite weight")]
    NonFiniteWeight { key: String },

    #[error("weights over-commit the budget: assigned {assigned} of {total}")]
    Overcommitted { assigned: usize, total: usize },
}

impl SightlineErrorCode for AllocationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ALLOCATION_INPUT
    }
}
