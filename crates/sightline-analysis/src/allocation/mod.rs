//! Query budget allocation and query list planning.

pub mod plan;
pub mod weighted;

pub use plan::{deduplicate_queries, QueryPlan};
pub use weighted::{allocate, allocate_table};
