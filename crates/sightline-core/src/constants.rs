/// Sightline version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Category key used when a query carries no category.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Suffix appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Ordinal tokens recognised by rank inference, in evaluation order.
pub const ORDINAL_TOKENS: [(&str, u32); 8] = [
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("#1", 1),
    ("#2", 2),
    ("#3", 3),
];

/// Decimal places for score (percentage) fields.
pub const SCORE_PRECISION: i32 = 2;

/// Decimal places for raw rate fields.
pub const RATE_PRECISION: i32 = 4;
