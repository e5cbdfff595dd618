//! Default values for [`super::GeneratorConfig`].
//!
//! The attempt-budget multipliers are empirical tuning carried over from
//! the original data set; they are preserved as configurable constants
//! rather than derived.

/// Randomized-combination attempts per requested item.
pub const DEFAULT_COMBINATION_ATTEMPT_FACTOR: usize = 3;

/// Combination attempts per additional item when growing a batch.
pub const DEFAULT_EXTEND_ATTEMPT_FACTOR: usize = 10;

/// Numeric-fallback attempts per still-missing item.
pub const DEFAULT_FALLBACK_ATTEMPT_FACTOR: usize = 2;

/// Probability of prepending a quality modifier in pass 2.
pub const DEFAULT_QUALITY_PROBABILITY: f64 = 0.4;

/// Probability of appending a variation word in pass 2.
pub const DEFAULT_VARIATION_PROBABILITY: f64 = 0.6;

/// Probability of appending a time modifier in pass 2.
pub const DEFAULT_TIME_PROBABILITY: f64 = 0.3;

/// Upper bound (inclusive) for term-batch numeric fallback suffixes.
pub const DEFAULT_NUMERIC_FALLBACK_MAX: u64 = 100_000;

/// Upper bound (inclusive) for trending-topic numeric fallback suffixes.
pub const DEFAULT_TRENDING_NUMERIC_MAX: u64 = 10_000;

/// Items appended per scheduler chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Counts at or below this resolve without chunking overhead.
pub const DEFAULT_CHUNK_THRESHOLD: usize = 1000;
