use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Pass-2 combination attempts per requested item.
    pub combination_attempt_factor: usize,
    /// Combination attempts per additional item when extending a batch.
    pub extend_attempt_factor: usize,
    /// Numeric-fallback attempts per still-missing item.
    pub fallback_attempt_factor: usize,
    /// Probability of prepending a quality modifier in pass 2.
    pub quality_probability: f64,
    /// Probability of appending a variation word in pass 2.
    pub variation_probability: f64,
    /// Probability of appending a time modifier in pass 2.
    pub time_probability: f64,
    /// Upper bound (inclusive) for term-batch numeric fallback suffixes.
    pub numeric_fallback_max: u64,
    /// Upper bound (inclusive) for trending numeric fallback suffixes.
    pub trending_numeric_max: u64,
    /// Items appended per scheduler chunk.
    pub chunk_size: usize,
    /// Counts at or below this resolve without chunking overhead.
    pub chunk_threshold: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            combination_attempt_factor: defaults::DEFAULT_COMBINATION_ATTEMPT_FACTOR,
            extend_attempt_factor: defaults::DEFAULT_EXTEND_ATTEMPT_FACTOR,
            fallback_attempt_factor: defaults::DEFAULT_FALLBACK_ATTEMPT_FACTOR,
            quality_probability: defaults::DEFAULT_QUALITY_PROBABILITY,
            variation_probability: defaults::DEFAULT_VARIATION_PROBABILITY,
            time_probability: defaults::DEFAULT_TIME_PROBABILITY,
            numeric_fallback_max: defaults::DEFAULT_NUMERIC_FALLBACK_MAX,
            trending_numeric_max: defaults::DEFAULT_TRENDING_NUMERIC_MAX,
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            chunk_threshold: defaults::DEFAULT_CHUNK_THRESHOLD,
        }
    }
}
