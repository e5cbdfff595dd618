//! Trending-topic generation: original topics first, then prefix and
//! suffix variations, then a numeric fallback.

use sift_core::config::GeneratorConfig;
use sift_core::models::{Corpus, Suggestion};
use sift_core::traits::RandomSource;
use tracing::debug;

use crate::batch::UniqueBatch;
use crate::rng::shuffled;
use crate::words::random_pick;

/// Produce up to `count` trending suggestions. As many unmodified
/// topics as fit come first; synthetic variations never appear before
/// the originals are exhausted. `search_engine` is a pass-through tag
/// recorded for the caller; it does not alter generation.
pub(crate) fn trending_batch(
    config: &GeneratorConfig,
    rng: &mut dyn RandomSource,
    corpus: &Corpus,
    count: usize,
    search_engine: &str,
) -> Vec<Suggestion> {
    if count == 0 || corpus.trending_topics.is_empty() {
        return Vec::new();
    }

    let topics = shuffled(rng, &corpus.trending_topics);
    let mut batch = UniqueBatch::new(count);

    // Originals first, in shuffled order.
    for topic in topics.iter().take(count) {
        batch.try_push(topic.clone());
    }

    // Prefix/suffix variations. Either component may be the empty
    // string; empty components contribute no extra space.
    let mut attempts = 0;
    let max_attempts = count * config.combination_attempt_factor;
    while batch.len() < count && attempts < max_attempts {
        attempts += 1;

        let base = &topics[rng.pick(topics.len())];
        let prefix = random_pick(rng, &corpus.variation_prefixes).unwrap_or_default();
        let suffix = random_pick(rng, &corpus.variation_suffixes).unwrap_or_default();

        let mut text = base.clone();
        if !prefix.is_empty() {
            text = format!("{prefix} {text}");
        }
        if !suffix.is_empty() {
            text = format!("{text} {suffix}");
        }
        batch.try_push(text);
    }

    // Numbered variations for any remaining slots.
    let mut fallback_attempts = 0;
    let max_fallback = (count - batch.len()) * config.fallback_attempt_factor;
    while batch.len() < count && fallback_attempts < max_fallback {
        fallback_attempts += 1;
        let base = &topics[rng.pick(topics.len())];
        let number = rng.number_in(config.trending_numeric_max);
        batch.try_push(format!("{base} {number}"));
    }

    debug!(
        requested = count,
        produced = batch.len(),
        attempts,
        fallback_attempts,
        search_engine,
        "trending generation complete"
    );

    batch.into_items(count)
}
