//! Deduplicating batch generation: three passes over a shuffled
//! pattern list.
//!
//! Pass 1: direct expansion, with rotating cycle modifiers once the
//! shuffled list is exhausted.
//! Pass 2: randomized combination under a bounded attempt budget.
//! Pass 3: numeric fallback for any remaining slots.

use sift_core::config::GeneratorConfig;
use sift_core::models::{Corpus, Suggestion};
use sift_core::traits::RandomSource;
use tracing::debug;

use crate::batch::UniqueBatch;
use crate::rng::shuffled;
use crate::words::{cyclic, random_pick};

/// Produce up to `count` suggestions for `term`, all texts pairwise
/// distinct. An empty term is substituted literally; a shortfall under
/// corpus exhaustion is a soft cap, never an error.
pub(crate) fn generate_batch(
    config: &GeneratorConfig,
    rng: &mut dyn RandomSource,
    term: &str,
    corpus: &Corpus,
    count: usize,
) -> Vec<Suggestion> {
    if count == 0 || corpus.patterns.is_empty() {
        return Vec::new();
    }

    let term = term.trim();
    let patterns = shuffled(rng, &corpus.patterns);
    let mut batch = UniqueBatch::new(count);

    // Pass 1: direct expansion. Index i keeps walking the shuffled
    // list; past the first full cycle, a rotating modifier keeps the
    // texts distinct.
    for i in 0..count {
        if batch.len() >= count {
            break;
        }
        let mut text = Corpus::expand_pattern(&patterns[i % patterns.len()], term);
        if i >= patterns.len() {
            let cycle = (i - patterns.len()) / patterns.len();
            text = cycle_variant(corpus, cycle, i, text);
        }
        batch.try_push(text);
    }

    // Pass 2: randomized combination. Independent Bernoulli draws
    // decide each optional component.
    let mut attempts = 0;
    let max_attempts = count * config.combination_attempt_factor;
    while batch.len() < count && attempts < max_attempts {
        attempts += 1;

        let base = Corpus::expand_pattern(&patterns[rng.pick(patterns.len())], term);
        let mut parts: Vec<&str> = Vec::with_capacity(4);

        let quality = if rng.chance(config.quality_probability) {
            random_pick(rng, &corpus.quality_modifiers)
        } else {
            None
        };
        if let Some(word) = quality {
            parts.push(word);
        }
        parts.push(&base);
        if rng.chance(config.variation_probability) {
            if let Some(word) = random_pick(rng, &corpus.variation_words) {
                parts.push(word);
            }
        }
        if rng.chance(config.time_probability) {
            if let Some(word) = random_pick(rng, &corpus.time_modifiers) {
                parts.push(word);
            }
        }

        batch.try_push(parts.join(" "));
    }

    // Pass 3: numeric fallback for whatever is still missing.
    let mut fallback_attempts = 0;
    let max_fallback = (count - batch.len()) * config.fallback_attempt_factor;
    while batch.len() < count && fallback_attempts < max_fallback {
        fallback_attempts += 1;
        let base = Corpus::expand_pattern(&patterns[rng.pick(patterns.len())], term);
        let number = rng.number_in(config.numeric_fallback_max);
        batch.try_push(format!("{base} {number}"));
    }

    debug!(
        requested = count,
        produced = batch.len(),
        attempts,
        fallback_attempts,
        "batch generation complete"
    );

    batch.into_items(count)
}

/// Rotating augmentation applied once the shuffled pattern list has
/// been consumed whole: cycle 0 appends a time modifier, cycle 1
/// prepends a quality modifier, cycle 2 appends a variation word, and
/// later cycles append a variation word followed by a time modifier.
fn cycle_variant(corpus: &Corpus, cycle: usize, i: usize, text: String) -> String {
    match cycle {
        0 => match cyclic(&corpus.time_modifiers, i) {
            Some(time) => format!("{text} {time}"),
            None => text,
        },
        1 => match cyclic(&corpus.quality_modifiers, i) {
            Some(quality) => format!("{quality} {text}"),
            None => text,
        },
        2 => match cyclic(&corpus.variation_words, i) {
            Some(variation) => format!("{text} {variation}"),
            None => text,
        },
        _ => {
            let mut out = text;
            if let Some(variation) = cyclic(&corpus.variation_words, i + 1) {
                out = format!("{out} {variation}");
            }
            if let Some(time) = cyclic(&corpus.time_modifiers, i) {
                out = format!("{out} {time}");
            }
            out
        }
    }
}
