//! Incremental growth: add suggestions to an existing batch without
//! regenerating it.
//!
//! Uses a richer 6-way rotating combination strategy than fresh batch
//! generation, which lowers collision probability once the base corpus
//! has saturated.

use sift_core::config::GeneratorConfig;
use sift_core::models::{Corpus, Suggestion};
use sift_core::traits::RandomSource;
use tracing::debug;

use crate::batch::UniqueBatch;
use crate::rng::shuffled;
use crate::words::random_pick;

/// Produce up to `additional_count` suggestions whose texts appear
/// neither in `existing` nor earlier in this call's output. Prior
/// output is never mutated; partial fulfillment is acceptable and the
/// caller may re-invoke or accept the shortfall.
pub(crate) fn extend_batch<'a>(
    config: &GeneratorConfig,
    rng: &mut dyn RandomSource,
    term: &str,
    corpus: &Corpus,
    existing: impl IntoIterator<Item = &'a str>,
    additional_count: usize,
) -> Vec<Suggestion> {
    if additional_count == 0 || corpus.patterns.is_empty() {
        return Vec::new();
    }

    let term = term.trim();
    let patterns = shuffled(rng, &corpus.patterns);
    let mut batch = UniqueBatch::excluding(additional_count, existing);

    let mut attempts = 0;
    let max_attempts = additional_count * config.extend_attempt_factor;
    while batch.len() < additional_count && attempts < max_attempts {
        attempts += 1;

        let base = Corpus::expand_pattern(&patterns[rng.pick(patterns.len())], term);
        let text = combine(rng, corpus, attempts % 6, base);
        batch.try_push(text);
    }

    // Numeric fallback for whatever the strategies could not cover.
    let mut fallback_attempts = 0;
    let max_fallback = (additional_count - batch.len()) * config.fallback_attempt_factor;
    while batch.len() < additional_count && fallback_attempts < max_fallback {
        fallback_attempts += 1;
        let base = Corpus::expand_pattern(&patterns[rng.pick(patterns.len())], term);
        let number = rng.number_in(config.numeric_fallback_max);
        batch.try_push(format!("{base} {number}"));
    }

    debug!(
        requested = additional_count,
        produced = batch.len(),
        attempts,
        fallback_attempts,
        "incremental growth complete"
    );

    batch.into_items(additional_count)
}

/// The 6-way rotating combination: prefix only; suffix only; variation
/// word only; prefix+suffix; variation+suffix; prefix+variation+suffix.
/// Cycling through structures keeps the output varied as the corpus
/// saturates.
fn combine(rng: &mut dyn RandomSource, corpus: &Corpus, strategy: usize, base: String) -> String {
    match strategy {
        0 => match random_pick(rng, &corpus.prefix_words) {
            Some(p) => format!("{p} {base}"),
            None => base,
        },
        1 => match random_pick(rng, &corpus.suffix_words) {
            Some(s) => format!("{base} {s}"),
            None => base,
        },
        2 => match random_pick(rng, &corpus.variation_words) {
            Some(v) => format!("{base} {v}"),
            None => base,
        },
        3 => {
            let p = random_pick(rng, &corpus.prefix_words);
            let s = random_pick(rng, &corpus.suffix_words);
            join_parts(&[p, Some(base.as_str()), s])
        }
        4 => {
            let v = random_pick(rng, &corpus.variation_words);
            let s = random_pick(rng, &corpus.suffix_words);
            join_parts(&[Some(base.as_str()), v, s])
        }
        _ => {
            let p = random_pick(rng, &corpus.prefix_words);
            let v = random_pick(rng, &corpus.variation_words);
            let s = random_pick(rng, &corpus.suffix_words);
            join_parts(&[p, Some(base.as_str()), v, s])
        }
    }
}

fn join_parts(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
