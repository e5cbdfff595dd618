//! Property tests for the generation engine: uniqueness, bounded
//! length, term substitution, and growth disjointness hold for
//! arbitrary terms, counts, and seeds.

use std::collections::HashSet;

use proptest::prelude::*;
use sift_corpus::{corpus_for, Language};
use sift_engine::{SeededRandom, SuggestionEngine};

fn seeded_engine(seed: u64) -> SuggestionEngine {
    SuggestionEngine::new().with_random_source(Box::new(SeededRandom::new(seed)))
}

proptest! {
    #[test]
    fn batch_is_bounded_and_unique(
        term in "[a-z]{0,12}",
        count in 0usize..150,
        seed in any::<u64>(),
    ) {
        let corpus = corpus_for(Language::En);
        let batch = seeded_engine(seed).generate(&term, &corpus, count);

        prop_assert!(batch.len() <= count);
        let unique: HashSet<&str> = batch.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(unique.len(), batch.len());
    }

    #[test]
    fn every_text_contains_the_term(
        term in "[a-z]{1,12}",
        count in 1usize..100,
        seed in any::<u64>(),
    ) {
        let corpus = corpus_for(Language::En);
        let batch = seeded_engine(seed).generate(&term, &corpus, count);

        for s in &batch {
            prop_assert!(
                s.text.contains(&term),
                "text {:?} missing term {:?}",
                s.text,
                term
            );
        }
    }

    #[test]
    fn growth_is_disjoint_and_leaves_prior_output_untouched(
        term in "[a-z]{1,10}",
        initial in 0usize..60,
        additional in 0usize..60,
        seed in any::<u64>(),
    ) {
        let corpus = corpus_for(Language::En);
        let mut engine = seeded_engine(seed);

        let base = engine.generate(&term, &corpus, initial);
        let before: Vec<String> = base.iter().map(|s| s.text.clone()).collect();

        let grown = engine.extend(&term, &corpus, &base, additional);

        prop_assert!(grown.len() <= additional);
        let combined: HashSet<&str> = base
            .iter()
            .chain(grown.iter())
            .map(|s| s.text.as_str())
            .collect();
        prop_assert_eq!(combined.len(), base.len() + grown.len());
        prop_assert!(combined.len() <= initial + additional);

        let after: Vec<String> = base.iter().map(|s| s.text.clone()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn trending_is_bounded_unique_and_originals_first(
        count in 0usize..120,
        seed in any::<u64>(),
    ) {
        let corpus = corpus_for(Language::En);
        let batch = seeded_engine(seed).trending(&corpus, count, "google");

        prop_assert!(batch.len() <= count);
        let unique: HashSet<&str> = batch.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(unique.len(), batch.len());

        // No synthetic variation may appear before the originals run out.
        if count <= corpus.trending_topics.len() {
            for s in &batch {
                prop_assert!(corpus.trending_topics.contains(&s.text));
            }
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed(
        term in "[a-z]{1,8}",
        count in 0usize..80,
        seed in any::<u64>(),
    ) {
        let corpus = corpus_for(Language::En);
        let first = seeded_engine(seed).generate(&term, &corpus, count);
        let second = seeded_engine(seed).generate(&term, &corpus, count);

        let first_texts: Vec<&str> = first.iter().map(|s| s.text.as_str()).collect();
        let second_texts: Vec<&str> = second.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(first_texts, second_texts);
    }
}
