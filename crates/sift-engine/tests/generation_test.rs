//! Scenario tests for the generation engine: batch generation,
//! incremental growth, and trending topics.

use std::collections::HashSet;

use sift_core::models::{Corpus, Suggestion};
use sift_corpus::{corpus_for, Language};
use sift_engine::{SeededRandom, SuggestionEngine};

fn seeded_engine(seed: u64) -> SuggestionEngine {
    SuggestionEngine::new().with_random_source(Box::new(SeededRandom::new(seed)))
}

fn texts(batch: &[Suggestion]) -> Vec<&str> {
    batch.iter().map(|s| s.text.as_str()).collect()
}

fn assert_all_unique(batch: &[Suggestion]) {
    let unique: HashSet<&str> = texts(batch).into_iter().collect();
    assert_eq!(unique.len(), batch.len(), "texts must be pairwise distinct");
}

// ── Batch generation ──────────────────────────────────────────────────────

#[test]
fn pizza_count_three() {
    let corpus = corpus_for(Language::En);
    let batch = seeded_engine(7).generate("pizza", &corpus, 3);

    assert_eq!(batch.len(), 3);
    assert_all_unique(&batch);
    for s in &batch {
        assert!(s.text.contains("pizza"), "missing term in {:?}", s.text);
        assert!(!s.opened);
        assert!(s.opened_at.is_none());
    }
}

#[test]
fn count_zero_returns_empty() {
    let corpus = corpus_for(Language::En);
    assert!(seeded_engine(1).generate("pizza", &corpus, 0).is_empty());
    assert!(seeded_engine(1).generate("", &corpus, 0).is_empty());
    assert!(seeded_engine(1).trending(&corpus, 0, "google").is_empty());
}

#[test]
fn large_count_stays_unique() {
    let corpus = corpus_for(Language::En);
    let batch = seeded_engine(11).generate("rust", &corpus, 500);

    assert_eq!(batch.len(), 500);
    assert_all_unique(&batch);
    for s in &batch {
        assert!(s.text.contains("rust"));
    }
}

#[test]
fn term_is_trimmed_before_substitution() {
    let corpus = corpus_for(Language::En);
    let batch = seeded_engine(3).generate("  pizza  ", &corpus, 10);

    for s in &batch {
        assert!(s.text.contains("pizza"));
        assert!(!s.text.contains("  "), "double space in {:?}", s.text);
    }
}

#[test]
fn empty_term_is_substituted_literally() {
    let corpus = corpus_for(Language::En);
    let batch = seeded_engine(5).generate("", &corpus, 5);

    assert_eq!(batch.len(), 5);
    assert_all_unique(&batch);
}

#[test]
fn empty_pattern_list_yields_empty_batch() {
    let corpus = Corpus {
        trending_topics: vec!["rust".to_string()],
        ..Corpus::default()
    };
    assert!(seeded_engine(2).generate("pizza", &corpus, 10).is_empty());
}

#[test]
fn ids_are_distinct_within_a_batch() {
    let corpus = corpus_for(Language::En);
    let batch = seeded_engine(13).generate("pizza", &corpus, 200);
    let ids: HashSet<_> = batch.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), batch.len());
}

#[test]
fn same_seed_reproduces_the_same_texts() {
    let corpus = corpus_for(Language::En);
    let first = seeded_engine(42).generate("pizza", &corpus, 50);
    let second = seeded_engine(42).generate("pizza", &corpus, 50);
    assert_eq!(texts(&first), texts(&second));
}

// ── Incremental growth ────────────────────────────────────────────────────

#[test]
fn extend_avoids_existing_texts() {
    let corpus = corpus_for(Language::En);
    let mut engine = seeded_engine(21);

    let base = engine.generate("pizza", &corpus, 3);
    let base_texts: Vec<String> = base.iter().map(|s| s.text.clone()).collect();

    let grown = engine.extend("pizza", &corpus, &base, 2);
    assert!(grown.len() <= 2);
    assert_all_unique(&grown);
    for s in &grown {
        assert!(
            !base_texts.contains(&s.text),
            "extend produced duplicate {:?}",
            s.text
        );
    }

    // Prior output is untouched.
    let after: Vec<String> = base.iter().map(|s| s.text.clone()).collect();
    assert_eq!(base_texts, after);
}

#[test]
fn growth_keeps_combined_set_unique() {
    let corpus = corpus_for(Language::En);
    let mut engine = seeded_engine(23);

    let base = engine.generate("rust", &corpus, 40);
    let grown = engine.extend("rust", &corpus, &base, 40);

    let combined: HashSet<&str> = base
        .iter()
        .chain(grown.iter())
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(combined.len(), base.len() + grown.len());
    assert!(combined.len() <= 80);
}

#[test]
fn extend_zero_returns_empty() {
    let corpus = corpus_for(Language::En);
    let mut engine = seeded_engine(2);
    let base = engine.generate("pizza", &corpus, 5);
    assert!(engine.extend("pizza", &corpus, &base, 0).is_empty());
}

// ── Trending topics ───────────────────────────────────────────────────────

#[test]
fn small_trending_count_uses_only_originals() {
    let corpus = corpus_for(Language::En);
    let batch = seeded_engine(31).trending(&corpus, 5, "google");

    assert_eq!(batch.len(), 5);
    assert_all_unique(&batch);
    for s in &batch {
        assert!(
            corpus.trending_topics.contains(&s.text),
            "synthetic variation {:?} before originals were exhausted",
            s.text
        );
    }
}

#[test]
fn originals_come_before_variations() {
    let corpus = corpus_for(Language::En);
    let total = corpus.trending_topics.len();
    let batch = seeded_engine(33).trending(&corpus, total + 10, "duckduckgo");

    let originals: HashSet<&str> = batch[..total].iter().map(|s| s.text.as_str()).collect();
    let expected: HashSet<&str> = corpus.trending_topics.iter().map(String::as_str).collect();
    assert_eq!(originals, expected, "leading entries must be the topics");
    assert_all_unique(&batch);
}

#[test]
fn search_engine_tag_does_not_alter_generation() {
    let corpus = corpus_for(Language::En);
    let google = seeded_engine(37).trending(&corpus, 30, "google");
    let bing = seeded_engine(37).trending(&corpus, 30, "bing");
    assert_eq!(texts(&google), texts(&bing));
}

#[test]
fn empty_topic_list_yields_empty_batch() {
    let corpus = Corpus {
        patterns: vec!["what is {term}".to_string()],
        ..Corpus::default()
    };
    assert!(seeded_engine(5).trending(&corpus, 10, "google").is_empty());
}

// ── Language corpora ──────────────────────────────────────────────────────

#[test]
fn generation_works_across_languages() {
    for language in Language::ALL {
        let corpus = corpus_for(language);
        let batch = seeded_engine(101).generate("pizza", &corpus, 25);
        assert_eq!(batch.len(), 25, "shortfall for {language}");
        assert_all_unique(&batch);
    }
}
