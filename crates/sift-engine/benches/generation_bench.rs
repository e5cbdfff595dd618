//! Criterion benchmarks for the generation engine.
//!
//! Targets:
//! - 1K batch generation well under one UI frame budget
//! - 10K batch generation (the UI maximum) in the low milliseconds
//! - growth of a 1K batch by 500 without quadratic blowup

use criterion::{criterion_group, criterion_main, Criterion};

use sift_corpus::{corpus_for, Language};
use sift_engine::{SeededRandom, SuggestionEngine};

fn seeded_engine() -> SuggestionEngine {
    SuggestionEngine::new().with_random_source(Box::new(SeededRandom::new(0xC0FFEE)))
}

fn bench_generate_1k(c: &mut Criterion) {
    let corpus = corpus_for(Language::En);
    c.bench_function("generate_1k", |b| {
        b.iter(|| {
            let mut engine = seeded_engine();
            engine.generate("rust async runtime", &corpus, 1000)
        })
    });
}

fn bench_generate_10k(c: &mut Criterion) {
    let corpus = corpus_for(Language::En);
    c.bench_function("generate_10k", |b| {
        b.iter(|| {
            let mut engine = seeded_engine();
            engine.generate("rust async runtime", &corpus, 10_000)
        })
    });
}

fn bench_extend_1k_by_500(c: &mut Criterion) {
    let corpus = corpus_for(Language::En);
    let mut engine = seeded_engine();
    let base = engine.generate("rust async runtime", &corpus, 1000);

    c.bench_function("extend_1k_by_500", |b| {
        b.iter(|| {
            let mut engine = seeded_engine();
            engine.extend("rust async runtime", &corpus, &base, 500)
        })
    });
}

fn bench_trending_5k(c: &mut Criterion) {
    let corpus = corpus_for(Language::En);
    c.bench_function("trending_5k", |b| {
        b.iter(|| {
            let mut engine = seeded_engine();
            engine.trending(&corpus, 5000, "google")
        })
    });
}

criterion_group!(
    benches,
    bench_generate_1k,
    bench_generate_10k,
    bench_extend_1k_by_500,
    bench_trending_5k
);
criterion_main!(benches);
