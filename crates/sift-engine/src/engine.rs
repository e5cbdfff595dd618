//! SuggestionEngine: the public generation surface.
//!
//! Sync `generate`/`extend`/`trending` for small counts, chunked async
//! variants for large ones. The engine reads no ambient state: the
//! corpus, configuration, and random source are all supplied by the
//! caller.

use sift_core::config::GeneratorConfig;
use sift_core::models::{Corpus, Suggestion};
use sift_core::traits::RandomSource;
use tracing::info;

use crate::chunked;
use crate::extend::extend_batch;
use crate::generate::generate_batch;
use crate::rng::ThreadRandom;
use crate::trending::trending_batch;

/// The suggestion generation engine.
///
/// Owns its tuning configuration and random source; every generation
/// call takes the corpus explicitly, so a language switch is just a
/// different `Corpus` argument (previously generated batches are then
/// stale and regenerated by the caller, not extended).
pub struct SuggestionEngine {
    config: GeneratorConfig,
    rng: Box<dyn RandomSource>,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Box::new(ThreadRandom),
        }
    }

    /// Replace the tuning configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the random source (e.g. a seeded source in tests).
    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate up to `count` unique suggestions for `term`.
    pub fn generate(&mut self, term: &str, corpus: &Corpus, count: usize) -> Vec<Suggestion> {
        let batch = generate_batch(&self.config, self.rng.as_mut(), term, corpus, count);
        info!(term, requested = count, produced = batch.len(), "generated batch");
        batch
    }

    /// Grow an existing batch by up to `additional_count` suggestions,
    /// none colliding with the texts already on screen.
    pub fn extend(
        &mut self,
        term: &str,
        corpus: &Corpus,
        existing: &[Suggestion],
        additional_count: usize,
    ) -> Vec<Suggestion> {
        let batch = extend_batch(
            &self.config,
            self.rng.as_mut(),
            term,
            corpus,
            existing.iter().map(|s| s.text.as_str()),
            additional_count,
        );
        info!(
            term,
            existing = existing.len(),
            requested = additional_count,
            produced = batch.len(),
            "extended batch"
        );
        batch
    }

    /// Generate up to `count` trending-topic suggestions.
    /// `search_engine` is accepted as a pass-through tag and does not
    /// alter generation.
    pub fn trending(
        &mut self,
        corpus: &Corpus,
        count: usize,
        search_engine: &str,
    ) -> Vec<Suggestion> {
        let batch = trending_batch(&self.config, self.rng.as_mut(), corpus, count, search_engine);
        info!(
            search_engine,
            requested = count,
            produced = batch.len(),
            "generated trending batch"
        );
        batch
    }

    /// Async variant of [`generate`](Self::generate): resolves to the
    /// same batch the sync path produces, but for counts above the
    /// chunk threshold the result is assembled chunk by chunk with a
    /// cooperative yield in between.
    pub async fn generate_chunked(
        &mut self,
        term: &str,
        corpus: &Corpus,
        count: usize,
    ) -> Vec<Suggestion> {
        let batch = self.generate(term, corpus, count);
        chunked::assemble(&self.config, batch, count).await
    }

    /// Async variant of [`trending`](Self::trending), chunked the same
    /// way as [`generate_chunked`](Self::generate_chunked).
    pub async fn trending_chunked(
        &mut self,
        corpus: &Corpus,
        count: usize,
        search_engine: &str,
    ) -> Vec<Suggestion> {
        let batch = self.trending(corpus, count, search_engine);
        chunked::assemble(&self.config, batch, count).await
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}
