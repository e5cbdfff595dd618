use serde::{Deserialize, Serialize};

use crate::constants::TERM_PLACEHOLDER;
use crate::errors::CorpusError;

/// The generation corpus for one language: term patterns, modifier word
/// banks, and trending topics.
///
/// A corpus is read-only for the duration of a generation call and is
/// swapped wholesale when the active language changes, which invalidates
/// previously generated batches.
///
/// The batch, growth, and trending banks overlap but are deliberately
/// kept independent: the batch generator, the incremental growth
/// generator, and the trending generator each draw from their own
/// vocabulary, and unifying them would change collision behavior at
/// scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Corpus {
    /// Template strings, each containing exactly one `{term}` placeholder.
    pub patterns: Vec<String>,

    // Batch generation banks.
    pub variation_words: Vec<String>,
    pub time_modifiers: Vec<String>,
    pub quality_modifiers: Vec<String>,

    // Incremental growth banks (growth also reuses `variation_words`).
    pub prefix_words: Vec<String>,
    pub suffix_words: Vec<String>,

    // Trending variation banks. Either list may contain the empty
    // string; empty components contribute no extra space when joined.
    pub variation_prefixes: Vec<String>,
    pub variation_suffixes: Vec<String>,

    /// Literal topic strings (no placeholder), used when no search term
    /// is supplied.
    pub trending_topics: Vec<String>,
}

impl Corpus {
    /// Substitute the term into a pattern.
    pub fn expand_pattern(pattern: &str, term: &str) -> String {
        pattern.replace(TERM_PLACEHOLDER, term)
    }

    /// Check structural soundness: every pattern carries exactly one
    /// placeholder, and at least one of patterns/trending topics exists.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.patterns.is_empty() && self.trending_topics.is_empty() {
            return Err(CorpusError::Empty);
        }
        for pattern in &self.patterns {
            let found = pattern.matches(TERM_PLACEHOLDER).count();
            if found != 1 {
                return Err(CorpusError::MissingPlaceholder {
                    pattern: pattern.clone(),
                    found,
                });
            }
        }
        Ok(())
    }
}
