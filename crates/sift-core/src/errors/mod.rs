//! Error types for the Sift workspace.
//!
//! The generation engine itself has no distinguished error conditions:
//! unknown languages fall back to the default corpus and unreachable
//! counts degrade to shorter results. Errors exist only at the corpus
//! boundary (loading, validation, language parsing).

mod corpus_error;

pub use corpus_error::CorpusError;

/// Workspace-wide error umbrella.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
}

/// Workspace-wide result alias.
pub type SiftResult<T> = Result<T, SiftError>;
