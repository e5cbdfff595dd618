//! # sift-core
//!
//! Foundation crate for the Sift suggestion engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GeneratorConfig;
pub use errors::{CorpusError, SiftError, SiftResult};
pub use models::{ActionType, Corpus, Suggestion, SuggestionId};
pub use traits::RandomSource;
