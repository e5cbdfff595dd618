//! # sift-corpus
//!
//! Language handling and corpus supply for the Sift suggestion engine:
//! built-in per-language pattern and trending-topic banks, silent
//! fallback to the default language, and loading of user-supplied
//! corpus files (TOML or JSON).

pub mod builtin;
pub mod language;
pub mod loader;

pub use builtin::corpus_for;
pub use language::Language;
pub use loader::load_from_path;
