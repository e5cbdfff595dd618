//! # sift-engine
//!
//! The Sift generation engine: a template-expansion and deduplication
//! engine over a pattern/word-bank corpus, with incremental growth
//! (add N more without regenerating existing items) and a cooperative
//! chunk scheduler for large volumes.
//!
//! All randomness flows through the injectable
//! [`sift_core::traits::RandomSource`], so callers can seed a
//! deterministic source for tests.

pub mod engine;
pub mod rng;

mod batch;
mod chunked;
mod extend;
mod generate;
mod trending;
mod words;

pub use engine::SuggestionEngine;
pub use rng::{SeededRandom, ThreadRandom};
