//! Engine configuration.
//!
//! All tuning knobs are explicit configuration passed into each
//! generation call; the engine never reads ambient/global state.

pub mod defaults;

mod generator_config;

pub use generator_config::GeneratorConfig;
