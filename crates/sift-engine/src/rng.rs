//! Random-source implementations and shuffle support.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sift_core::traits::RandomSource;

/// Default random source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic random source for tests and reproducible runs.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Fisher–Yates shuffle into a fresh vector, leaving the corpus list
/// untouched. Shuffling avoids positional bias across repeated calls.
pub(crate) fn shuffled(rng: &mut dyn RandomSource, items: &[String]) -> Vec<String> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.pick(i + 1);
        out.swap(i, j);
    }
    out
}
