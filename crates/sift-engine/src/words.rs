//! Word-bank indexing helpers. Empty banks simply contribute nothing.

use sift_core::traits::RandomSource;

/// Deterministic pick: `bank[i mod len]`.
pub(crate) fn cyclic<'a>(bank: &'a [String], i: usize) -> Option<&'a str> {
    if bank.is_empty() {
        None
    } else {
        Some(bank[i % bank.len()].as_str())
    }
}

/// Random pick from a bank.
pub(crate) fn random_pick<'a>(rng: &mut dyn RandomSource, bank: &'a [String]) -> Option<&'a str> {
    if bank.is_empty() {
        None
    } else {
        Some(bank[rng.pick(bank.len())].as_str())
    }
}
