//! Seams between the engine and its collaborators.

/// Injectable source of randomness.
///
/// Every randomized decision in the engine (pattern shuffle, Bernoulli
/// modifier draws, index picks, numeric fallback) goes through this
/// trait, so tests can supply a deterministic sequence and assert exact
/// branch selection. No specific PRNG algorithm is required.
pub trait RandomSource: Send {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, len)`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_f64() * len as f64) as usize
    }

    /// Bernoulli draw with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform integer in `[1, max]`.
    fn number_in(&mut self, max: u64) -> u64 {
        (self.next_f64() * max as f64) as u64 + 1
    }
}
