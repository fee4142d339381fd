//! Seedable random sources for reproducible training.
//!
//! Weight initialization and per-epoch shuffling draw from a [`RandomSource`]
//! so that the same seed and call sequence always reproduce the same run.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// A deterministic source of uniform variates.
///
/// Implementations must be seedable: the same seed followed by the same call
/// sequence yields identical draws. Single-threaded use only; no
/// synchronization is required of implementors.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform integer draw in `[lo, hi)`.
    fn next_int(&mut self, lo: usize, hi: usize) -> usize;
}

/// Default random source backed by Xoshiro256++.
#[derive(Debug, Clone)]
pub struct XoshiroSource(Xoshiro256PlusPlus);

impl XoshiroSource {
    /// Create a source from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl RandomSource for XoshiroSource {
    fn uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn next_int(&mut self, lo: usize, hi: usize) -> usize {
        self.0.gen_range(lo..hi)
    }
}

/// Fisher–Yates shuffle driven by a [`RandomSource`].
///
/// For each position `i`, swaps with a position drawn from `[i, len)`.
pub fn shuffle(indices: &mut [usize], rng: &mut dyn RandomSource) {
    let n = indices.len();
    for i in 0..n {
        let j = rng.next_int(i, n);
        indices.swap(i, j);
    }
}
