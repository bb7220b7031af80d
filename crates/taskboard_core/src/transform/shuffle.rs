//! Fisher–Yates shuffle with a pluggable randomness source.
//!
//! # Invariants
//! - Output is a permutation of the input; nothing is sampled or dropped.
//! - The input slice is never mutated.
//! - Every index from `len - 1` down to `1` draws exactly once.

use rand::Rng;

/// Source of uniformly distributed indexes.
pub trait IndexSource {
    /// Returns an index in `0..bound`. `bound` is always at least 2.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Adapts any `rand` generator into an [`IndexSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> IndexSource for RngSource<R> {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// Returns a uniformly random permutation of `items` using the thread RNG.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut RngSource(rand::rng()))
}

/// Returns a permutation of `items` driven by `source`.
///
/// Walks from the last index down to index 1 and swaps each slot with a
/// slot at or before it. Empty and single-element inputs come back as-is.
pub fn shuffle_with<T: Clone, S: IndexSource + ?Sized>(items: &[T], source: &mut S) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = source.pick(i + 1).min(i);
        out.swap(i, j);
    }
    out
}
