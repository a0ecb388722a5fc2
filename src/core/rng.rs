//! Random number generation for word selection.
//!
//! ## Key Features
//!
//! - **Injectable**: the selector draws through the `RandomSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces identical batches
//! - **Forkable**: derive independent streams (e.g. simulated guessing vs dealing)
//! - **Scripted**: `SequenceRng` replays a fixed sequence of draws in tests
//!
//! ## Usage
//!
//! ```
//! use charades_engine::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut other = GameRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng.gen_index(100), other.gen_index(100));
//!
//! // Forks are independent but deterministic
//! let mut guesses = rng.fork();
//! let mut guesses2 = other.fork();
//! assert_eq!(guesses.gen_index(1000), guesses2.gen_index(1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform randomness for batch selection.
///
/// Implementors only need `gen_index`. The default `shuffle` is a
/// Fisher-Yates shuffle driven by `gen_index`.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Seedable RNG used by the engine.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the thread RNG.
    ///
    /// This is what a real match uses: no reproducibility guarantee.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Replays a fixed sequence of draws.
///
/// Each draw takes the next value modulo `len`; the sequence wraps around
/// when exhausted. An empty sequence always draws index 0.
///
/// ```
/// use charades_engine::core::{RandomSource, SequenceRng};
///
/// let mut rng = SequenceRng::new(vec![2, 7]);
/// assert_eq!(rng.gen_index(5), 2);
/// assert_eq!(rng.gen_index(5), 2); // 7 % 5
/// assert_eq!(rng.gen_index(5), 2); // wrapped
/// ```
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    /// Create a scripted source from a sequence of raw draws.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn gen_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() {
            self.pos += 1;
            return 0;
        }
        let raw = self.values[self.pos % self.values.len()];
        self.pos += 1;
        raw % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_in_range() {
        let mut rng = GameRng::new(7);
        for len in 1..50 {
            assert!(rng.gen_index(len) < len);
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(3);
        for _ in 0..20 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
        }
    }

    #[test]
    fn test_sequence_rng_replays_and_wraps() {
        let mut rng = SequenceRng::new(vec![0, 4, 9]);

        assert_eq!(rng.gen_index(3), 0);
        assert_eq!(rng.gen_index(3), 1);
        assert_eq!(rng.gen_index(3), 0);
        assert_eq!(rng.gen_index(10), 0);
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn test_sequence_rng_empty_always_zero() {
        let mut rng = SequenceRng::default();
        assert_eq!(rng.gen_index(5), 0);
        assert_eq!(rng.gen_index(1), 0);
    }

    #[test]
    fn test_default_shuffle_is_permutation() {
        let mut rng = SequenceRng::new(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        let mut data = vec!['a', 'b', 'c', 'd', 'e'];

        rng.shuffle(&mut data);

        let mut sorted = data.clone();
        sorted.sort();
        assert_eq!(sorted, vec!['a', 'b', 'c', 'd', 'e']);
        assert_eq!(rng.draws(), 4);
    }
}
