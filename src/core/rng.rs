//! Letter scrambling and word-list ordering.
//!
//! ## Key Types
//!
//! - `Shuffle`: the permutation seam the engine scrambles letters through
//! - `GameRng`: seeded ChaCha8 implementation with per-context streams
//!
//! ```
//! use spelling_trainer::core::{GameRng, Shuffle};
//!
//! let mut rng = GameRng::new(42);
//! let mut letters = vec!['c', 'a', 't'];
//! rng.shuffle(&mut letters);
//!
//! letters.sort();
//! assert_eq!(letters, vec!['a', 'c', 't']);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Produces a permutation of a sequence in place.
///
/// No ordering guarantee beyond "a permutation of the input"; an
/// implementation may leave the sequence unchanged.
pub trait Shuffle {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<S: Shuffle + ?Sized> Shuffle for &mut S {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items);
    }
}

/// Deterministic RNG used for scrambling.
///
/// Same seed, same scrambles. Uses ChaCha8 for speed.
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

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence; used to
    /// give every new game its own streams.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15)))
    }

    /// Create an independent stream for a specific context.
    ///
    /// Keeps word-list ordering and letter scrambling from consuming each
    /// other's randomness. The same context always produces the same stream
    /// from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }
}

impl Shuffle for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }
}
