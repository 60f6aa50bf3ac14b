//! Injectable random source for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks
//! - **Entropy fallback**: `from_entropy` for games that need no replay
//!
//! ```
//! use mana_duel::core::GameRng;
//!
//! // Same seed gives the same order
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//! GameRng::new(42).shuffle(&mut a);
//! GameRng::new(42).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used by the deck builder.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The seed is still recorded, so a game can be replayed by logging it.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
