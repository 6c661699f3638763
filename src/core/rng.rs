//! Deterministic random opponent hands.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical hand sequence
//! - **Uniform**: Each hand drawn with exactly 1/3 probability
//! - **Forkable**: A reset match gets a fresh, independent stream
//!
//! ```
//! use rps_engine::MatchRng;
//!
//! let mut a = MatchRng::new(42);
//! let mut b = MatchRng::new(42);
//! assert_eq!(a.choose_hand(), b.choose_hand());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::hand::Hand;

/// Deterministic RNG for opponent hand selection.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence. Used when
    /// a match restarts so the rematch does not replay the old hands.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Draw the opponent's hand, uniformly over the three variants.
    pub fn choose_hand(&mut self) -> Hand {
        Hand::ALL[self.inner.gen_range(0..Hand::ALL.len())]
    }

    /// The seed this stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}
