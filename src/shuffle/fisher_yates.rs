//! Fisher–Yates style shuffle with an exclusive swap bound.
//!
//! For each position `i` from the end down to 1, a partner `j` is drawn
//! from `[0, i)` and the two are swapped. `j` never equals `i`, so the
//! result is always a single cycle: for two or more cards, no card ends
//! where it started. Recorded deals depend on this bound; do not widen it
//! to `[0, i]`.

use crate::core::{ShuffleRng, ShuffleRngState};

use super::ShuffleStrategy;

/// Default shuffle strategy, driven by a `ShuffleRng`.
#[derive(Clone, Debug)]
pub struct FisherYates {
    rng: ShuffleRng,
}

impl FisherYates {
    /// Create a deterministic shuffle from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ShuffleRng::new(seed))
    }

    /// Create a shuffle seeded from entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(ShuffleRng::from_entropy())
    }

    /// Wrap an existing RNG, e.g. one restored from a checkpoint.
    #[must_use]
    pub fn from_rng(rng: ShuffleRng) -> Self {
        Self { rng }
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current RNG state, for replaying future shuffles.
    #[must_use]
    pub fn rng_state(&self) -> ShuffleRngState {
        self.rng.state()
    }
}

impl Default for FisherYates {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<T> ShuffleStrategy<T> for FisherYates {
    fn shuffle(&mut self, cards: &mut [T]) {
        for i in (1..cards.len()).rev() {
            let j = self.rng.gen_index(i);
            cards.swap(i, j);
        }
    }
}
