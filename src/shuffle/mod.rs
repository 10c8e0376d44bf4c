//! Shuffle strategies for ordering the cards.
//!
//! Strategies are trait-based so callers can swap them out:
//! - `FisherYates`: Random in-place permutation (the default)
//! - `NoShuffle`: Leaves the order untouched, for deterministic tests
//! - Any `FnMut(&mut [T])` closure

pub mod fisher_yates;

pub use fisher_yates::FisherYates;

/// Strategy for permuting the cards in place.
///
/// Called once when the engine is built and again on every reset.
pub trait ShuffleStrategy<T> {
    /// Reorder `cards` in place.
    fn shuffle(&mut self, cards: &mut [T]);
}

impl<T, F> ShuffleStrategy<T> for F
where
    F: FnMut(&mut [T]),
{
    fn shuffle(&mut self, cards: &mut [T]) {
        self(cards)
    }
}

/// Identity strategy: cards keep the order they were given in.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoShuffle;

impl<T> ShuffleStrategy<T> for NoShuffle {
    fn shuffle(&mut self, _cards: &mut [T]) {}
}
