//! Engine configuration.
//!
//! A `MatchConfig` collects everything fixed at construction:
//! - The cards (ownership moves into the engine)
//! - The match predicate
//! - The shuffle strategy
//! - The notification hooks
//!
//! ```
//! use memory_match::MatchConfig;
//!
//! let game = MatchConfig::new(vec!['A', 'B', 'A', 'B'])
//!     .seed(7)
//!     .on_game_over(|| println!("all pairs found"))
//!     .build();
//!
//! assert_eq!(game.len(), 4);
//! ```

use std::fmt;

use crate::shuffle::{FisherYates, NoShuffle, ShuffleStrategy};

use super::callbacks::MatchCallbacks;
use super::memory_match::MemoryMatch;

/// Predicate deciding whether two card values form a pair.
pub type Matcher<T> = Box<dyn Fn(&T, &T) -> bool>;

/// Builder for a `MemoryMatch` engine.
pub struct MatchConfig<T> {
    pub(crate) cards: Vec<T>,
    pub(crate) matcher: Matcher<T>,
    pub(crate) shuffler: Option<Box<dyn ShuffleStrategy<T>>>,
    pub(crate) callbacks: MatchCallbacks,
}

impl<T: PartialEq + 'static> MatchConfig<T> {
    /// Configure a game whose pairs are cards with equal values.
    pub fn new(cards: Vec<T>) -> Self {
        Self::with_matcher(cards, |a: &T, b: &T| a == b)
    }
}

impl<T: 'static> MatchConfig<T> {
    /// Configure a game with a custom pairing rule.
    ///
    /// Use this for card types without `PartialEq`, or when only part of
    /// a card decides whether two cards pair up.
    pub fn with_matcher(cards: Vec<T>, matcher: impl Fn(&T, &T) -> bool + 'static) -> Self {
        Self {
            cards,
            matcher: Box::new(matcher),
            shuffler: None,
            callbacks: MatchCallbacks::default(),
        }
    }

    /// Replace the pairing rule.
    #[must_use]
    pub fn matcher(mut self, matcher: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Use a custom shuffle strategy.
    #[must_use]
    pub fn shuffle_with(mut self, shuffler: impl ShuffleStrategy<T> + 'static) -> Self {
        self.shuffler = Some(Box::new(shuffler));
        self
    }

    /// Use the default shuffle with a fixed seed.
    #[must_use]
    pub fn seed(self, seed: u64) -> Self {
        self.shuffle_with(FisherYates::new(seed))
    }

    /// Keep the cards in the order they were given.
    #[must_use]
    pub fn no_shuffle(self) -> Self {
        self.shuffle_with(NoShuffle)
    }

    /// Replace all hooks at once.
    #[must_use]
    pub fn callbacks(mut self, callbacks: MatchCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Set the flip hook.
    #[must_use]
    pub fn on_flip(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.callbacks = self.callbacks.on_flip(hook);
        self
    }

    /// Set the match hook.
    #[must_use]
    pub fn on_match(mut self, hook: impl FnMut(usize, usize) + 'static) -> Self {
        self.callbacks = self.callbacks.on_match(hook);
        self
    }

    /// Set the mismatch hook.
    #[must_use]
    pub fn on_mismatch(mut self, hook: impl FnMut(usize, usize) + 'static) -> Self {
        self.callbacks = self.callbacks.on_mismatch(hook);
        self
    }

    /// Set the game-over hook.
    #[must_use]
    pub fn on_game_over(mut self, hook: impl FnMut() + 'static) -> Self {
        self.callbacks = self.callbacks.on_game_over(hook);
        self
    }

    /// Build the engine. The cards are shuffled before this returns.
    ///
    /// Without an explicit strategy, an entropy-seeded `FisherYates` is used.
    pub fn build(self) -> MemoryMatch<T> {
        MemoryMatch::from_config(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for MatchConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchConfig")
            .field("cards", &self.cards)
            .field("custom_shuffle", &self.shuffler.is_some())
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
