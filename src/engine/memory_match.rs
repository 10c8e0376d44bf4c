//! The match engine.
//!
//! ## State
//!
//! - Cards: owned, shuffled at construction and on every reset
//! - Revealed: up to two face-up cards awaiting resolution
//! - Matched: every index that belongs to a found pair
//!
//! ## Flip Resolution
//!
//! The second accepted flip resolves synchronously inside the same
//! `flip_card` call, so between calls the selection holds zero or one card.
//! Hooks fire in this order: flip, then match or mismatch, then game over.
//!
//! Hook panics are not caught and nothing is rolled back: a match is
//! recorded before the match hook runs, and the game-over flag is set
//! before the game-over hook runs.

use std::fmt;

use im::OrdSet;
use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::shuffle::{FisherYates, ShuffleStrategy};

use super::callbacks::MatchCallbacks;
use super::config::{MatchConfig, Matcher};
use super::error::MatchError;

/// Whether the game can still be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Pairs remain to be found.
    Playing,
    /// Every card is matched. Only a reset leaves this phase.
    Over,
}

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The game is over.
    GameOver,
    /// Two cards are already face-up.
    SelectionFull,
    /// The card belongs to a found pair.
    AlreadyMatched,
    /// The card is already face-up.
    AlreadyRevealed,
}

/// Result of a call to [`MemoryMatch::flip_card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    /// Nothing changed and no hook fired.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    Revealed(usize),
    /// Second card completed a pair.
    Matched {
        first: usize,
        second: usize,
        /// The pair was the last one.
        game_over: bool,
    },
    /// Second card did not pair with the first.
    Mismatched { first: usize, second: usize },
}

impl FlipOutcome {
    /// Check if the flip was ignored.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, FlipOutcome::Ignored(_))
    }
}

/// State engine for a single memory game.
pub struct MemoryMatch<T> {
    cards: Vec<T>,
    revealed: SmallVec<[usize; 2]>,
    matched: OrdSet<usize>,
    game_over: bool,
    matcher: Matcher<T>,
    shuffler: Box<dyn ShuffleStrategy<T>>,
    callbacks: MatchCallbacks,
}

impl<T: PartialEq + 'static> MemoryMatch<T> {
    /// Create a randomly shuffled game without hooks.
    ///
    /// Cards pair up when their values are equal.
    pub fn new(cards: Vec<T>) -> Self {
        MatchConfig::new(cards).build()
    }

    /// Start configuring a game.
    pub fn builder(cards: Vec<T>) -> MatchConfig<T> {
        MatchConfig::new(cards)
    }
}

impl<T: 'static> MemoryMatch<T> {
    pub(crate) fn from_config(config: MatchConfig<T>) -> Self {
        let MatchConfig {
            mut cards,
            matcher,
            shuffler,
            callbacks,
        } = config;

        let mut shuffler = shuffler.unwrap_or_else(|| Box::new(FisherYates::default()));
        shuffler.shuffle(&mut cards);
        debug!("New memory game with {} cards", cards.len());

        Self {
            cards,
            revealed: SmallVec::new(),
            matched: OrdSet::new(),
            game_over: false,
            matcher,
            shuffler,
            callbacks,
        }
    }
}

impl<T> MemoryMatch<T> {
    /// Turn the card at `index` face-up.
    ///
    /// When this is the second face-up card, the pair is resolved before
    /// returning and the selection is cleared. Flips that are not allowed
    /// right now come back as [`FlipOutcome::Ignored`] without touching
    /// state or firing hooks.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::IndexOutOfRange`] if `index` is not a card
    /// position. Once the game is over every flip is ignored, including
    /// out-of-range ones.
    pub fn flip_card(&mut self, index: usize) -> Result<FlipOutcome, MatchError> {
        if self.game_over {
            return Ok(FlipOutcome::Ignored(IgnoreReason::GameOver));
        }

        if index >= self.cards.len() {
            return Err(MatchError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }

        if let Some(reason) = self.ignore_reason(index) {
            trace!("Ignored flip of card {index}: {reason:?}");
            return Ok(FlipOutcome::Ignored(reason));
        }

        self.revealed.push(index);
        trace!("Flipped card {index}");
        self.callbacks.flipped(index);

        if self.revealed.len() < 2 {
            return Ok(FlipOutcome::Revealed(index));
        }

        Ok(self.resolve())
    }

    fn ignore_reason(&self, index: usize) -> Option<IgnoreReason> {
        if self.revealed.len() == 2 {
            Some(IgnoreReason::SelectionFull)
        } else if self.matched.contains(&index) {
            Some(IgnoreReason::AlreadyMatched)
        } else if self.revealed.contains(&index) {
            Some(IgnoreReason::AlreadyRevealed)
        } else {
            None
        }
    }

    /// Compare the two face-up cards and clear the selection.
    fn resolve(&mut self) -> FlipOutcome {
        let (first, second) = (self.revealed[0], self.revealed[1]);

        let outcome = if (self.matcher)(&self.cards[first], &self.cards[second]) {
            self.matched.insert(first);
            self.matched.insert(second);
            debug!(
                "Cards {first} and {second} match ({} of {} matched)",
                self.matched.len(),
                self.cards.len()
            );
            self.callbacks.matched(first, second);

            if self.matched.len() == self.cards.len() {
                self.game_over = true;
                info!("All {} pairs found", self.pairs_found());
                self.callbacks.game_over();
            }

            FlipOutcome::Matched {
                first,
                second,
                game_over: self.game_over,
            }
        } else {
            debug!("Cards {first} and {second} do not match");
            self.callbacks.mismatched(first, second);
            FlipOutcome::Mismatched { first, second }
        };

        self.revealed.clear();
        outcome
    }

    /// Reshuffle the cards and start over.
    ///
    /// Hooks stay registered and are not invoked.
    pub fn reset_game(&mut self) {
        self.shuffler.shuffle(&mut self.cards);
        self.revealed.clear();
        self.matched = OrdSet::new();
        self.game_over = false;
        debug!("Reset memory game with {} cards", self.cards.len());
    }

    // === Accessors ===

    /// Check if every card has been matched.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Current phase of the game.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Over
        } else {
            GamePhase::Playing
        }
    }

    /// Face-up cards awaiting resolution, in flip order.
    #[must_use]
    pub fn revealed(&self) -> Vec<usize> {
        self.revealed.to_vec()
    }

    /// Indices of all matched cards.
    ///
    /// The returned set is independent of the engine; cloning it is O(1).
    #[must_use]
    pub fn matched(&self) -> OrdSet<usize> {
        self.matched.clone()
    }

    /// Get the card at `index`, if there is one.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&T> {
        self.cards.get(index)
    }

    /// Number of cards in the game.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the game has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if the card at `index` belongs to a found pair.
    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.contains(&index)
    }

    /// Check if the card at `index` is face-up awaiting resolution.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.matched.len() / 2
    }

    /// Number of cards not yet matched.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.matched.len()
    }
}

impl<T: Clone> MemoryMatch<T> {
    /// All cards in their current (shuffled) order.
    #[must_use]
    pub fn cards(&self) -> Vec<T> {
        self.cards.clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for MemoryMatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryMatch")
            .field("cards", &self.cards)
            .field("revealed", &self.revealed)
            .field("matched", &self.matched)
            .field("game_over", &self.game_over)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
