//! # memory-match
//!
//! State engine for memory (pair-matching) card games.
//!
//! The engine owns a shuffled sequence of card values and tracks which
//! cards are face-up and which pairs have been found. Rendering, input,
//! scoring and timers are left to the caller, who is notified through
//! optional hooks.
//!
//! ```
//! use memory_match::{FlipOutcome, MemoryMatch};
//!
//! let mut game = MemoryMatch::builder(vec!["cat", "dog", "cat", "dog"])
//!     .no_shuffle()
//!     .build();
//!
//! game.flip_card(0).unwrap();
//! let outcome = game.flip_card(2).unwrap();
//!
//! assert_eq!(outcome, FlipOutcome::Matched { first: 0, second: 2, game_over: false });
//! assert_eq!(game.pairs_found(), 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG
//! - `shuffle`: Pluggable shuffle strategies
//! - `engine`: The match engine, its configuration and hooks

pub mod core;
pub mod shuffle;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{ShuffleRng, ShuffleRngState};

pub use crate::shuffle::{FisherYates, NoShuffle, ShuffleStrategy};

pub use crate::engine::{
    FlipOutcome, GamePhase, IgnoreReason, MatchCallbacks, MatchConfig, MatchError, MemoryMatch,
};
