//! The memory match engine.
//!
//! `MemoryMatch` owns the cards and tracks which are face-up and which
//! are matched. Callers drive it with `flip_card` and `reset_game` and
//! observe it through accessors and the optional hooks in
//! `MatchCallbacks`.

pub mod callbacks;
pub mod config;
pub mod error;
pub mod memory_match;

pub use callbacks::{FlipHook, GameOverHook, MatchCallbacks, PairHook};
pub use config::{MatchConfig, Matcher};
pub use error::MatchError;
pub use memory_match::{FlipOutcome, GamePhase, IgnoreReason, MemoryMatch};
