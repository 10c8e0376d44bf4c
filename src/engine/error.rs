//! Errors returned by the match engine.

use thiserror::Error;

/// Errors that can occur when flipping cards.
///
/// Flips that are merely not allowed right now (already matched, already
/// face-up, game over) are not errors; they come back as
/// [`FlipOutcome::Ignored`](super::FlipOutcome::Ignored).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Card index {index} is out of range for a game of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}
