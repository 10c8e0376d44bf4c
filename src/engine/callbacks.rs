//! Optional notification hooks.
//!
//! Each hook is invoked synchronously from inside `flip_card`, on the
//! caller's thread, and only when it has been set. Hooks receive card
//! indices, never the engine, so they cannot re-enter it.

use std::fmt;

/// Hook taking a single card index.
pub type FlipHook = Box<dyn FnMut(usize)>;

/// Hook taking two card indices in flip order.
pub type PairHook = Box<dyn FnMut(usize, usize)>;

/// Hook taking no arguments.
pub type GameOverHook = Box<dyn FnMut()>;

/// The four optional hooks an engine notifies.
#[derive(Default)]
pub struct MatchCallbacks {
    on_flip: Option<FlipHook>,
    on_match: Option<PairHook>,
    on_mismatch: Option<PairHook>,
    on_game_over: Option<GameOverHook>,
}

impl MatchCallbacks {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the index of every accepted flip.
    #[must_use]
    pub fn on_flip(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_flip = Some(Box::new(hook));
        self
    }

    /// Called with `(first, second)` when two revealed cards match.
    #[must_use]
    pub fn on_match(mut self, hook: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_match = Some(Box::new(hook));
        self
    }

    /// Called with `(first, second)` when two revealed cards differ.
    #[must_use]
    pub fn on_mismatch(mut self, hook: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_mismatch = Some(Box::new(hook));
        self
    }

    /// Called once when the last pair is found.
    #[must_use]
    pub fn on_game_over(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_game_over = Some(Box::new(hook));
        self
    }

    pub(crate) fn flipped(&mut self, index: usize) {
        if let Some(hook) = self.on_flip.as_mut() {
            hook(index);
        }
    }

    pub(crate) fn matched(&mut self, first: usize, second: usize) {
        if let Some(hook) = self.on_match.as_mut() {
            hook(first, second);
        }
    }

    pub(crate) fn mismatched(&mut self, first: usize, second: usize) {
        if let Some(hook) = self.on_mismatch.as_mut() {
            hook(first, second);
        }
    }

    pub(crate) fn game_over(&mut self) {
        if let Some(hook) = self.on_game_over.as_mut() {
            hook();
        }
    }
}

impl fmt::Debug for MatchCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchCallbacks")
            .field("on_flip", &self.on_flip.is_some())
            .field("on_match", &self.on_match.is_some())
            .field("on_mismatch", &self.on_mismatch.is_some())
            .field("on_game_over", &self.on_game_over.is_some())
            .finish()
    }
}
