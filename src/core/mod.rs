//! Core building blocks shared by the engine and the shuffle strategies.

pub mod rng;

pub use rng::{ShuffleRng, ShuffleRngState};
