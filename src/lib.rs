//! # unscramble
//!
//! Engine for a single-screen word-unscrambling game: the player sees a
//! scrambled word and its definition, types a guess, and checks or skips.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not shared fields**: every intent publishes one
//!    complete, immutable `Snapshot`. Presentation only reads them.
//!
//! 2. **Failures are state**: a wrong guess sets `guess_is_invalid`.
//!    Nothing an intent does returns an error.
//!
//! 3. **Preconditions up front**: `GameConfig::validate` rejects a bank
//!    too small for the round count, so selection never runs dry.
//!
//! 4. **Deterministic when seeded**: the same seed and intents replay
//!    the same session.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, configuration errors
//! - `words`: vocabulary entries, word bank, scrambling
//! - `engine`: intents, snapshots, the state machine, shared handle

pub mod core;
pub mod engine;
pub mod words;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameRngState, MAX_ROUNDS, SCORE_INCREMENT, TOTAL_SCORE,
};

pub use crate::words::{scramble, VocabEntry, WordBank};

pub use crate::engine::{
    CheckOutcome, Engine, Intent, Phase, SharedEngine, SkipOutcome, Snapshot,
};
