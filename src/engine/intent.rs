//! Intents: the operations a presentation layer may invoke.

use serde::{Deserialize, Serialize};

/// A named request from presentation to the engine.
///
/// ```
/// use unscramble::engine::Intent;
///
/// let intents = [Intent::update_guess("river"), Intent::Check, Intent::Skip];
/// assert_eq!(intents[0], Intent::UpdateGuess("river".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Begin a fresh session.
    Start,
    /// Replace the in-progress guess.
    UpdateGuess(String),
    /// Compare the guess against the current word.
    Check,
    /// Give up on the current word.
    Skip,
    /// Discard the session and start again.
    Replay,
}

impl Intent {
    /// Convenience constructor for `UpdateGuess`.
    pub fn update_guess(text: impl Into<String>) -> Self {
        Intent::UpdateGuess(text.into())
    }
}

/// Result of a `check` intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckOutcome {
    /// Guess matched; score increased.
    Correct,
    /// Guess did not match; guess cleared and flagged invalid.
    Incorrect,
    /// Session already over; nothing changed.
    Ignored,
}

/// Result of a `skip` intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipOutcome {
    /// A new word was loaded.
    Advanced,
    /// The final round was skipped; the session is over.
    Finished,
    /// Session already over; nothing changed.
    Ignored,
}
