//! Game configuration.
//!
//! The defaults reproduce the classic game: ten words per session,
//! ten points per solved word, one hundred points at most.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::words::WordBank;

/// Points awarded for each correctly unscrambled word.
pub const SCORE_INCREMENT: u32 = 10;

/// Words presented per session.
pub const MAX_ROUNDS: u32 = 10;

/// Highest score a session can reach.
pub const TOTAL_SCORE: u32 = SCORE_INCREMENT * MAX_ROUNDS;

/// Default bound on scramble retries before the fallback swap kicks in.
pub const DEFAULT_SCRAMBLE_ATTEMPTS: u32 = 64;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points awarded per correct check.
    pub score_increment: u32,

    /// Rounds per session. Must not exceed the word bank size.
    pub max_rounds: u32,

    /// Shuffles tried before falling back to a deterministic swap.
    pub scramble_attempts: u32,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_increment: SCORE_INCREMENT,
            max_rounds: MAX_ROUNDS,
            scramble_attempts: DEFAULT_SCRAMBLE_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-round score increment.
    #[must_use]
    pub fn with_score_increment(mut self, increment: u32) -> Self {
        self.score_increment = increment;
        self
    }

    /// Set the number of rounds per session.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the scramble retry bound.
    #[must_use]
    pub fn with_scramble_attempts(mut self, attempts: u32) -> Self {
        self.scramble_attempts = attempts;
        self
    }

    /// Fix the RNG seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Highest achievable score under this configuration.
    ///
    /// Saturates at `u32::MAX`; `validate` rejects configurations that
    /// would get there.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.score_increment.saturating_mul(self.max_rounds)
    }

    /// Check this configuration against the bank it will draw from.
    pub fn validate(&self, bank: &WordBank) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.score_increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        if self.scramble_attempts == 0 {
            return Err(ConfigError::ZeroScrambleAttempts);
        }
        if bank.len() < self.max_rounds as usize {
            return Err(ConfigError::BankTooSmall {
                bank: bank.len(),
                rounds: self.max_rounds,
            });
        }
        if self.score_increment.checked_mul(self.max_rounds).is_none() {
            return Err(ConfigError::ScoreOverflow {
                increment: self.score_increment,
                rounds: self.max_rounds,
            });
        }
        Ok(())
    }
}
