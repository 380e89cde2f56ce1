//! Configuration errors.
//!
//! Intents never fail. Everything that could make a session misbehave
//! (a bank too small for the round count, a word that cannot be
//! scrambled) is rejected once, when the engine is built.

use thiserror::Error;

/// Why a word bank or game configuration was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a session needs at least one round")]
    ZeroRounds,

    #[error("score increment must be positive")]
    ZeroIncrement,

    #[error("scramble attempts must be positive")]
    ZeroScrambleAttempts,

    #[error("word bank has {bank} entries but a session needs {rounds}")]
    BankTooSmall { bank: usize, rounds: u32 },

    #[error("{rounds} rounds of {increment} points overflow the score")]
    ScoreOverflow { increment: u32, rounds: u32 },

    #[error("word bank has no entries")]
    EmptyBank,

    #[error("word bank contains an empty word")]
    EmptyWord,

    #[error("word {0:?} appears more than once in the word bank")]
    DuplicateWord(String),

    #[error("word {0:?} has fewer than two distinct characters and cannot be scrambled")]
    UnscramblableWord(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::BankTooSmall { bank: 3, rounds: 10 };
        assert_eq!(err.to_string(), "word bank has 3 entries but a session needs 10");

        let err = ConfigError::UnscramblableWord("aaa".into());
        assert!(err.to_string().contains("\"aaa\""));
    }
}
