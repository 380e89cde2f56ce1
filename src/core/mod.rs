//! Core types: RNG, configuration, configuration errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_SCRAMBLE_ATTEMPTS, MAX_ROUNDS, SCORE_INCREMENT, TOTAL_SCORE};
pub use error::ConfigError;
pub use rng::{GameRng, GameRngState};
