//! Vocabulary: entries, the word bank, and scrambling.
//!
//! - `VocabEntry`: an immutable word/definition pair
//! - `WordBank`: validated read-only set with no-repeat selection
//! - `scramble`: bounded-retry anagram generation

mod bank;
mod builtin;
mod entry;
mod scramble;

pub use bank::WordBank;
pub use entry::VocabEntry;
pub use scramble::scramble;
