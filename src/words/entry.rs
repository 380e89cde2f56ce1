//! Vocabulary entries - a word and the definition shown with it.

use serde::{Deserialize, Serialize};

/// An immutable `(word, definition)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabEntry {
    /// The unscrambled answer.
    pub word: String,

    /// Definition shown as the hint.
    pub definition: String,
}

impl VocabEntry {
    /// Create a new entry.
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }

    /// Can this word be rearranged into something other than itself?
    ///
    /// Requires at least two distinct characters.
    #[must_use]
    pub fn is_scramblable(&self) -> bool {
        has_distinct_chars(&self.word)
    }
}

/// True when `word` contains at least two different characters.
pub(crate) fn has_distinct_chars(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}
