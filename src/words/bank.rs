//! Word bank for vocabulary lookup and selection.
//!
//! The `WordBank` stores every entry a session may present. It is
//! validated once on construction and read-only afterwards.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::builtin::BUILTIN_VOCABULARY;
use super::entry::VocabEntry;
use crate::core::{ConfigError, GameRng};

/// Read-only set of vocabulary entries.
///
/// ## Example
///
/// ```
/// use unscramble::core::GameRng;
/// use unscramble::words::{VocabEntry, WordBank};
///
/// let bank = WordBank::new(vec![
///     VocabEntry::new("apple", "A round fruit"),
///     VocabEntry::new("pear", "A tapered fruit"),
/// ])
/// .unwrap();
///
/// let mut used = im::HashSet::new();
/// used.insert("apple".to_string());
///
/// let mut rng = GameRng::new(1);
/// assert_eq!(bank.pick_unused(&used, &mut rng).word, "pear");
/// ```
#[derive(Clone, Debug)]
pub struct WordBank {
    entries: Vec<VocabEntry>,
    index: FxHashMap<String, usize>,
}

impl WordBank {
    /// Build a bank from entries.
    ///
    /// Rejects an empty bank, empty or duplicate words, and words with
    /// fewer than two distinct characters.
    pub fn new(entries: Vec<VocabEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyBank);
        }

        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if entry.word.is_empty() {
                return Err(ConfigError::EmptyWord);
            }
            if !entry.is_scramblable() {
                return Err(ConfigError::UnscramblableWord(entry.word.clone()));
            }
            if index.insert(entry.word.clone(), i).is_some() {
                return Err(ConfigError::DuplicateWord(entry.word.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// The vocabulary shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_VOCABULARY
            .iter()
            .map(|&(word, definition)| VocabEntry::new(word, definition))
            .collect::<Vec<_>>();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.word.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Pick a uniformly random entry whose word is not in `excluding`.
    ///
    /// Callers must keep `excluding` smaller than the bank; the engine
    /// guarantees this through `GameConfig::validate`. If every word is
    /// excluded anyway, any entry may be returned.
    pub fn pick_unused(&self, excluding: &im::HashSet<String>, rng: &mut GameRng) -> &VocabEntry {
        let eligible: Vec<usize> = (0..self.entries.len())
            .filter(|&i| !excluding.contains(&self.entries[i].word))
            .collect();

        match rng.choose(&eligible) {
            Some(&i) => &self.entries[i],
            None => {
                warn!(bank = self.entries.len(), "word bank exhausted, repeating a word");
                let i = rng.gen_range_usize(0..self.entries.len());
                &self.entries[i]
            }
        }
    }

    /// Look up an entry by word.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&VocabEntry> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    /// Check if a word is in the bank.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bank is empty. Never true for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &VocabEntry> {
        self.entries.iter()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}
