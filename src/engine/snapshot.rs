//! Round state published to presentation layers.
//!
//! A `Snapshot` is the whole session at one instant. The engine never
//! edits a published snapshot; each intent builds the next one from a
//! clone and swaps it in. `im` structures keep that clone O(1).

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::words::VocabEntry;

/// Coarse session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Rounds remain to be played.
    Active,
    /// The final round has been checked or skipped.
    Over,
}

/// Immutable view of the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The answer for the active round.
    pub current_word: String,

    /// A permutation of `current_word`, never equal to it.
    pub scrambled_word: String,

    /// Definition shown as the hint.
    pub definition: String,

    /// Every word presented this session, `current_word` included.
    pub used_words: ImHashSet<String>,

    /// Accumulated score.
    pub score: u32,

    /// 1-indexed round counter, at most `max_rounds`.
    pub round_number: u32,

    /// Rounds in this session.
    pub max_rounds: u32,

    /// The player's in-progress guess.
    pub guess_input: String,

    /// Set by a failed check, cleared by any guess update.
    pub guess_is_invalid: bool,

    /// Set once the final round has been checked or skipped.
    pub is_session_over: bool,
}

impl Snapshot {
    /// First round of a fresh session showing `entry`.
    pub(crate) fn first_round(entry: &VocabEntry, scrambled: String, max_rounds: u32) -> Self {
        let mut used_words = ImHashSet::new();
        used_words.insert(entry.word.clone());

        Self {
            current_word: entry.word.clone(),
            scrambled_word: scrambled,
            definition: entry.definition.clone(),
            used_words,
            score: 0,
            round_number: 1,
            max_rounds,
            guess_input: String::new(),
            guess_is_invalid: false,
            is_session_over: false,
        }
    }

    /// Move to the next round showing `entry`.
    pub(crate) fn next_round(&mut self, entry: &VocabEntry, scrambled: String) {
        self.round_number += 1;
        self.guess_input.clear();
        self.guess_is_invalid = false;
        self.current_word = entry.word.clone();
        self.scrambled_word = scrambled;
        self.definition = entry.definition.clone();
        self.used_words.insert(entry.word.clone());
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_session_over {
            Phase::Over
        } else {
            Phase::Active
        }
    }

    /// Is this the last round of the session?
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.round_number >= self.max_rounds
    }

    /// Number of words presented so far.
    #[must_use]
    pub fn words_seen(&self) -> usize {
        self.used_words.len()
    }
}
