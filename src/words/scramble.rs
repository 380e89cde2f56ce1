//! Word scrambling.
//!
//! A scramble is a random permutation of the word's characters that is
//! never the word itself. Shuffling is retried a bounded number of times;
//! if every attempt lands on the original, the first two distinct
//! characters are swapped instead.

use smallvec::SmallVec;
use tracing::warn;

use super::entry::has_distinct_chars;
use crate::core::GameRng;

type CharBuf = SmallVec<[char; 16]>;

/// Scramble `word` using at most `attempts` shuffles.
///
/// Words with fewer than two distinct characters cannot be scrambled and
/// are returned unchanged.
///
/// ```
/// use unscramble::core::GameRng;
/// use unscramble::words::scramble;
///
/// let mut rng = GameRng::new(3);
/// let scrambled = scramble("listen", &mut rng, 64);
/// assert_ne!(scrambled, "listen");
/// assert_eq!(scrambled.len(), "listen".len());
/// ```
pub fn scramble(word: &str, rng: &mut GameRng, attempts: u32) -> String {
    if !has_distinct_chars(word) {
        warn!(word, "word has fewer than two distinct characters, left unscrambled");
        return word.to_string();
    }

    let original: CharBuf = word.chars().collect();
    let mut chars = original.clone();

    for _ in 0..attempts {
        rng.shuffle(&mut chars);
        if chars != original {
            return chars.into_iter().collect();
        }
    }

    warn!(word, attempts, "shuffle kept returning the original, swapping instead");
    swap_first_distinct(original).into_iter().collect()
}

/// Swap the first character with the first one that differs from it.
fn swap_first_distinct(mut chars: CharBuf) -> CharBuf {
    if let Some(first) = chars.first().copied() {
        if let Some(pos) = chars.iter().position(|&c| c != first) {
            chars.swap(0, pos);
        }
    }
    chars
}
