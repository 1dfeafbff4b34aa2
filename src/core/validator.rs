//! Word validity rules
//!
//! A word is playable when it is long enough, contains the center letter and
//! uses nothing outside the puzzle alphabet. Letters may repeat.

use super::scoring::MIN_WORD_LENGTH;
use rustc_hash::FxHashSet;

/// Set of distinct letters, used for the puzzle alphabet and per-word letter sets
pub type LetterSet = FxHashSet<char>;

/// Check whether a word is playable
///
/// Inputs must already share one case; an uppercase letter in `word` is simply
/// outside a lowercase `all_letters` and makes the word invalid.
///
/// # Examples
/// ```
/// use spelling_bee::core::{is_valid, LetterSet};
///
/// let letters: LetterSet = "ibcelnv".chars().collect();
/// assert!(is_valid("nice", 'i', &letters));
/// assert!(!is_valid("cable", 'i', &letters)); // no center letter
/// assert!(!is_valid("vie", 'i', &letters)); // too short
/// ```
#[must_use]
pub fn is_valid(word: &str, center_letter: char, all_letters: &LetterSet) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
        && word.contains(center_letter)
        && word.chars().all(|c| all_letters.contains(&c))
}

/// Distinct letters used by a word
#[must_use]
pub fn distinct_letters(word: &str) -> LetterSet {
    word.chars().collect()
}

/// Check whether a word uses exactly the puzzle alphabet
///
/// Equality, not containment: every allowed letter must appear and nothing else may.
#[must_use]
pub fn is_pangram(word: &str, all_letters: &LetterSet) -> bool {
    distinct_letters(word) == *all_letters
}
