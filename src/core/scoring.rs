//! Word scoring
//!
//! Four-letter words are worth one point. Longer words earn one point per
//! letter, and a pangram earns an extra seven.

/// Shortest playable word
pub const MIN_WORD_LENGTH: usize = 4;

/// Extra points for using every letter of the puzzle
pub const PANGRAM_BONUS: usize = 7;

/// Score a word
///
/// The four-letter rule is checked first and wins even when `is_pangram` is set.
///
/// # Examples
/// ```
/// use spelling_bee::core::score;
///
/// assert_eq!(score("nice", false), 1);
/// assert_eq!(score("civic", false), 5);
/// assert_eq!(score("invincible", true), 17);
/// ```
#[must_use]
pub fn score(word: &str, is_pangram: bool) -> usize {
    let length = word.chars().count();

    if length == MIN_WORD_LENGTH {
        1
    } else if is_pangram {
        length + PANGRAM_BONUS
    } else {
        length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_letter_word_scores_one() {
        assert_eq!(score("nice", false), 1);
        assert_eq!(score("evil", false), 1);
    }

    #[test]
    fn four_letter_rule_beats_pangram_bonus() {
        assert_eq!(score("abcd", true), 1);
    }

    #[test]
    fn longer_words_score_their_length() {
        assert_eq!(score("civic", false), 5);
        assert_eq!(score("incline", false), 7);
    }

    #[test]
    fn pangram_gets_bonus() {
        assert_eq!(score("central", true), 7 + PANGRAM_BONUS);
        assert_eq!(score("invincible", true), 17);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(score("café", false), 1);
        assert_eq!(score("naïve", false), 5);
    }
}
