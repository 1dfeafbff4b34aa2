//! Random puzzle generation
//!
//! Builds a puzzle around a dictionary word with exactly seven distinct
//! letters, so every generated puzzle has at least one pangram.

use crate::core::{OUTER_LETTER_COUNT, Puzzle, distinct_letters};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Words usable as a puzzle seed: lowercase ASCII with seven distinct letters
#[must_use]
pub fn pangram_seeds(dictionary: &[String]) -> Vec<&str> {
    dictionary
        .iter()
        .map(String::as_str)
        .filter(|word| word.chars().all(|c| c.is_ascii_lowercase()))
        .filter(|word| distinct_letters(word).len() == OUTER_LETTER_COUNT + 1)
        .collect()
}

/// Pick a seed word and a center letter at random
///
/// Outer letters are the seed's remaining letters in alphabetical order.
/// Returns `None` if no dictionary word has seven distinct letters.
pub fn random_puzzle<R: Rng + ?Sized>(dictionary: &[String], rng: &mut R) -> Option<Puzzle> {
    let seeds = pangram_seeds(dictionary);
    let seed = seeds.choose(rng)?;

    let mut letters: Vec<char> = distinct_letters(seed).into_iter().collect();
    letters.sort_unstable();

    let center = *letters.choose(rng)?;
    let outer: String = letters.iter().filter(|&&c| c != center).collect();

    Some(Puzzle::new(center, &outer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeds_have_seven_distinct_letters() {
        let dictionary = words_from_slice(&["central", "invincible", "nice", "zebra"]);
        let seeds = pangram_seeds(&dictionary);
        assert_eq!(seeds, vec!["central", "invincible"]);
    }

    #[test]
    fn random_puzzle_is_well_formed() {
        let dictionary = words_from_slice(WORDS);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let puzzle = random_puzzle(&dictionary, &mut rng).unwrap();
            assert_eq!(puzzle.outer().chars().count(), OUTER_LETTER_COUNT);
            assert!(!puzzle.is_degenerate());
            assert!(!puzzle.outer().contains(puzzle.center()));
        }
    }

    #[test]
    fn random_puzzle_always_has_a_pangram() {
        let dictionary = words_from_slice(WORDS);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let puzzle = random_puzzle(&dictionary, &mut rng).unwrap();
            let result = solve(&dictionary, puzzle.center(), puzzle.outer());
            assert!(!result.pangrams.is_empty(), "no pangram for {puzzle}");
        }
    }

    #[test]
    fn random_puzzle_same_seed_same_puzzle() {
        let dictionary = words_from_slice(WORDS);
        let first = random_puzzle(&dictionary, &mut StdRng::seed_from_u64(1));
        let second = random_puzzle(&dictionary, &mut StdRng::seed_from_u64(1));
        assert_eq!(first, second);
    }

    #[test]
    fn random_puzzle_none_without_seeds() {
        let dictionary = words_from_slice(&["nice", "vice"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_puzzle(&dictionary, &mut rng).is_none());
    }
}
