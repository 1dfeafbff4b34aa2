//! Main Spelling Bee solver interface

use super::result::{ScoredWord, SolveResult};
use crate::core::{Puzzle, is_pangram, is_valid, score};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Solve a puzzle against a dictionary
///
/// Filters the dictionary to playable words, marks pangrams, scores every
/// word and sorts by score, highest first. Words with equal scores keep
/// their dictionary order.
///
/// All inputs are expected to be lowercase already.
///
/// # Examples
/// ```
/// use spelling_bee::solver::solve;
///
/// let dictionary = ["nice", "vice", "evil", "civic"];
/// let result = solve(&dictionary, 'i', "cevnlb");
///
/// assert_eq!(result.valid_words.len(), 4);
/// assert_eq!(result.total_score, 8);
/// assert_eq!(result.scored_words[0].word, "civic");
/// ```
#[must_use]
pub fn solve<S: AsRef<str>>(
    dictionary: &[S],
    center_letter: char,
    outer_letters: &str,
) -> SolveResult {
    let puzzle = Puzzle::new(center_letter, outer_letters);
    let valid_words = dictionary
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|word| is_valid(word, puzzle.center(), puzzle.all_letters()))
        .map(str::to_string)
        .collect();

    aggregate(&puzzle, valid_words)
}

/// Classify, score and total the playable words
fn aggregate(puzzle: &Puzzle, valid_words: Vec<String>) -> SolveResult {
    let mut scored_words = Vec::with_capacity(valid_words.len());
    let mut pangrams = Vec::new();

    for word in &valid_words {
        let pangram = is_pangram(word, puzzle.all_letters());
        if pangram {
            pangrams.push(word.clone());
        }
        scored_words.push(ScoredWord {
            word: word.clone(),
            score: score(word, pangram),
        });
    }

    // Stable sort: ties stay in dictionary order
    scored_words.sort_by_key(|scored| Reverse(scored.score));

    let total_score = scored_words.iter().map(|scored| scored.score).sum();

    SolveResult {
        valid_words,
        pangrams,
        scored_words,
        total_score,
    }
}

/// Solver over a borrowed dictionary
///
/// The dictionary is read-only, so one solver can serve any number of puzzles,
/// including from several threads at once.
pub struct Solver<'a> {
    dictionary: &'a [String],
}

impl<'a> Solver<'a> {
    /// Create a new solver over the given dictionary
    #[must_use]
    pub const fn new(dictionary: &'a [String]) -> Self {
        Self { dictionary }
    }

    /// Number of words in the dictionary
    #[must_use]
    pub const fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// The borrowed dictionary
    #[must_use]
    pub const fn dictionary(&self) -> &'a [String] {
        self.dictionary
    }

    /// Solve one puzzle
    #[must_use]
    pub fn solve(&self, puzzle: &Puzzle) -> SolveResult {
        solve(self.dictionary, puzzle.center(), puzzle.outer())
    }

    /// Solve one puzzle, scanning the dictionary in parallel
    ///
    /// Gives the same result as [`Solver::solve`]; the parallel filter keeps
    /// dictionary order.
    #[must_use]
    pub fn solve_parallel(&self, puzzle: &Puzzle) -> SolveResult {
        let valid_words = self
            .dictionary
            .par_iter()
            .filter(|word| is_valid(word, puzzle.center(), puzzle.all_letters()))
            .cloned()
            .collect();

        aggregate(puzzle, valid_words)
    }
}
