//! Puzzle solving command
//!
//! Validates user-entered letters and solves the puzzle they describe.

use crate::core::{Puzzle, PuzzleError};
use crate::solver::{SolveResult, Solver};
use log::{debug, warn};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub center: String,
    pub outer: String,
    pub top: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(center: String, outer: String) -> Self {
        Self {
            center,
            outer,
            top: 10,
        }
    }

    /// Normalize and check the letters
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError` unless there is exactly 1 center letter and 6 outer letters.
    pub fn puzzle(&self) -> Result<Puzzle, PuzzleError> {
        Puzzle::parse(&self.center, &self.outer)
    }
}

/// A solved puzzle ready for display
pub struct SolveReport {
    pub puzzle: Puzzle,
    pub result: SolveResult,
    pub top: usize,
}

/// Solve the puzzle described by `config`
///
/// The solver is never called with malformed letters.
///
/// # Errors
///
/// Returns `PuzzleError` if the letters have the wrong shape.
pub fn solve_puzzle(config: &SolveConfig, solver: &Solver) -> Result<SolveReport, PuzzleError> {
    let puzzle = config.puzzle()?;

    if puzzle.is_degenerate() {
        warn!(
            "Puzzle {puzzle} repeats letters; only {} distinct letters in play",
            puzzle.all_letters().len()
        );
    }

    debug!(
        "Solving {puzzle} against {} dictionary words",
        solver.dictionary_len()
    );
    let result = solver.solve_parallel(&puzzle);
    debug!(
        "Found {} words, {} pangrams, {} points",
        result.word_count(),
        result.pangrams.len(),
        result.total_score
    );

    Ok(SolveReport {
        puzzle,
        result,
        top: config.top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_default_puzzle() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary);
        let config = SolveConfig::new("i".to_string(), "bcelnv".to_string());

        let report = solve_puzzle(&config, &solver).unwrap();

        assert_eq!(report.top, 10);
        assert!(report.result.word_count() > 0);
        assert!(report.result.is_pangram("invincible"));
    }

    #[test]
    fn solve_normalizes_uppercase_input() {
        let dictionary = words_from_slice(&["nice", "civic"]);
        let solver = Solver::new(&dictionary);
        let config = SolveConfig::new("I".to_string(), "CEVNLB".to_string());

        let report = solve_puzzle(&config, &solver).unwrap();

        assert_eq!(report.result.valid_words, vec!["nice", "civic"]);
        assert_eq!(report.result.total_score, 6);
    }

    #[test]
    fn solve_rejects_wrong_center_count() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary);
        let config = SolveConfig::new("ie".to_string(), "bcelnv".to_string());

        let result = solve_puzzle(&config, &solver);
        assert!(matches!(result, Err(PuzzleError::CenterLength(2))));
    }

    #[test]
    fn solve_rejects_wrong_outer_count() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary);
        let config = SolveConfig::new("i".to_string(), "bce".to_string());

        let result = solve_puzzle(&config, &solver);
        assert!(matches!(result, Err(PuzzleError::OuterLength(3))));
    }

    #[test]
    fn solve_respects_top_setting() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary);
        let mut config = SolveConfig::new("i".to_string(), "bcelnv".to_string());
        config.top = 3;

        let report = solve_puzzle(&config, &solver).unwrap();
        assert_eq!(report.result.top(report.top).len(), 3);
    }
}
