//! Spelling Bee puzzle representation
//!
//! A puzzle is one center letter plus six outer letters. The union of the two
//! is the alphabet every playable word must stay within.

use super::validator::LetterSet;
use std::fmt;

/// Number of outer letters in a well-formed puzzle
pub const OUTER_LETTER_COUNT: usize = 6;

/// Immutable puzzle letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    center: char,
    outer: String,
    all_letters: LetterSet,
}

/// Error type for puzzle input of the wrong shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    CenterLength(usize),
    OuterLength(usize),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CenterLength(len) => write!(
                f,
                "Please enter 1 center letter and {OUTER_LETTER_COUNT} outer letters (got {len} center letters)"
            ),
            Self::OuterLength(len) => write!(
                f,
                "Please enter 1 center letter and {OUTER_LETTER_COUNT} outer letters (got {len} outer letters)"
            ),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Build a puzzle from letters that are already lowercase
    ///
    /// No shape checks happen here. Duplicate letters are accepted and simply
    /// shrink the alphabet.
    #[must_use]
    pub fn new(center: char, outer: &str) -> Self {
        let all_letters = std::iter::once(center).chain(outer.chars()).collect();

        Self {
            center,
            outer: outer.to_string(),
            all_letters,
        }
    }

    /// Parse user-entered letters
    ///
    /// Lowercases both inputs, then checks for exactly one center letter and
    /// six outer letters.
    ///
    /// # Errors
    /// Returns `PuzzleError` if either input has the wrong number of characters.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Puzzle;
    ///
    /// let puzzle = Puzzle::parse("I", "BCELNV").unwrap();
    /// assert_eq!(puzzle.center(), 'i');
    /// assert_eq!(puzzle.outer(), "bcelnv");
    ///
    /// assert!(Puzzle::parse("ib", "celnv").is_err());
    /// ```
    pub fn parse(center: &str, outer: &str) -> Result<Self, PuzzleError> {
        let center = center.trim().to_lowercase();
        let outer = outer.trim().to_lowercase();

        let mut center_chars = center.chars();
        let center_letter = match (center_chars.next(), center_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(PuzzleError::CenterLength(center.chars().count())),
        };

        let outer_len = outer.chars().count();
        if outer_len != OUTER_LETTER_COUNT {
            return Err(PuzzleError::OuterLength(outer_len));
        }

        Ok(Self::new(center_letter, &outer))
    }

    /// The letter every word must contain
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    /// The outer letters as entered
    #[inline]
    #[must_use]
    pub fn outer(&self) -> &str {
        &self.outer
    }

    /// Union of center and outer letters
    #[inline]
    #[must_use]
    pub const fn all_letters(&self) -> &LetterSet {
        &self.all_letters
    }

    /// True when repeated letters shrank the alphabet below seven
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.all_letters.len() < OUTER_LETTER_COUNT + 1
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.center, self.outer)
    }
}
