//! Core domain types for Spelling Bee
//!
//! This module contains the puzzle rules with zero I/O.
//! Everything here is pure and total over lowercase input: the validity
//! predicate, the scoring function and the puzzle letter set.

mod puzzle;
mod scoring;
mod validator;

pub use puzzle::{OUTER_LETTER_COUNT, Puzzle, PuzzleError};
pub use scoring::{MIN_WORD_LENGTH, PANGRAM_BONUS, score};
pub use validator::{LetterSet, distinct_letters, is_pangram, is_valid};
