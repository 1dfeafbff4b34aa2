//! Dictionaries for Spelling Bee solving
//!
//! Provides an embedded word list compiled into the binary, plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
