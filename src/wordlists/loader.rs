//! Dictionary loading utilities
//!
//! Supplies the solver with a lowercase, duplicate-free word list, either from
//! a file or from the embedded constant.

use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize raw entries into a dictionary
///
/// Trims each entry, drops blanks, lowercases, and removes duplicates while
/// keeping the first occurrence so results stay in a stable order.
#[must_use]
pub fn normalize_words<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::new();

    for entry in entries {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = trimmed.to_lowercase();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    words
}

/// Load a dictionary from a file with one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    debug!("Reading dictionary from {}", path.display());

    let content = fs::read_to_string(path)?;
    let words = normalize_words(content.lines());

    info!("Found {} words in {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::words_from_slice;
/// use spelling_bee::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize_words(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["nice", "civic", "evil"]);
        assert_eq!(words, vec!["nice", "civic", "evil"]);
    }

    #[test]
    fn normalize_lowercases() {
        let words = normalize_words(["Nice", "CIVIC"]);
        assert_eq!(words, vec!["nice", "civic"]);
    }

    #[test]
    fn normalize_removes_duplicates_after_lowercasing() {
        let words = normalize_words(["nice", "Nice", "vice", "NICE", "vice"]);
        assert_eq!(words, vec!["nice", "vice"]);
    }

    #[test]
    fn normalize_skips_blank_lines() {
        let words = normalize_words(["", "  nice  ", "\t", "vice"]);
        assert_eq!(words, vec!["nice", "vice"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_normalizes() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "Nice\nvice\n\nnice\nEvil\n").unwrap();

        let words = load_from_file(file.path()).unwrap();

        assert_eq!(words, vec!["nice", "vice", "evil"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/spelling_bee/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
