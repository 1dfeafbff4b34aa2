//! Solve results
//!
//! The aggregate returned by a solve, plus views callers derive from it.

use std::collections::BTreeMap;
use std::fmt;

/// A playable word and its points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: usize,
}

impl ScoredWord {
    /// Pair a word with its score
    #[must_use]
    pub fn new(word: impl Into<String>, score: usize) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }

    /// Word length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// True for an empty word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}

/// Result of solving one puzzle
///
/// `valid_words` and `pangrams` are in dictionary order. `scored_words` holds
/// one entry per valid word, sorted by score from highest to lowest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveResult {
    pub valid_words: Vec<String>,
    pub pangrams: Vec<String>,
    pub scored_words: Vec<ScoredWord>,
    pub total_score: usize,
}

impl SolveResult {
    /// Number of playable words
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.valid_words.len()
    }

    /// Check whether a word was found as a pangram
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        self.pangrams.iter().any(|p| p == word)
    }

    /// A pangram that uses each letter exactly once
    #[must_use]
    pub fn is_perfect_pangram(&self, word: &str) -> bool {
        self.is_pangram(word)
            && crate::core::distinct_letters(word).len() == word.chars().count()
    }

    /// The `n` highest-scoring words
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoredWord] {
        &self.scored_words[..n.min(self.scored_words.len())]
    }

    /// Word length to number of words with that length, shortest first
    #[must_use]
    pub fn length_distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for scored in &self.scored_words {
            *distribution.entry(scored.len()).or_insert(0) += 1;
        }
        distribution
    }
}
