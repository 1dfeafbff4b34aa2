//! Batch solving
//!
//! Solves a file of puzzles, one `<center> <outer>` pair per line, in parallel.

use crate::core::{Puzzle, PuzzleError};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// One non-blank, non-comment line of a batch file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub line_number: usize,
    pub puzzle: Result<Puzzle, PuzzleError>,
}

/// Totals for one solved puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub puzzle: Puzzle,
    pub word_count: usize,
    pub pangrams: Vec<String>,
    pub total_score: usize,
}

/// Outcome of one batch line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub line_number: usize,
    pub summary: Result<PuzzleSummary, PuzzleError>,
}

/// Statistics from a batch run
#[derive(Debug)]
pub struct BatchResult {
    pub outcomes: Vec<BatchOutcome>,
    pub solved: usize,
    pub rejected: usize,
    pub duration: Duration,
}

/// Parse one line into a puzzle
///
/// Returns `None` for blank lines and `#` comments.
#[must_use]
pub fn parse_puzzle_line(line: &str) -> Option<Result<Puzzle, PuzzleError>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.split_whitespace();
    let center = fields.next().unwrap_or_default();
    let outer: String = fields.collect();

    Some(Puzzle::parse(center, &outer))
}

/// Parse a whole batch file
#[must_use]
pub fn parse_batch(content: &str) -> Vec<BatchEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            parse_puzzle_line(line).map(|puzzle| BatchEntry {
                line_number: idx + 1,
                puzzle,
            })
        })
        .collect()
}

/// Solve every well-formed entry
///
/// Rejected lines are reported in the outcomes and do not stop the run.
/// Outcomes keep the order of `entries`.
pub fn run_batch(solver: &Solver, entries: &[BatchEntry], show_progress: bool) -> BatchResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(entries.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<BatchOutcome> = entries
        .par_iter()
        .map(|entry| {
            let summary = match &entry.puzzle {
                Ok(puzzle) => {
                    let result = solver.solve(puzzle);
                    debug!(
                        "Line {}: {puzzle} -> {} words",
                        entry.line_number,
                        result.word_count()
                    );
                    Ok(PuzzleSummary {
                        puzzle: puzzle.clone(),
                        word_count: result.word_count(),
                        pangrams: result.pangrams,
                        total_score: result.total_score,
                    })
                }
                Err(e) => {
                    warn!("Line {}: {e}", entry.line_number);
                    Err(e.clone())
                }
            };
            pb.inc(1);

            BatchOutcome {
                line_number: entry.line_number,
                summary,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let solved = outcomes.iter().filter(|o| o.summary.is_ok()).count();

    BatchResult {
        rejected: outcomes.len() - solved,
        solved,
        outcomes,
        duration: start.elapsed(),
    }
}
