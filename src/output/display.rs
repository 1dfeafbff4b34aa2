//! Display functions for command results

use super::formatters::{length_bar, puzzle_letters};
use crate::commands::{BatchResult, SolveReport};
use colored::Colorize;

/// Print the full report for a solved puzzle
pub fn print_solve_report(report: &SolveReport) {
    let result = &report.result;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SPELLING BEE:".bright_cyan().bold(),
        puzzle_letters(report.puzzle.center(), report.puzzle.outer())
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nFound {} valid words", result.word_count().to_string().bold());
    println!(
        "Total score: {}",
        result.total_score.to_string().bright_yellow().bold()
    );

    println!("\n🐝 {}", "Pangrams:".bright_cyan().bold());
    if result.pangrams.is_empty() {
        println!("   {}", "none".bright_black());
    } else {
        let pangrams: Vec<String> = result
            .pangrams
            .iter()
            .map(|word| {
                if result.is_perfect_pangram(word) {
                    format!("{} ★", word.to_uppercase())
                } else {
                    word.to_uppercase()
                }
            })
            .collect();
        println!("   {}", pangrams.join(", ").green().bold());
    }

    if result.scored_words.is_empty() {
        return;
    }

    println!("\n📈 {}", "Word Length Distribution:".bright_cyan().bold());
    let distribution = result.length_distribution();
    let max_count = distribution.values().copied().max().unwrap_or(0);
    for (length, count) in &distribution {
        println!(
            "   {length:2}: {} {count:4}",
            length_bar(*count, max_count, 40).green()
        );
    }

    println!(
        "\n🏆 {}",
        format!("Top {} Scoring Words:", report.top.min(result.scored_words.len()))
            .bright_cyan()
            .bold()
    );
    println!("   {:<20} {:>5}", "Word".bold(), "Score".bold());
    for scored in result.top(report.top) {
        let word = if result.is_pangram(&scored.word) {
            scored.word.green().bold()
        } else {
            scored.word.normal()
        };
        println!("   {word:<20} {:>5}", scored.score);
    }
}

/// Print every scored word, one per line
pub fn print_all_words(report: &SolveReport) {
    println!("\n📋 {}", "All Valid Words:".bright_cyan().bold());
    for scored in &report.result.scored_words {
        println!("   {:<20} {:>5}", scored.word, scored.score);
    }
}

/// Print a batch run summary
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for outcome in &result.outcomes {
        match &outcome.summary {
            Ok(summary) => println!(
                "   line {:>4}: {:<14} {:>4} words {:>5} pts  {}",
                outcome.line_number,
                summary.puzzle.to_string(),
                summary.word_count,
                summary.total_score,
                summary.pangrams.join(", ").green()
            ),
            Err(e) => println!(
                "   line {:>4}: {}",
                outcome.line_number,
                e.to_string().red()
            ),
        }
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Solved:      {}", result.solved.to_string().green());
    println!("   Rejected:    {}", result.rejected.to_string().yellow());
    println!("   Time taken:  {:.2}s", result.duration.as_secs_f64());
}
