//! Simple interactive CLI mode
//!
//! Prompts for puzzle letters and prints the solution, over and over.

use super::solve::{SolveConfig, solve_puzzle};
use crate::output::print_solve_report;
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Center letter offered when the prompt is left blank
pub const DEFAULT_CENTER: &str = "i";

/// Outer letters offered when the prompt is left blank
pub const DEFAULT_OUTER: &str = "bcelnv";

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver) -> Result<(), String> {
    let stdin = io::stdin();
    run_simple_with(solver, &mut stdin.lock())
}

/// Interactive loop over any line source
///
/// Ends on `quit`/`q`/`exit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple_with<R: BufRead>(solver: &Solver, input: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Spelling Bee Solver - Interactive Mode          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Dictionary: {} words. Enter today's letters, or 'quit' to exit.\n",
        solver.dictionary_len()
    );

    loop {
        let Some(center) = prompt(input, &format!("Center letter [{DEFAULT_CENTER}]"))? else {
            break;
        };
        if is_quit(&center) {
            break;
        }

        let Some(outer) = prompt(input, &format!("Outer letters [{DEFAULT_OUTER}]"))? else {
            break;
        };
        if is_quit(&outer) {
            break;
        }

        let config = SolveConfig::new(
            or_default(center, DEFAULT_CENTER),
            or_default(outer, DEFAULT_OUTER),
        );

        match solve_puzzle(&config, solver) {
            Ok(report) => print_solve_report(&report),
            Err(e) => println!("\n❌ {}", e.to_string().red()),
        }
        println!();
    }

    println!("\n👋 Happy puzzling!\n");
    Ok(())
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit")
}

fn or_default(input: String, default: &str) -> String {
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

/// Get user input with a prompt, `None` at end of input
fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<Option<String>, String> {
    print!("{text}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    #[test]
    fn quits_on_command() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary);
        let mut input = Cursor::new("quit\n");

        assert!(run_simple_with(&solver, &mut input).is_ok());
    }

    #[test]
    fn ends_at_end_of_input() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary);
        let mut input = Cursor::new("i\nbcelnv\n\n\n");

        assert!(run_simple_with(&solver, &mut input).is_ok());
    }

    #[test]
    fn bad_letters_do_not_stop_the_loop() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary);
        let mut input = Cursor::new("ix\nbc\ne\ncnralt\nq\n");

        assert!(run_simple_with(&solver, &mut input).is_ok());
    }

    #[test]
    fn blank_input_uses_defaults() {
        assert_eq!(or_default(String::new(), DEFAULT_CENTER), "i");
        assert_eq!(or_default("e".to_string(), DEFAULT_CENTER), "e");
    }

    #[test]
    fn quit_words() {
        assert!(is_quit("quit"));
        assert!(is_quit("Q"));
        assert!(is_quit("exit"));
        assert!(!is_quit("i"));
    }
}
