//! Spelling Bee Solver - CLI
//!
//! Solves Spelling Bee puzzles from the command line, one at a time, in
//! batches, or interactively.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spelling_bee::{
    commands::{
        SolveConfig, export_csv, parse_batch, random_puzzle, run_batch, run_simple, solve_puzzle,
    },
    output::{print_all_words, print_batch_result, print_solve_report},
    solver::Solver,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee solver: every playable word, scored and ranked",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt mode (default)
    Simple,

    /// Solve one puzzle
    Solve {
        /// The center letter
        center: String,

        /// The six outer letters
        outer: String,

        /// Number of top-scoring words to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// List every valid word, not just the top scorers
        #[arg(short, long)]
        all: bool,

        /// Also write all scored words to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Solve every puzzle in a file ("<center> <outer>" per line)
    Batch {
        /// Path to the puzzle file
        file: String,
    },

    /// Generate and solve a random puzzle from the dictionary
    Random {
        /// Seed for a reproducible puzzle
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => {
            let words = words_from_slice(WORDS);
            info!("Found {} words in embedded dictionary", words.len());
            Ok(words)
        }
        path => load_from_file(path).with_context(|| format!("Failed to load dictionary {path}")),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;
    let solver = Solver::new(&dictionary);

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve {
            center,
            outer,
            top,
            all,
            csv,
        } => run_solve_command(&solver, center, outer, top, all, csv.as_deref()),
        Commands::Batch { file } => run_batch_command(&solver, &file),
        Commands::Random { seed } => run_random_command(&solver, seed),
    }
}

fn run_solve_command(
    solver: &Solver,
    center: String,
    outer: String,
    top: usize,
    all: bool,
    csv: Option<&str>,
) -> Result<()> {
    let mut config = SolveConfig::new(center, outer);
    config.top = top;

    let report = solve_puzzle(&config, solver).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_report(&report);
    if all {
        print_all_words(&report);
    }

    if let Some(path) = csv {
        export_csv(&report.result, path).with_context(|| format!("Failed to write {path}"))?;
        println!("\nSaved {} words to {path}", report.result.scored_words.len());
    }
    Ok(())
}

fn run_batch_command(solver: &Solver, file: &str) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read puzzles from {file}"))?;
    let entries = parse_batch(&content);
    debug!("Parsed {} puzzles from {file}", entries.len());

    println!("🐝 Solving {} puzzles...", entries.len());
    let result = run_batch(solver, &entries, true);
    print_batch_result(&result);
    Ok(())
}

fn run_random_command(solver: &Solver, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let puzzle = random_puzzle(solver.dictionary(), &mut rng)
        .context("Dictionary has no word with seven distinct letters")?;
    info!("Generated puzzle {puzzle}");

    let config = SolveConfig::new(puzzle.center().to_string(), puzzle.outer().to_string());
    let report = solve_puzzle(&config, solver).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_report(&report);
    Ok(())
}
