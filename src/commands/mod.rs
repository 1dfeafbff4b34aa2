//! Command implementations

pub mod batch;
pub mod export;
pub mod random;
pub mod simple;
pub mod solve;

pub use batch::{BatchEntry, BatchOutcome, BatchResult, PuzzleSummary, parse_batch, run_batch};
pub use export::{export_csv, write_csv};
pub use random::random_puzzle;
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveReport, solve_puzzle};
