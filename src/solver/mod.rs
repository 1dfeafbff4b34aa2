//! Spelling Bee solving
//!
//! Runs the validity and scoring rules across a whole dictionary.

mod engine;
mod result;

pub use engine::{Solver, solve};
pub use result::{ScoredWord, SolveResult};
