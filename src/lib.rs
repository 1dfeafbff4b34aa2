//! Spelling Bee Solver
//!
//! Finds every playable word for a Spelling Bee puzzle, scores it and picks out the pangrams.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::solver::solve;
//!
//! let dictionary = ["nice", "civic", "invincible", "cable"];
//! let result = solve(&dictionary, 'i', "bcelnv");
//!
//! assert_eq!(result.pangrams, vec!["invincible"]);
//! assert_eq!(result.total_score, 17 + 5 + 1);
//! ```

// Core domain types
pub mod core;

// Solving over a dictionary
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
