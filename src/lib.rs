//! Mastermind Solver
//!
//! A deductive Mastermind solver: feedback is enumerated into compressed
//! per-position possibilities, intersected round by round, and the next
//! guess is picked by per-position plurality vote.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GameColor, score};
//!
//! let secret = Code::from([GameColor::Red, GameColor::Green, GameColor::Blue, GameColor::Yellow]);
//! let guess = Code::from([GameColor::Red, GameColor::Blue, GameColor::Green, GameColor::Orange]);
//!
//! let result = score(&secret, &guess, 4).unwrap();
//! assert_eq!((result.exact, result.misplaced), (1, 2));
//! ```

// Core domain types
pub mod core;

// Board configuration
pub mod config;

// Error types
pub mod error;

// Tracing setup
pub mod logging;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
