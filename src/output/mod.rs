//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod board;
pub mod display;
pub mod formatters;

pub use board::{print_board, render_board};
pub use display::{print_benchmark_result, print_solve_result};
