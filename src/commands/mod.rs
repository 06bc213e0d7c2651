//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{GameOutcome, play_game, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all, test_secret};
