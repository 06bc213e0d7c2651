//! Benchmark command
//!
//! Tests solver performance across seeded random secrets.

use crate::config::GameConfig;
use crate::core::{GameBoard, GameState};
use crate::error::Result;
use crate::solver::Solver;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` games against random secrets drawn from `config.rng()`
///
/// Guess statistics cover solved games only; exhausted games are counted
/// in `failed`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or unsupported by the
/// solver, or if the solver reaches an inconsistent state.
pub fn run_benchmark(config: &GameConfig, count: usize) -> Result<BenchmarkResult> {
    let mut rng = config.rng();
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..count {
        let mut board = GameBoard::random(config, &mut rng)?;
        let mut solver = Solver::for_board(&board)?;

        if solver.solve(&mut board)? == GameState::Solved {
            let guesses = solver.history().len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();
    info!(games = count, solved, elapsed = ?duration, "benchmark finished");

    Ok(BenchmarkResult {
        total_games: count,
        solved,
        failed: count - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
