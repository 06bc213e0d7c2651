//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use crate::config::GameConfig;
use crate::core::{Code, GameBoard, GameState};
use crate::error::Result;
use crate::output::formatters::{create_progress_bar, format_code};
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub num_guesses: usize,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub slowest_secret: Option<(Code, Duration)>,
    pub worst_secrets: Vec<(Code, usize)>,
    pub failures: Vec<Code>,
}

/// Solve one secret on a fresh board
///
/// # Errors
///
/// Returns an error if the board or solver cannot be built, or the solver
/// reaches an inconsistent state.
pub fn test_secret(config: &GameConfig, secret: Code) -> Result<SecretTestResult> {
    let start = Instant::now();
    let mut board = GameBoard::with_secret(config, secret.clone())?;
    let mut solver = Solver::for_board(&board)?;
    let state = solver.solve(&mut board)?;

    let guesses: Vec<Code> = solver.history().iter().map(|(g, _)| g.clone()).collect();
    Ok(SecretTestResult {
        secret,
        num_guesses: guesses.len(),
        guesses,
        success: state == GameState::Solved,
        duration: start.elapsed(),
    })
}

/// Run the solver on every secret of the board (or the first `limit`)
///
/// Secrets are solved in parallel; each game owns its own solver.
///
/// # Errors
///
/// Returns the first error reported by [`test_secret`].
pub fn run_test_all(config: &GameConfig, limit: Option<usize>) -> Result<TestAllStatistics> {
    let secrets: Vec<Code> = Code::all(config.pegs, config.alphabet())
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let results: Vec<SecretTestResult> = secrets
        .into_par_iter()
        .map(|secret| {
            let result = test_secret(config, secret);
            pb.inc(1);
            result
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &solved {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_secrets: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses >= 7)
        .map(|r| (r.secret.clone(), r.num_guesses))
        .collect();
    worst_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_secrets.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        slowest_secret: results
            .iter()
            .max_by_key(|r| r.duration)
            .map(|r| (r.secret.clone(), r.duration)),
        worst_secrets,
        failures: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.secret.clone())
            .collect(),
    }
}

/// Print test-all statistics with beautiful formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!(
        "  Best / worst case:    {} / {}",
        stats.min_guesses.to_string().green(),
        stats.max_guesses.to_string().yellow()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses} guesses: {} {count:4} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if let Some((secret, duration)) = &stats.slowest_secret {
        println!("\n🐢 {}", "Slowest Secret".yellow().bold());
        println!(
            "  {} ({:.2}ms)",
            format_code(secret),
            duration.as_secs_f64() * 1000.0
        );
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets (7+ guesses)".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} {secret} ({guesses} guesses)", format_code(secret));
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        for secret in stats.failures.iter().take(10) {
            println!("  {} {secret}", format_code(secret));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameColor::{Blue, Green, Yellow};

    #[test]
    fn test_secret_solves() {
        let result =
            test_secret(&GameConfig::default(), Code::from([Blue, Blue, Green, Green])).unwrap();

        assert!(result.success);
        assert_eq!(result.num_guesses, 1);
        assert_eq!(result.guesses, vec![Code::from([Blue, Blue, Green, Green])]);
    }

    #[test]
    fn limited_run_counts_every_secret() {
        let stats = run_test_all(&GameConfig::default(), Some(40)).unwrap();

        assert_eq!(stats.total_secrets, 40);
        assert_eq!(stats.solved + stats.failed, 40);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), stats.solved);
        assert!(stats.min_guesses >= 1);
        assert!(stats.max_guesses <= 8);
    }

    #[test]
    fn exhausted_games_are_failures() {
        let config = GameConfig {
            max_rows: 2,
            ..GameConfig::default()
        };
        let result = test_secret(&config, Code::from([Yellow, Yellow, Yellow, Yellow])).unwrap();
        assert!(!result.success);

        let stats = summarize(&[result], Duration::from_millis(5));
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.failures, vec![Code::from([Yellow, Yellow, Yellow, Yellow])]);
        assert_eq!(stats.average_guesses, 0.0);
    }
}
