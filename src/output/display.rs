//! Display functions for command results

use super::board::print_board;
use super::formatters::{create_progress_bar, format_code, format_score};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let pegs = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} {}",
        format_code(&result.secret),
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}  {}",
            i + 1,
            format_code(&step.guess),
            format_score(step.score, pegs),
            step.guess.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    print_board(&result.rows, result.max_rows, pegs, Some(&result.secret));

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", format!("{}", result.failed).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.solved.max(1) as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
