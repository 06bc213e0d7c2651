//! Mastermind Solver - CLI
//!
//! Mastermind with TUI and CLI modes, backed by a deductive solver.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        solve_secret,
    },
    config::{DEFAULT_COLORS, DEFAULT_PEGS, DEFAULT_ROWS, GameConfig},
    core::{Code, GameBoard},
    logging,
    output::{print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind game and deductive solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in a code (the solver supports 4)
    #[arg(long, global = true, default_value_t = DEFAULT_PEGS)]
    pegs: usize,

    /// Number of colors in play (the solver supports 6)
    #[arg(long, global = true, default_value_t = DEFAULT_COLORS)]
    colors: usize,

    /// Rows on the board
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Seed for secret generation (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbosity", global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text game without TUI)
    Simple,

    /// Solve a specific secret, or a random one when none is given
    Solve {
        /// Colors of the secret, by name or unique prefix
        colors: Vec<String>,

        /// Show verbose output with candidate counts
        #[arg(long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        pegs: cli.pegs,
        colors: cli.colors,
        max_rows: cli.rows,
        seed: cli.seed,
    };
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // A stderr subscriber would draw over the TUI
    if !matches!(command, Commands::Play) {
        logging::init(cli.verbosity);
    }

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&config),
        Commands::Solve { colors, verbose } => run_solve_command(config, &colors, verbose),
        Commands::Benchmark { count } => run_benchmark_command(&config, count),
        Commands::TestAll { limit } => run_test_all_command(&config, limit),
    }
}

fn run_solve_command(config: GameConfig, colors: &[String], verbose: bool) -> Result<()> {
    let secret = if colors.is_empty() {
        GameBoard::random(&config, &mut config.rng())?.secret().clone()
    } else {
        Code::parse(&colors.join(" "), config.pegs, config.alphabet())?
    };

    let result = solve_secret(SolveConfig {
        secret,
        game: config,
    })?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, count: usize) -> Result<()> {
    match config.seed {
        Some(seed) => println!("Running benchmark on {count} random secrets (seed {seed})..."),
        None => println!("Running benchmark on {count} random secrets..."),
    }

    let result = run_benchmark(config, count)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(config: &GameConfig, limit: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets ({} pegs, {} colors)",
        config.code_space(),
        config.pegs,
        config.colors
    );
    println!();

    let stats = run_test_all(config, limit)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    let app = App::new(config)?;
    run_tui(app)
}
