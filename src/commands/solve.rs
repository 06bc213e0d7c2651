//! Code solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::config::GameConfig;
use crate::core::{Code, GameBoard, GameState, Row, Score};
use crate::error::Result;
use crate::solver::Solver;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: Code,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self {
            secret,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub state: GameState,
    pub guesses: Vec<GuessStep>,
    pub rows: Vec<Row>,
    pub max_rows: usize,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret with a fresh solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the configured board
/// - The board is not one the solver supports
/// - The solver runs out of consistent guesses
pub fn solve_secret(config: SolveConfig) -> Result<SolveResult> {
    let mut board = GameBoard::with_secret(&config.game, config.secret)?;
    let mut solver = Solver::for_board(&board)?;
    let mut guesses: Vec<GuessStep> = Vec::new();

    let state = loop {
        let candidates_before = solver.candidate_count();
        let state = solver.play_round(&mut board)?;

        let candidates_after = match state {
            GameState::Solved => 1,
            _ => solver.candidate_count(),
        };
        if let Some((guess, score)) = solver.history().last()
            && guesses.len() < solver.history().len()
        {
            guesses.push(GuessStep {
                guess: guess.clone(),
                score: *score,
                candidates_before,
                candidates_after,
            });
        }

        if state.is_terminal() {
            break state;
        }
    };

    Ok(SolveResult {
        success: state == GameState::Solved,
        state,
        guesses,
        rows: board.rows().to_vec(),
        max_rows: board.max_rows(),
        secret: board.secret().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameColor::{self, Blue, Green, Orange, Pink, Red, Yellow};
    use crate::error::MastermindError;

    fn solve(secret: [GameColor; 4]) -> SolveResult {
        solve_secret(SolveConfig::new(Code::from(secret))).unwrap()
    }

    #[test]
    fn solve_secret_succeeds() {
        let result = solve([Red, Green, Blue, Yellow]);

        assert!(result.success);
        assert_eq!(result.state, GameState::Solved);
        assert_eq!(result.guesses.len(), result.rows.len());
        assert_eq!(result.rows.last().map(|r| r.guess.clone()), Some(result.secret));
    }

    #[test]
    fn solve_records_candidate_reduction() {
        let result = solve([Orange, Pink, Pink, Blue]);

        assert_eq!(result.guesses[0].candidates_before, 1296);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_opening_secret_in_one() {
        let result = solve([Blue, Blue, Green, Green]);

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].score, Score::new(4, 0));
    }

    #[test]
    fn solve_with_row_limit() {
        let mut config = SolveConfig::new(Code::from([Yellow, Yellow, Yellow, Yellow]));
        config.game.max_rows = 3;

        let result = solve_secret(config).unwrap();

        assert!(!result.success);
        assert_eq!(result.state, GameState::Exhausted);
        assert_eq!(result.guesses.len(), 3);
    }

    #[test]
    fn solve_unsupported_board_returns_error() {
        let mut config = SolveConfig::new(Code::from([Red, Red, Red]));
        config.game.pegs = 3;

        assert!(matches!(
            solve_secret(config),
            Err(MastermindError::UnsupportedConfiguration { pegs: 3, colors: 6 })
        ));
    }
}
