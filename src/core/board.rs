//! The Mastermind board
//!
//! The board owns the secret and the rows played so far. Solvers and
//! players only see it through the [`Board`] trait, which never exposes the
//! secret.

use super::{Code, GameColor, Score};
use crate::config::GameConfig;
use crate::error::{MastermindError, Result};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::info;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    Solved,
    Exhausted,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a guesser may do with a board
pub trait Board {
    /// Apply a guess, store it, and return its score
    ///
    /// # Errors
    /// Returns `InvalidLength` if the guess does not have [`Board::peg_count`]
    /// colors, or `GameOver` if the game already ended.
    fn submit_guess(&mut self, guess: &Code) -> Result<Score>;

    /// Rows still available for guessing
    fn attempts_remaining(&self) -> usize;

    /// Whether the last guess matched the secret
    fn is_solved(&self) -> bool;

    /// Number of pegs in a code
    fn peg_count(&self) -> usize;

    /// Colors the secret is drawn from
    fn color_alphabet(&self) -> &[GameColor];
}

/// A played row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Code,
    pub score: Score,
}

/// Board holding a hidden secret and up to `max_rows` rows
#[derive(Debug, Clone)]
pub struct GameBoard {
    secret: Code,
    alphabet: Vec<GameColor>,
    pegs: usize,
    max_rows: usize,
    rows: Vec<Row>,
    solved: bool,
}

impl GameBoard {
    /// Create a board around a known secret
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `config` is invalid or the secret
    /// uses colors outside the configured alphabet, and `InvalidLength` if the
    /// secret does not have `config.pegs` colors.
    pub fn with_secret(config: &GameConfig, secret: Code) -> Result<Self> {
        config.validate()?;
        if secret.len() != config.pegs {
            return Err(MastermindError::InvalidLength {
                expected: config.pegs,
                actual: secret.len(),
            });
        }

        let alphabet = config.alphabet().to_vec();
        if let Some(color) = secret.colors().iter().find(|c| !alphabet.contains(c)) {
            return Err(MastermindError::InvalidConfiguration(format!(
                "secret color {color} is not in the alphabet"
            )));
        }

        Ok(Self {
            secret,
            alphabet,
            pegs: config.pegs,
            max_rows: config.max_rows,
            rows: Vec::with_capacity(config.max_rows),
            solved: false,
        })
    }

    /// Create a board with a secret drawn uniformly from the alphabet
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `config` is invalid.
    pub fn random<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let alphabet = config.alphabet();
        let secret: Code = (0..config.pegs)
            .filter_map(|_| alphabet.choose(&mut *rng).copied())
            .collect();
        Self::with_secret(config, secret)
    }

    /// Rows played so far, oldest first
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the next row to be played
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// The secret, for displaying after the game ends
    #[must_use]
    pub fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.solved {
            GameState::Solved
        } else if self.rows.len() >= self.max_rows {
            GameState::Exhausted
        } else {
            GameState::Playing
        }
    }
}

impl Board for GameBoard {
    fn submit_guess(&mut self, guess: &Code) -> Result<Score> {
        if self.state().is_terminal() {
            return Err(MastermindError::GameOver);
        }
        let score = super::score(&self.secret, guess, self.pegs)?;

        self.solved = score.is_perfect(self.pegs);
        self.rows.push(Row {
            guess: guess.clone(),
            score,
        });

        if self.state().is_terminal() {
            info!(rows = self.rows.len(), state = ?self.state(), "game finished");
        }
        Ok(score)
    }

    fn attempts_remaining(&self) -> usize {
        self.max_rows.saturating_sub(self.rows.len())
    }

    fn is_solved(&self) -> bool {
        self.solved
    }

    fn peg_count(&self) -> usize {
        self.pegs
    }

    fn color_alphabet(&self) -> &[GameColor] {
        &self.alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GameColor::{Blue, Green, Orange, Red, Yellow};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(secret: [GameColor; 4]) -> GameBoard {
        GameBoard::with_secret(&GameConfig::default(), Code::from(secret)).unwrap()
    }

    #[test]
    fn new_board_is_playing() {
        let board = board([Red, Green, Blue, Yellow]);
        assert_eq!(board.state(), GameState::Playing);
        assert_eq!(board.attempts_remaining(), 12);
        assert_eq!(board.peg_count(), 4);
        assert_eq!(board.color_alphabet(), &GameColor::ALL);
        assert!(!board.is_solved());
    }

    #[test]
    fn submit_records_rows() {
        let mut board = board([Red, Green, Blue, Yellow]);
        let guess = Code::from([Red, Blue, Green, Orange]);

        let score = board.submit_guess(&guess).unwrap();

        assert_eq!(score, Score::new(1, 2));
        assert_eq!(board.current_row(), 1);
        assert_eq!(board.rows()[0], Row { guess, score });
        assert_eq!(board.attempts_remaining(), 11);
    }

    #[test]
    fn correct_guess_solves() {
        let secret = [Red, Green, Blue, Yellow];
        let mut board = board(secret);

        let score = board.submit_guess(&Code::from(secret)).unwrap();

        assert!(score.is_perfect(4));
        assert!(board.is_solved());
        assert_eq!(board.state(), GameState::Solved);
        assert_eq!(
            board.submit_guess(&Code::from(secret)),
            Err(MastermindError::GameOver)
        );
    }

    #[test]
    fn wrong_length_guess_rejected() {
        let mut board = board([Red, Green, Blue, Yellow]);
        let result = board.submit_guess(&Code::from([Red, Green]));

        assert!(matches!(result, Err(MastermindError::InvalidLength { .. })));
        assert_eq!(board.current_row(), 0);
    }

    #[test]
    fn rows_run_out() {
        let mut board = board([Red, Green, Blue, Yellow]);
        let wrong = Code::from([Orange, Orange, Orange, Orange]);

        for _ in 0..12 {
            assert_eq!(board.submit_guess(&wrong).unwrap(), Score::new(0, 0));
        }

        assert_eq!(board.state(), GameState::Exhausted);
        assert_eq!(board.attempts_remaining(), 0);
        assert_eq!(board.submit_guess(&wrong), Err(MastermindError::GameOver));
    }

    #[test]
    fn seeded_secret_is_reproducible() {
        let config = GameConfig::default();
        let a = GameBoard::random(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = GameBoard::random(&config, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.secret(), b.secret());
        assert_eq!(a.secret().len(), 4);
    }

    #[test]
    fn secret_outside_alphabet_rejected() {
        let config = GameConfig {
            colors: 2,
            ..GameConfig::default()
        };
        let result = GameBoard::with_secret(&config, Code::from([Red, Red, Red, Red]));
        assert!(matches!(
            result,
            Err(MastermindError::InvalidConfiguration(_))
        ));
    }
}
