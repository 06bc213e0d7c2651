//! Main Mastermind solver interface

use super::enumerator::enumerate;
use super::merger::merge;
use super::possibility::{ColorSet, Possibility, PossibilitySet};
use super::selector;
use crate::config::{DEFAULT_COLORS, DEFAULT_PEGS};
use crate::core::{Board, Code, GameColor, GameState, Score};
use crate::error::{MastermindError, Result};
use tracing::debug;

/// Deductive Mastermind solver
///
/// Learns only from (guess, score) pairs, never from the secret. Owns the
/// guess history, the set of possibilities still consistent with it and the
/// pool of colors not yet ruled out.
///
/// # Examples
/// ```
/// use mastermind_solver::config::GameConfig;
/// use mastermind_solver::core::{Code, GameBoard, GameColor, GameState};
/// use mastermind_solver::solver::Solver;
///
/// let secret = Code::from([GameColor::Red, GameColor::Green, GameColor::Blue, GameColor::Yellow]);
/// let mut board = GameBoard::with_secret(&GameConfig::default(), secret).unwrap();
/// let mut solver = Solver::for_board(&board).unwrap();
///
/// assert_eq!(solver.solve(&mut board).unwrap(), GameState::Solved);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    pegs: usize,
    alphabet: Vec<GameColor>,
    history: Vec<(Code, Score)>,
    possibilities: PossibilitySet,
    pool: ColorSet,
    seeded: bool,
}

impl Solver {
    /// Create a solver for `pegs` pegs over `alphabet`
    ///
    /// # Errors
    /// Returns `UnsupportedConfiguration` unless the board has 4 pegs and 6
    /// colors.
    pub fn new(pegs: usize, alphabet: &[GameColor]) -> Result<Self> {
        if pegs != DEFAULT_PEGS || alphabet.len() != DEFAULT_COLORS {
            return Err(MastermindError::UnsupportedConfiguration {
                pegs,
                colors: alphabet.len(),
            });
        }

        Ok(Self {
            pegs,
            alphabet: alphabet.to_vec(),
            history: Vec::new(),
            possibilities: PossibilitySet::new(),
            pool: alphabet.iter().copied().collect(),
            seeded: false,
        })
    }

    /// Create a solver matching the shape of `board`
    ///
    /// # Errors
    /// Returns `UnsupportedConfiguration` if the board is not 4 pegs over 6 colors.
    pub fn for_board(board: &impl Board) -> Result<Self> {
        Self::new(board.peg_count(), board.color_alphabet())
    }

    /// Pick the next guess
    ///
    /// Until some feedback yields possibilities the solver plays the opening
    /// sequence. When the opening pair for this round is already ruled out or
    /// played (rows played by someone else), it votes over every code the
    /// color pool still allows.
    ///
    /// # Errors
    /// Returns `InternalInconsistency` if no untried consistent code is left.
    pub fn next_guess(&self) -> Result<Code> {
        if self.seeded {
            return selector::next_guess(&self.history, &self.possibilities, self.pegs, &self.alphabet);
        }

        if let Ok(guess) = selector::opening_guess(self.history.len(), self.pegs, &self.alphabet)
            && guess.colors().iter().all(|&c| self.pool.contains(c))
            && !self.history.iter().any(|(played, _)| *played == guess)
        {
            return Ok(guess);
        }

        let open = PossibilitySet::normalized([Possibility::new(vec![self.pool; self.pegs])]);
        if open.is_empty() {
            return Err(MastermindError::InternalInconsistency(
                "no colors left in the pool".to_string(),
            ));
        }
        selector::next_guess(&self.history, &open, self.pegs, &self.alphabet)
    }

    /// Record the score of a guess and narrow the possibilities
    ///
    /// The solver state is left untouched when an error is returned.
    ///
    /// # Errors
    /// Returns `InvalidLength` for a guess with the wrong number of pegs, and
    /// `InternalInconsistency` when the score cannot belong to this guess or
    /// contradicts the earlier feedback.
    pub fn observe(&mut self, guess: Code, score: Score) -> Result<()> {
        if guess.len() != self.pegs {
            return Err(MastermindError::InvalidLength {
                expected: self.pegs,
                actual: guess.len(),
            });
        }
        if score.exact + score.misplaced > self.pegs {
            return Err(MastermindError::InternalInconsistency(format!(
                "score {score} exceeds {} pegs",
                self.pegs
            )));
        }

        let fresh = enumerate(&guess, score, self.pool);
        if fresh.is_empty() && !score.is_blank() {
            return Err(MastermindError::InternalInconsistency(format!(
                "no code from the remaining colors scores {score} against {guess}"
            )));
        }
        let fresh_count = fresh.len();
        let (merged, pool) = merge(&self.possibilities, fresh, &guess, self.pool);

        if pool.is_empty() {
            return Err(MastermindError::InternalInconsistency(
                "feedback ruled out every color".to_string(),
            ));
        }
        let seeded = self.seeded || !merged.is_empty();
        if seeded && merged.is_empty() {
            return Err(MastermindError::InternalInconsistency(format!(
                "score {score} for {guess} contradicts earlier feedback"
            )));
        }

        debug!(
            round = self.history.len() + 1,
            %guess,
            %score,
            fresh = fresh_count,
            merged = merged.len(),
            pool = %pool,
            "observed feedback"
        );

        self.history.push((guess, score));
        self.possibilities = merged;
        self.pool = pool;
        self.seeded = seeded;
        Ok(())
    }

    /// Play one round against `board`
    ///
    /// # Errors
    /// Propagates board errors and the errors of [`Solver::next_guess`] and
    /// [`Solver::observe`].
    pub fn play_round(&mut self, board: &mut impl Board) -> Result<GameState> {
        if board.is_solved() {
            return Ok(GameState::Solved);
        }
        if board.attempts_remaining() == 0 {
            return Ok(GameState::Exhausted);
        }

        let guess = self.next_guess()?;
        let score = board.submit_guess(&guess)?;

        if score.is_perfect(self.pegs) {
            self.history.push((guess, score));
            return Ok(GameState::Solved);
        }
        if board.attempts_remaining() == 0 {
            self.history.push((guess, score));
            return Ok(GameState::Exhausted);
        }

        self.observe(guess, score)?;
        Ok(GameState::Playing)
    }

    /// Play rounds until the board is solved or out of rows
    ///
    /// # Errors
    /// See [`Solver::play_round`].
    pub fn solve(&mut self, board: &mut impl Board) -> Result<GameState> {
        loop {
            let state = self.play_round(board)?;
            if state.is_terminal() {
                return Ok(state);
            }
        }
    }

    /// Guesses and scores so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Code, Score)] {
        &self.history
    }

    #[must_use]
    pub const fn possibilities(&self) -> &PossibilitySet {
        &self.possibilities
    }

    /// Colors not yet ruled out
    #[must_use]
    pub const fn remaining_colors(&self) -> ColorSet {
        self.pool
    }

    /// Number of secrets still consistent with the history
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        if self.seeded {
            self.possibilities.candidate_count()
        } else {
            self.pool.len().pow(self.pegs as u32)
        }
    }
}
