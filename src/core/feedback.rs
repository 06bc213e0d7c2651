//! Scoring of a guess against a secret
//!
//! Feedback is a pair of counts: pegs of the right color in the right
//! position (exact) and pegs of a color present in the secret but placed
//! elsewhere (misplaced), counted with multiset semantics.

use super::{Code, GameColor};
use crate::error::{MastermindError, Result};
use std::fmt;

/// Key peg kinds
///
/// Kept apart from [`GameColor`]: the physical game draws exact matches
/// with red pegs and misplaced ones with white pegs, which are not code
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// Right color, right position
    Exact,
    /// Right color, wrong position
    Misplaced,
    /// No match
    None,
}

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub exact: usize,
    pub misplaced: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize) -> Self {
        Self { exact, misplaced }
    }

    /// Score of a perfect guess on a board with `pegs` pegs
    #[inline]
    #[must_use]
    pub const fn perfect(pegs: usize) -> Self {
        Self::new(pegs, 0)
    }

    /// Check whether every one of `pegs` positions matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, pegs: usize) -> bool {
        self.exact == pegs
    }

    /// Score carries no information besides "none of these colors"
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.exact == 0 && self.misplaced == 0
    }

    /// Key pegs for a row of `pegs` pegs: exact first, then misplaced, then none
    #[must_use]
    pub fn key_pegs(self, pegs: usize) -> Vec<FeedbackKind> {
        let rest = pegs.saturating_sub(self.exact + self.misplaced);
        std::iter::repeat_n(FeedbackKind::Exact, self.exact)
            .chain(std::iter::repeat_n(FeedbackKind::Misplaced, self.misplaced))
            .chain(std::iter::repeat_n(FeedbackKind::None, rest))
            .collect()
    }

    /// Calculate the score of `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count positions where both codes agree (exact)
    /// 2. Over the remaining positions, sum `min(count in secret, count in guess)`
    ///    per color (misplaced)
    ///
    /// Symmetric in its arguments. Codes of different length are compared
    /// over their common prefix; use [`score`] for the checked variant.
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        let mut secret_rest = [0usize; GameColor::COUNT];
        let mut guess_rest = [0usize; GameColor::COUNT];
        let mut exact = 0;

        for (&s, &g) in secret.colors().iter().zip(guess.colors()) {
            if s == g {
                exact += 1;
            } else {
                secret_rest[s.index()] += 1;
                guess_rest[g.index()] += 1;
            }
        }

        let misplaced = secret_rest
            .iter()
            .zip(&guess_rest)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self { exact, misplaced }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}

/// Score `guess` against `secret` on a board with `pegs` pegs
///
/// # Errors
/// Returns `InvalidLength` unless both codes have exactly `pegs` colors.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{score, Code, GameColor::*, Score};
///
/// let secret = Code::from([Red, Green, Blue, Yellow]);
/// let guess = Code::from([Red, Blue, Green, Orange]);
/// assert_eq!(score(&secret, &guess, 4).unwrap(), Score::new(1, 2));
/// ```
pub fn score(secret: &Code, guess: &Code, pegs: usize) -> Result<Score> {
    for code in [secret, guess] {
        if code.len() != pegs {
            return Err(MastermindError::InvalidLength {
                expected: pegs,
                actual: code.len(),
            });
        }
    }
    Ok(Score::calculate(secret, guess))
}
