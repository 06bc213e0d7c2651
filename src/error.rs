//! Error types for the Mastermind engine

use thiserror::Error;

/// Errors raised by scoring, boards, and the solver
///
/// Losing a game is not an error: it is reported as
/// [`GameState::Exhausted`](crate::core::GameState::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MastermindError {
    /// A code did not have the board's peg count
    #[error("expected {expected} colors, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The solver only supports the standard board
    #[error("solver supports only 4 pegs and 6 colors, got {pegs} pegs and {colors} colors")]
    UnsupportedConfiguration { pegs: usize, colors: usize },

    /// Game configuration that no board can represent
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A guess was submitted after the game ended
    #[error("the game is already over")]
    GameOver,

    /// Color name that matches nothing in the alphabet
    #[error("unknown color: '{0}'")]
    UnknownColor(String),

    /// Color prefix that matches more than one alphabet entry
    #[error("ambiguous color: '{0}'")]
    AmbiguousColor(String),

    /// Solver state contradicts itself (should not occur with honest feedback)
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, MastermindError>;
