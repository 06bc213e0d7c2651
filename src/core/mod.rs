//! Core domain types for Mastermind
//!
//! Colors, codes, scoring, and the board. Everything here is deterministic
//! apart from the secret draw, which takes an injected random generator.

mod board;
mod color;
mod feedback;

pub use board::{Board, GameBoard, GameState, Row};
pub use color::{Code, GameColor, minimum_unique_prefix_lengths, parse_color};
pub use feedback::{FeedbackKind, Score, score};
