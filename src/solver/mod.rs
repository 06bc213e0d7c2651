//! Mastermind solving algorithms
//!
//! Feedback is turned into possibilities by the enumerator, intersected
//! with what is already known by the merger, and the selector picks the next
//! guess from the result. [`Solver`] ties the steps into a solve loop.

pub mod combinatorics;
mod engine;
pub mod enumerator;
pub mod merger;
pub mod possibility;
pub mod selector;

pub use engine::Solver;
pub use enumerator::enumerate;
pub use merger::merge;
pub use possibility::{ColorSet, Possibility, PossibilitySet};
