//! Interactive TUI interface
//!
//! A human plays against a hidden secret while the solver follows along
//! and offers hints.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, run_tui};
