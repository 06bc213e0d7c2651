//! Formatting utilities for terminal output

use crate::core::{Code, FeedbackKind, GameColor, Score, minimum_unique_prefix_lengths};
use colored::{ColoredString, Colorize};

/// Glyph for a placed code peg
pub const CODE_PEG: &str = "⬤";
/// Glyph for an empty code hole
pub const EMPTY_PEG: &str = "◯";
/// Glyph for a placed key peg
pub const KEY_PEG: &str = "⯌";
/// Glyph for an empty key hole
pub const EMPTY_KEY: &str = "⯎";

/// A code peg in its own color, or an empty hole
#[must_use]
pub fn code_peg(color: Option<GameColor>) -> ColoredString {
    match color {
        Some(color) => {
            let (r, g, b) = color.rgb();
            CODE_PEG.truecolor(r, g, b)
        }
        None => EMPTY_PEG.bright_black(),
    }
}

/// A key peg: red for exact, white for misplaced
#[must_use]
pub fn key_peg(kind: FeedbackKind) -> ColoredString {
    match kind {
        FeedbackKind::Exact => KEY_PEG.red(),
        FeedbackKind::Misplaced => KEY_PEG.white(),
        FeedbackKind::None => EMPTY_KEY.bright_black(),
    }
}

/// Code pegs separated by spaces
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| code_peg(Some(c)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key pegs for a score, without separators
#[must_use]
pub fn format_score(score: Score, pegs: usize) -> String {
    score
        .key_pegs(pegs)
        .into_iter()
        .map(|kind| key_peg(kind).to_string())
        .collect()
}

/// Color names with their shortest unique prefix underlined
#[must_use]
pub fn color_legend(alphabet: &[GameColor]) -> String {
    let names: Vec<&str> = alphabet.iter().map(|c| c.name()).collect();
    let lengths = minimum_unique_prefix_lengths(&names);

    alphabet
        .iter()
        .zip(lengths)
        .map(|(color, len)| {
            let name = color.name();
            let (head, tail) = name.split_at(len.min(name.len()));
            let (r, g, b) = color.rgb();
            format!(
                "{}{}",
                head.truecolor(r, g, b).bold().underline(),
                tail.truecolor(r, g, b)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
