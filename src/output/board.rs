//! Framed board printer
//!
//! ```text
//!    ┏━━━━━━━━━━━━━━━━┓
//!  1 ┃ ⬤ ⬤ ⬤ ⬤ │ ⯌⯌⯎⯎ ┃
//!  2 ┃ ◯ ◯ ◯ ◯ │ ⯎⯎⯎⯎ ┃
//!    ┗━━━━━━━━━━━━━━━━┛
//! ```

use super::formatters::{code_peg, format_code, format_score};
use crate::core::{Code, Row, Score};

/// Visible width between the frame bars
const fn inner_width(pegs: usize) -> usize {
    // " " + pegs with separators + " │ " + key pegs + " "
    1 + (2 * pegs).saturating_sub(1) + 3 + pegs + 1
}

/// Render every row of the board, played or not
///
/// When `secret` is given it is shown under a divider at the bottom.
#[must_use]
pub fn render_board(rows: &[Row], max_rows: usize, pegs: usize, secret: Option<&Code>) -> Vec<String> {
    let bar = "━".repeat(inner_width(pegs));
    let mut lines = Vec::with_capacity(max_rows + 4);

    lines.push(format!("   ┏{bar}┓"));
    for index in 0..max_rows {
        let (pegs_text, keys_text) = match rows.get(index) {
            Some(row) => (format_code(&row.guess), format_score(row.score, pegs)),
            None => (empty_code(pegs), format_score(Score::default(), pegs)),
        };
        lines.push(format!("{:>2} ┃ {pegs_text} │ {keys_text} ┃", index + 1));
    }

    if let Some(secret) = secret {
        let pad = " ".repeat(pegs + 3);
        lines.push(format!("   ┣{bar}┫"));
        lines.push(format!("   ┃ {}{pad} ┃", format_code(secret)));
    }
    lines.push(format!("   ┗{bar}┛"));

    lines
}

/// Print the board to stdout
pub fn print_board(rows: &[Row], max_rows: usize, pegs: usize, secret: Option<&Code>) {
    for line in render_board(rows, max_rows, pegs, secret) {
        println!("{line}");
    }
}

fn empty_code(pegs: usize) -> String {
    (0..pegs)
        .map(|_| code_peg(None).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
