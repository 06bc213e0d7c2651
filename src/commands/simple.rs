//! Simple interactive CLI mode
//!
//! Text-based Mastermind game without TUI: the human guesses a random secret.

use crate::config::GameConfig;
use crate::core::{Board, Code, GameBoard, GameState};
use crate::output::board::render_board;
use crate::output::formatters::{color_legend, format_code, format_score};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a single text-mode game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Solved after this many guesses
    Won(usize),
    Lost,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if the configuration is invalid.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut rng = config.rng();

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Mastermind - Interactive Mode                ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;

    loop {
        let mut board = GameBoard::random(config, &mut rng)?;
        if play_game(&mut board, &mut input, &mut output)? == GameOutcome::Quit {
            break;
        }

        match prompt(&mut input, &mut output, "Play again? (yes/no)")?
            .map(|answer| answer.to_lowercase())
            .as_deref()
        {
            Some("yes" | "y") => writeln!(output, "\n🔄 New game started!\n")?,
            _ => break,
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Play one game on `board`, reading guesses line by line
///
/// `q`, `quit` or end of input abandon the game. Lines that do not parse
/// are reported and do not use up a row.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead, W: Write>(
    board: &mut GameBoard,
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome> {
    let pegs = board.peg_count();
    let alphabet = board.color_alphabet().to_vec();

    writeln!(
        output,
        "Guess the {pegs}-color secret in {} rows. Colors: {}",
        board.max_rows(),
        color_legend(&alphabet)
    )?;
    writeln!(output, "Type colors separated by spaces (prefixes work), 'q' to quit.\n")?;

    while board.state() == GameState::Playing {
        let turn = board.current_row() + 1;
        let Some(line) = prompt(input, output, &format!("Guess {turn}"))? else {
            return Ok(GameOutcome::Quit);
        };
        if matches!(line.to_lowercase().as_str(), "q" | "quit" | "exit") {
            return Ok(GameOutcome::Quit);
        }

        let guess = match Code::parse(&line, pegs, &alphabet) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(output, "❌ {e}\n")?;
                continue;
            }
        };

        let score = board.submit_guess(&guess)?;
        writeln!(output, "   {}  {}", format_code(&guess), format_score(score, pegs))?;
    }

    writeln!(output)?;
    for line in render_board(board.rows(), board.max_rows(), pegs, Some(board.secret())) {
        writeln!(output, "{line}")?;
    }

    let turns = board.current_row();
    if board.state() == GameState::Solved {
        writeln!(
            output,
            "\n{}",
            format!(
                "🎉 Solved in {turns} {}!",
                if turns == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        )?;
        Ok(GameOutcome::Won(turns))
    } else {
        writeln!(
            output,
            "\n{} The secret was {}",
            format!("❌ Out of rows after {turns} guesses.").red().bold(),
            board.secret()
        )?;
        Ok(GameOutcome::Lost)
    }
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameColor::{Blue, Green, Red, Yellow};
    use std::io::Cursor;

    fn board(max_rows: usize) -> GameBoard {
        let config = GameConfig {
            max_rows,
            ..GameConfig::default()
        };
        GameBoard::with_secret(&config, Code::from([Red, Green, Blue, Yellow])).unwrap()
    }

    fn play(board: &mut GameBoard, lines: &str) -> (GameOutcome, String) {
        let mut input = Cursor::new(lines.to_string());
        let mut output = Vec::new();
        let outcome = play_game(board, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game_reports_turns() {
        let mut board = board(12);
        let (outcome, _) = play(&mut board, "b b b b\nred green blue yellow\n");

        assert_eq!(outcome, GameOutcome::Won(2));
        assert_eq!(board.state(), GameState::Solved);
    }

    #[test]
    fn invalid_input_does_not_use_a_row() {
        let mut board = board(12);
        let (outcome, text) = play(&mut board, "purple red red red\nr r\nr g b y\n");

        assert_eq!(outcome, GameOutcome::Won(1));
        assert!(text.contains("unknown color"));
        assert!(text.contains("expected 4 colors, got 2"));
    }

    #[test]
    fn running_out_of_rows_loses() {
        let mut board = board(2);
        let (outcome, text) = play(&mut board, "y y y y\nb b b b\n");

        assert_eq!(outcome, GameOutcome::Lost);
        assert!(text.contains("red green blue yellow"));
    }

    #[test]
    fn quit_and_end_of_input_abandon() {
        let mut board = board(12);
        assert_eq!(play(&mut board, "q\n").0, GameOutcome::Quit);
        assert_eq!(play(&mut board, "").0, GameOutcome::Quit);
    }
}
