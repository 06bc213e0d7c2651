//! TUI rendering with ratatui
//!
//! Visualizations for the Mastermind board and solver hints.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, FeedbackKind, GameColor, GameState, Score};
use crate::output::formatters::{CODE_PEG, EMPTY_KEY, EMPTY_PEG, KEY_PEG};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn peg_color(color: GameColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

fn code_spans(code: Option<&Code>, pegs: usize) -> Vec<Span<'static>> {
    (0..pegs)
        .flat_map(|position| {
            let peg = match code {
                Some(code) => Span::styled(
                    CODE_PEG,
                    Style::default().fg(peg_color(code.color_at(position))),
                ),
                None => Span::styled(EMPTY_PEG, Style::default().fg(Color::DarkGray)),
            };
            [peg, Span::raw(" ")]
        })
        .collect()
}

fn key_spans(score: Score, pegs: usize) -> Vec<Span<'static>> {
    score
        .key_pegs(pegs)
        .into_iter()
        .map(|kind| match kind {
            FeedbackKind::Exact => Span::styled(KEY_PEG, Style::default().fg(Color::Red)),
            FeedbackKind::Misplaced => Span::styled(KEY_PEG, Style::default().fg(Color::White)),
            FeedbackKind::None => Span::styled(EMPTY_KEY, Style::default().fg(Color::DarkGray)),
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let pegs = app.config.pegs;
    let rows = app.board.rows();

    let mut lines: Vec<Line> = (0..app.board.max_rows())
        .map(|index| {
            let row = rows.get(index);
            let marker = if index == rows.len() && app.input_mode == InputMode::Guessing {
                "▶"
            } else {
                " "
            };

            let mut spans = vec![Span::raw(format!("{marker}{:>2} ", index + 1))];
            spans.extend(code_spans(row.map(|r| &r.guess), pegs));
            spans.push(Span::raw("│ "));
            spans.extend(key_spans(row.map_or_else(Score::default, |r| r.score), pegs));
            Line::from(spans)
        })
        .collect();

    if app.input_mode == InputMode::GameOver {
        let mut spans = vec![Span::styled(" ?? ", Style::default().fg(Color::Yellow))];
        spans.extend(code_spans(Some(app.board.secret()), pegs));
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Thick),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Hint
            Constraint::Length(3), // Search space gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_search_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.hint, app.input_mode) {
        (_, InputMode::GameOver) => vec![Line::from("Game over")],
        (Some(hint), InputMode::Guessing) => {
            let mut spans = vec![Span::raw("Suggested: ")];
            spans.extend(code_spans(Some(hint), app.config.pegs));
            vec![
                Line::from(spans),
                Line::from(Span::styled(
                    hint.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(
                    "Possibilities tracked: {}",
                    app.solver
                        .as_ref()
                        .map_or(0, |solver| solver.possibilities().len())
                )),
            ]
        }
        (None, InputMode::Guessing) => vec![Line::from("No suggestion available")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Solver Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.config.code_space().max(1);
    let (percent, label) = match app.candidates_count {
        Some(remaining) => {
            let eliminated = total.saturating_sub(remaining);
            (
                (eliminated * 100 / total) as u16,
                format!("{remaining}/{total} secrets remain"),
            )
        }
        None => (0, "no solver for this board".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.input_mode, app.board.state()) {
        (InputMode::GameOver, GameState::Solved) => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " Out of rows | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            " Enter Guess (color names or prefixes) | TAB for hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let row_text = format!(
        "Row: {}/{}",
        app.board.current_row(),
        app.board.max_rows()
    );
    f.render_widget(Paragraph::new(row_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let candidates_text = app
        .candidates_count
        .map_or_else(|| "Candidates: -".to_string(), |n| format!("Candidates: {n}"));
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Enter: Submit | TAB: Hint | a: Auto | n: New | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
