//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{Board, Code, GameBoard, GameState, Score};
use crate::solver::Solver;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub board: GameBoard,
    pub solver: Option<Solver>,
    pub hint: Option<Code>,
    pub candidates_count: Option<usize>,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub score: Score,
    pub by_solver: bool,
    pub candidates_after: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub solver_games: usize,
    /// Wins indexed by number of guesses
    pub guess_distribution: Vec<usize>,
}

impl App {
    /// Start a session with a random secret
    ///
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut rng = config.rng();
        let board = GameBoard::random(&config, &mut rng)?;

        let mut app = Self {
            board,
            solver: None,
            hint: None,
            candidates_count: None,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; config.max_rows + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
            config,
            rng,
        };
        app.add_message(
            "Welcome! Type colors (prefixes work) and press Enter.",
            MessageStyle::Info,
        );
        app.reset_solver();
        Ok(app)
    }

    fn reset_solver(&mut self) {
        match Solver::for_board(&self.board) {
            Ok(solver) => {
                self.solver = Some(solver);
                self.refresh_hint();
            }
            Err(e) => {
                self.solver = None;
                self.hint = None;
                self.candidates_count = None;
                self.add_message(&format!("Hints unavailable: {e}"), MessageStyle::Info);
            }
        }
    }

    fn refresh_hint(&mut self) {
        let Some(solver) = &self.solver else {
            return;
        };
        self.candidates_count = Some(solver.candidate_count());
        match solver.next_guess() {
            Ok(guess) => self.hint = Some(guess),
            Err(e) => {
                self.hint = None;
                self.add_message(&format!("No hint: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Parse the input buffer and play it
    pub fn submit_input(&mut self) {
        let parsed = Code::parse(
            &self.input_buffer,
            self.board.peg_count(),
            self.board.color_alphabet(),
        );
        match parsed {
            Ok(guess) => {
                self.input_buffer.clear();
                self.play_guess(guess, false);
            }
            Err(e) => self.add_message(&format!("Invalid guess: {e}"), MessageStyle::Error),
        }
    }

    /// Copy the solver's suggestion into the input buffer
    pub fn fill_hint(&mut self) {
        match &self.hint {
            Some(hint) => self.input_buffer = hint.to_string(),
            None => self.add_message("No hint available", MessageStyle::Error),
        }
    }

    /// Let the solver play every remaining row
    pub fn auto_play(&mut self) {
        while self.input_mode == InputMode::Guessing {
            let Some(guess) = self.hint.clone() else {
                self.add_message("Solver cannot continue", MessageStyle::Error);
                return;
            };
            self.play_guess(guess, true);
        }
    }

    fn play_guess(&mut self, guess: Code, by_solver: bool) {
        let score = match self.board.submit_guess(&guess) {
            Ok(score) => score,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let state = self.board.state();
        if state == GameState::Playing
            && let Some(solver) = &mut self.solver
        {
            if let Err(e) = solver.observe(guess.clone(), score) {
                self.add_message(&format!("Solver lost track: {e}"), MessageStyle::Error);
                self.solver = None;
                self.hint = None;
                self.candidates_count = None;
            } else {
                self.refresh_hint();
            }
        }

        self.history.push(HistoryEntry {
            guess,
            score,
            by_solver,
            candidates_after: match state {
                GameState::Solved => Some(1),
                _ => self.candidates_count,
            },
        });

        if state.is_terminal() {
            self.finish_game(state);
        }
    }

    fn finish_game(&mut self, state: GameState) {
        let guesses = self.board.current_row();
        self.stats.total_games += 1;
        if self.history.iter().any(|entry| entry.by_solver) {
            self.stats.solver_games += 1;
        }
        self.input_mode = InputMode::GameOver;
        self.hint = None;

        if state == GameState::Solved {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
            let celebration = match guesses {
                1 => "🎯 First try! Extraordinary! 🌟",
                2..=4 => "🔥 Cracked it quickly! 🔥",
                5..=7 => "🎉 Code broken! 🎉",
                _ => "😅 Phew! Got it in the end! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message(
                &format!("Solved in {guesses} guesses. 'n' new game, 'q' quit."),
                MessageStyle::Info,
            );
        } else {
            self.add_message(
                &format!("Out of rows! The secret was {}", self.board.secret()),
                MessageStyle::Error,
            );
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match GameBoard::random(&self.config, &mut self.rng) {
            Ok(board) => self.board = board,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! A new secret was drawn.", MessageStyle::Info);
        self.reset_solver();
    }

    /// Apply one key press
    ///
    /// Command letters only act while the input is empty: no color name
    /// starts with `a`, `n` or `q`.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('q') if self.input_buffer.is_empty() => self.should_quit = true,
                KeyCode::Char('n') if self.input_buffer.is_empty() => self.new_game(),
                KeyCode::Char('a') if self.input_buffer.is_empty() => self.auto_play(),
                KeyCode::Tab => self.fill_hint(),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
