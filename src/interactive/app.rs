//! TUI application state and logic

use crate::game::{GameInput, GameState, GuessGame, MAX_ATTEMPTS, WordPicker};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Picker type used by the TUI, chosen at runtime
pub type DynPicker = Box<dyn WordPicker>;

/// Application state
pub struct App<'a> {
    pub game: GuessGame<'a, DynPicker>,
    /// Game panel is open; keys only reach the game while it is
    pub expanded: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    recorded: bool,
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

/// Results across the games played this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is a first-guess win
    pub guess_distribution: [usize; MAX_ATTEMPTS],
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    /// Record a finished game
    pub fn record(&mut self, state: GameState, attempts: usize) {
        match state {
            GameState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = attempts
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            GameState::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            GameState::Playing => {}
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: GuessGame<'a, DynPicker>) -> Self {
        Self {
            game,
            expanded: true,
            messages: vec![
                Message {
                    text: "I never outgrew my Wordle phase; why not give it a shot?".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your guess and press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            recorded: false,
        }
    }

    /// Route a key press to the app or the game
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_expanded(),
            _ if !self.expanded => {}
            code if self.game.state().is_terminal() => match code {
                // "Play Again" / "Try Again"
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
                _ => {}
            },
            KeyCode::Char(c) => self.handle_input(GameInput::Letter(c)),
            KeyCode::Backspace => self.handle_input(GameInput::Delete),
            KeyCode::Enter => self.handle_input(GameInput::Submit),
            _ => {}
        }
    }

    /// Forward input to the game and react to the outcome
    pub fn handle_input(&mut self, input: GameInput) {
        if input == GameInput::Submit && !self.game.can_submit() {
            if self.game.state() == GameState::Playing {
                self.add_message("Not enough letters!", MessageStyle::Error);
            }
            return;
        }

        if !self.game.apply(input) || input != GameInput::Submit {
            return;
        }

        match self.game.state() {
            GameState::Won => {
                let celebration = match self.game.attempts_used() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    _ => "😅 PHEW! Got it on the last try! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Enter to play again or Esc to quit.", MessageStyle::Info);
            }
            GameState::Lost => {
                let text = format!("Game over! The word was {}", self.game.target());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press Enter to try again or Esc to quit.", MessageStyle::Info);
            }
            GameState::Playing => {
                let left = self.game.attempts_remaining();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "try" } else { "tries" }),
                    MessageStyle::Info,
                );
            }
        }
        self.record_if_finished();
    }

    fn record_if_finished(&mut self) {
        if self.game.state().is_terminal() && !self.recorded {
            self.stats.record(self.game.state(), self.game.attempts_used());
            self.recorded = true;
            debug!(
                "game finished: {} in {} ({} played)",
                self.game.state(),
                self.game.attempts_used(),
                self.stats.total_games
            );
        }
    }

    pub fn new_game(&mut self) {
        self.game.start_game();
        self.recorded = false;
        self.messages.clear();
        self.add_message("New game started! Type your first guess.", MessageStyle::Info);
    }

    /// Open or close the game panel
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
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
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
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
