//! Wordle Widget
//!
//! A five-letter word-guessing game: five attempts, per-letter feedback, and a
//! terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_widget::game::{GameState, GuessGame, RngPicker};
//! use wordle_widget::wordlists::loader::builtin;
//!
//! let words = builtin().unwrap();
//! let mut game = GuessGame::new(&words, RngPicker::seeded(1));
//!
//! for ch in "smile".chars() {
//!     game.append_letter(ch);
//! }
//! let state = game.submit_guess();
//! assert!(matches!(state, Some(GameState::Playing | GameState::Won)));
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
