//! Word-guessing game engine
//!
//! `GuessGame` owns one round at a time: target selection, the guess buffer,
//! submitted guesses and the win/loss outcome. Views read it through queries
//! and forward player input to its mutators.

mod board;
mod buffer;
mod engine;
pub mod picker;
mod state;

pub use board::{Board, Cell, CellKind};
pub use buffer::GuessBuffer;
pub use engine::GuessGame;
pub use picker::{FixedPicker, RngPicker, WordPicker};
pub use state::{GameInput, GameState, MAX_ATTEMPTS};
