//! Interactive TUI interface
//!
//! Full-screen terminal front end for the guessing game.

pub mod app;
pub mod rendering;

pub use app::{App, DynPicker, Statistics, run_tui};
