//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no game state.
//! All types here are pure and testable.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterClass};
pub use word::{WORD_LENGTH, Word, WordError};
