//! Word lists for the guessing game
//!
//! Provides the embedded default list compiled into the binary and the
//! validated `WordList` type the game draws targets from.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::{WordList, WordListError};
