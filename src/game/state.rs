//! Game state and player input

use std::fmt;

/// Maximum number of submitted guesses per game
pub const MAX_ATTEMPTS: usize = 5;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// `Won` and `Lost` accept no further input until a new game starts
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "Playing",
            Self::Won => "Won",
            Self::Lost => "Lost",
        })
    }
}

/// A single key-level action from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Type a letter (non-letters are ignored)
    Letter(char),
    /// Backspace
    Delete,
    /// Enter
    Submit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!GameState::Playing.is_terminal());
        assert!(GameState::Won.is_terminal());
        assert!(GameState::Lost.is_terminal());
        assert_eq!(GameState::default(), GameState::Playing);
    }

    #[test]
    fn display() {
        assert_eq!(GameState::Lost.to_string(), "Lost");
    }
}
