//! Read-only grid snapshot for renderers

use super::state::MAX_ATTEMPTS;
use crate::core::{LetterClass, WORD_LENGTH};

/// What a grid cell currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// Row not reached yet, or unused position in the active row
    #[default]
    Empty,
    /// Letter typed in the active row, not yet submitted
    Pending,
    /// Letter of a submitted guess
    Classified(LetterClass),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub kind: CellKind,
}

/// Five rows of five cells plus the typing cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(super) rows: [[Cell; WORD_LENGTH]; MAX_ATTEMPTS],
    pub(super) cursor: Option<(usize, usize)>,
}

impl Board {
    pub(super) fn empty() -> Self {
        Self {
            rows: [[Cell::default(); WORD_LENGTH]; MAX_ATTEMPTS],
            cursor: None,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> &[[Cell; WORD_LENGTH]; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Cell at `(row, col)`, if in range
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// `(row, col)` where the next letter will land
    ///
    /// `None` once the game is over or the active row is full.
    #[must_use]
    pub const fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }
}
