//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterClass, Word};
use crate::game::GuessBuffer;
use colored::{ColoredString, Colorize};

/// One letter drawn as a coloured tile
#[must_use]
pub fn letter_tile(letter: char, class: LetterClass) -> ColoredString {
    let text = format!(" {letter} ");
    match class {
        LetterClass::Exact => text.black().on_green().bold(),
        LetterClass::Present => text.black().on_yellow().bold(),
        LetterClass::Absent => text.white().on_red(),
    }
}

/// A submitted guess as a row of coloured tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.classes())
        .map(|(letter, &class)| letter_tile(letter, class).to_string())
        .collect()
}

/// The guess being typed, padded with underscores
#[must_use]
pub fn pending_row(buffer: &GuessBuffer) -> String {
    (0..5)
        .map(|i| match buffer.letter_at(i) {
            Some(letter) => format!(" {letter} ").bright_white().bold().to_string(),
            None => " _ ".bright_black().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
