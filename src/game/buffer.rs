//! In-progress guess

use crate::core::{WORD_LENGTH, Word};

/// The letters typed for the guess being composed
///
/// Holds 0-5 uppercase ASCII letters and only ever changes by one letter at
/// a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessBuffer {
    letters: [u8; WORD_LENGTH],
    len: usize,
}

impl GuessBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [0; WORD_LENGTH],
            len: 0,
        }
    }

    /// Append an ASCII letter, uppercased
    ///
    /// Returns false (and leaves the buffer untouched) if the buffer is full
    /// or `ch` is not an ASCII letter.
    pub fn push(&mut self, ch: char) -> bool {
        if self.is_full() || !ch.is_ascii_alphabetic() {
            return false;
        }
        // ASCII letters fit in one byte
        self.letters[self.len] = ch.to_ascii_uppercase() as u8;
        self.len += 1;
        true
    }

    /// Remove the last letter, if any
    pub fn pop(&mut self) -> Option<char> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(char::from(self.letters[self.len]))
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == WORD_LENGTH
    }

    /// Letters typed so far
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters[..self.len]).unwrap_or_default()
    }

    /// Letter at a position, if typed
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters[..self.len]
            .get(position)
            .map(|&b| char::from(b))
    }

    /// The complete guess, once all five letters are typed
    #[must_use]
    pub const fn to_word(&self) -> Option<Word> {
        if self.is_full() {
            Some(Word::from_upper(self.letters))
        } else {
            None
        }
    }
}
