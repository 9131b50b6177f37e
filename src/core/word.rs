//! Five-letter word representation
//!
//! A Word stores exactly five uppercase ASCII letters. Every guess and every
//! target word in the game is a `Word`.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalised to uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the stored word is uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_widget::core::Word;
    ///
    /// let word = Word::new("about").unwrap();
    /// assert_eq!(word.text(), "ABOUT");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("ab0ut").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            chars: chars.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Build a word from letters already known to be uppercase ASCII
    pub(crate) const fn from_upper(chars: [u8; WORD_LENGTH]) -> Self {
        Self { chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// Returns `None` if position >= 5
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).map(|&b| char::from(b))
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("ABOUT").unwrap();
        assert_eq!(word.text(), "ABOUT");
        assert_eq!(word.chars(), b"ABOUT");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("about").unwrap();
        assert_eq!(word.text(), "ABOUT");

        let word2 = Word::new("AbOuT").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("abou7"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("abou "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("abou!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("abouté"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("pixel").unwrap();
        assert_eq!(word.letter_at(0), Some('P'));
        assert_eq!(word.letter_at(4), Some('L'));
        assert_eq!(word.letter_at(5), None);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("about").unwrap();
        assert!(word.has_letter(b'O'));
        assert!(!word.has_letter(b'o'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "cyber".parse().unwrap();
        assert_eq!(format!("{word}"), "CYBER");
    }
}
