//! Per-letter feedback for a submitted guess
//!
//! Each letter of a guess is classified against the target word:
//! - `Exact`   = same letter at the same position
//! - `Present` = letter occurs somewhere in the target
//! - `Absent`  = neither
//!
//! `Present` is a plain containment check against the whole target word.
//! Repeated guess letters are not matched off against the target's letter
//! counts, so "OXOXO" against "ABOUT" marks all three O's as `Present`.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Right letter, right position
    Exact,
    /// Letter occurs elsewhere in the target
    Present,
    /// Letter does not occur in the target
    Absent,
}

impl LetterClass {
    /// Classify the letter at `index` of `guess` against `target`
    ///
    /// # Panics
    /// Panics if `index >= 5`
    #[must_use]
    pub fn of(guess: &Word, target: &Word, index: usize) -> Self {
        let letter = guess.chars()[index];
        if letter == target.chars()[index] {
            Self::Exact
        } else if target.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '🟥',
        }
    }
}

/// Feedback for a whole guess, one class per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterClass; WORD_LENGTH]);

impl Feedback {
    /// All letters in place
    pub const PERFECT: Self = Self([LetterClass::Exact; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is compared with `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_widget::core::{Feedback, LetterClass, Word};
    ///
    /// let guess = Word::new("oxoxo").unwrap();
    /// let target = Word::new("about").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.get(0), Some(LetterClass::Present));
    /// assert_eq!(feedback.get(2), Some(LetterClass::Exact));
    /// assert_eq!(feedback.get(4), Some(LetterClass::Present));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self(std::array::from_fn(|i| LetterClass::of(guess, target, i)))
    }

    /// Class at a position, or `None` past the end of the word
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<LetterClass> {
        self.0.get(index).copied()
    }

    /// All five classes in order
    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[LetterClass; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is an exact match
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count letters classified `Exact`
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterClass::Exact)
    }

    /// Count letters classified `Present`
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterClass::Present)
    }

    fn count(&self, class: LetterClass) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Convert feedback to an emoji string such as "🟩🟨🟥🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}
