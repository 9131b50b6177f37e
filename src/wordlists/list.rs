//! Validated, immutable list of target words

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for word list construction
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list contains no valid 5-letter words")]
    Empty,
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A non-empty set of valid target words
///
/// Words keep their original order with duplicates removed. The list never
/// changes after construction.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a word list from already validated words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` yields nothing.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| index.insert(*w)).collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if in range
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Iterate in list order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// The words as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
