//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use super::{WORDS, WordList, WordListError};
use crate::core::Word;
use log::warn;
use std::fs;
use std::path::Path;

/// Load a word list from a file
///
/// One word per line. Blank lines and lines starting with `#` are ignored;
/// entries that are not five ASCII letters are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_widget::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("{}:{}: skipping '{trimmed}': {e}", path.display(), line_no + 1);
                    None
                }
            }
        });

    WordList::new(words)
}

/// Convert a string slice to a word list, skipping invalid entries
///
/// # Errors
///
/// Returns `WordListError::Empty` if no entry is a valid word.
///
/// # Examples
/// ```
/// use wordle_widget::wordlists::loader::words_from_slice;
///
/// let list = words_from_slice(&["about", "react", "nope"]).unwrap();
/// assert_eq!(list.len(), 2);
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<WordList, WordListError> {
    WordList::new(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

/// The word list compiled into the binary
///
/// # Errors
///
/// Returns `WordListError::Empty` only if the embedded data file was empty.
pub fn builtin() -> Result<WordList, WordListError> {
    words_from_slice(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let list = words_from_slice(&["smile", "dance", "music"]).unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0).unwrap().text(), "SMILE");
        assert_eq!(list.get(1).unwrap().text(), "DANCE");
        assert_eq!(list.get(2).unwrap().text(), "MUSIC");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let list = words_from_slice(&["smile", "toolong", "abc", "dance"]).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().text(), "SMILE");
        assert_eq!(list.get(1).unwrap().text(), "DANCE");
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(matches!(words_from_slice(&[]), Err(WordListError::Empty)));
        assert!(matches!(
            words_from_slice(&["abc", "12345"]),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn builtin_matches_embedded() {
        let list = builtin().unwrap();
        assert_eq!(list.len(), WORDS.len());
    }

    #[test]
    fn load_from_file_reads_and_filters() {
        let path = std::env::temp_dir().join(format!(
            "wordle_widget_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "# custom list").unwrap();
            writeln!(file, "brave").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  Swift  ").unwrap();
            writeln!(file, "grand!").unwrap();
        }

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().text(), "BRAVE");
        assert_eq!(list.get(1).unwrap().text(), "SWIFT");
    }

    #[test]
    fn load_from_missing_file() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
    }
}
