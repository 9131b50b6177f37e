//! One-shot classification command
//!
//! Shows the feedback a guess would receive against a chosen target.

use crate::core::{Feedback, Word, WordError};

/// Result of classifying a guess
pub struct ClassifyResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Classify `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not exactly five ASCII letters.
pub fn classify(guess: &str, target: &str) -> Result<ClassifyResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    Ok(ClassifyResult {
        guess,
        target,
        feedback: Feedback::calculate(&guess, &target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClass;

    #[test]
    fn classify_valid_pair() {
        let result = classify("oxoxo", "about").unwrap();
        assert_eq!(result.guess.text(), "OXOXO");
        assert_eq!(result.target.text(), "ABOUT");
        assert_eq!(result.feedback.get(0), Some(LetterClass::Present));
        assert_eq!(result.feedback.get(2), Some(LetterClass::Exact));
    }

    #[test]
    fn classify_invalid_guess() {
        assert_eq!(
            classify("oxo", "about").err(),
            Some(WordError::InvalidLength(3))
        );
    }

    #[test]
    fn classify_invalid_target() {
        assert_eq!(
            classify("about", "ab0ut").err(),
            Some(WordError::InvalidCharacters)
        );
    }
}
