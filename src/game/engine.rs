//! Word-guessing game engine

use super::board::{Board, Cell, CellKind};
use super::buffer::GuessBuffer;
use super::picker::WordPicker;
use super::state::{GameInput, GameState, MAX_ATTEMPTS};
use crate::core::{Feedback, LetterClass, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use log::{debug, trace};

/// A single player's guessing game
///
/// Draws a target from the word list, collects letters into a guess buffer,
/// and moves from `Playing` to `Won` or `Lost` as guesses are submitted.
///
/// Invalid input is never an error: appending to a full buffer, submitting an
/// incomplete guess, or typing after the game has ended simply does nothing.
pub struct GuessGame<'a, P: WordPicker> {
    words: &'a WordList,
    picker: P,
    target: Word,
    buffer: GuessBuffer,
    history: Vec<Word>,
    state: GameState,
}

impl<'a, P: WordPicker> GuessGame<'a, P> {
    /// Create a game over `words` and start the first round
    ///
    /// # Examples
    /// ```
    /// use wordle_widget::game::{FixedPicker, GameState, GuessGame};
    /// use wordle_widget::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["about", "react"]).unwrap();
    /// let mut game = GuessGame::new(&words, FixedPicker::always(1));
    /// assert_eq!(game.target().text(), "REACT");
    ///
    /// for ch in "react".chars() {
    ///     game.append_letter(ch);
    /// }
    /// assert_eq!(game.submit_guess(), Some(GameState::Won));
    /// ```
    pub fn new(words: &'a WordList, picker: P) -> Self {
        let mut game = Self {
            words,
            picker,
            target: words.as_slice()[0],
            buffer: GuessBuffer::new(),
            history: Vec::with_capacity(MAX_ATTEMPTS),
            state: GameState::Playing,
        };
        game.start_game();
        game
    }

    /// Begin a fresh round with a newly drawn target word
    ///
    /// Clears the buffer and history regardless of the current state.
    pub fn start_game(&mut self) {
        let len = self.words.len();
        let index = self.picker.pick(len) % len;
        self.target = self.words.as_slice()[index];
        self.buffer.clear();
        self.history.clear();
        self.state = GameState::Playing;
        debug!("new game started (target #{index} of {len})");
    }

    /// Type a letter into the current guess
    ///
    /// Case-insensitive. Returns whether the buffer changed.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.state != GameState::Playing {
            trace!("ignoring letter {ch:?}: game is {}", self.state);
            return false;
        }
        let accepted = self.buffer.push(ch);
        if !accepted {
            trace!("ignoring letter {ch:?}: buffer '{}'", self.buffer.as_str());
        }
        accepted
    }

    /// Remove the last typed letter
    ///
    /// Returns whether the buffer changed.
    pub fn delete_letter(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Submit the current guess
    ///
    /// Returns the resulting state if a guess was accepted, or `None` if the
    /// game is over or fewer than five letters are typed.
    pub fn submit_guess(&mut self) -> Option<GameState> {
        if self.state != GameState::Playing {
            trace!("ignoring submit: game is {}", self.state);
            return None;
        }
        let Some(guess) = self.buffer.to_word() else {
            trace!("ignoring submit: only {} letters", self.buffer.len());
            return None;
        };

        self.history.push(guess);
        self.buffer.clear();

        // A match wins even on the final attempt
        self.state = if guess == self.target {
            GameState::Won
        } else if self.history.len() >= MAX_ATTEMPTS {
            GameState::Lost
        } else {
            GameState::Playing
        };

        debug!(
            "guess {}/{MAX_ATTEMPTS} {guess} -> {}",
            self.history.len(),
            self.state
        );
        Some(self.state)
    }

    /// Forward one key-level input to the matching operation
    ///
    /// Returns whether anything changed.
    pub fn apply(&mut self, input: GameInput) -> bool {
        match input {
            GameInput::Letter(ch) => self.append_letter(ch),
            GameInput::Delete => self.delete_letter(),
            GameInput::Submit => self.submit_guess().is_some(),
        }
    }

    /// Classify one letter of a submitted guess
    ///
    /// Returns `None` if `guess_index` is not a submitted guess or
    /// `letter_index` is past the end of the word.
    #[must_use]
    pub fn classify_letter(&self, guess_index: usize, letter_index: usize) -> Option<LetterClass> {
        let guess = self.history.get(guess_index)?;
        (letter_index < WORD_LENGTH).then(|| LetterClass::of(guess, &self.target, letter_index))
    }

    /// Feedback for a whole submitted guess
    #[must_use]
    pub fn classify_row(&self, guess_index: usize) -> Option<Feedback> {
        self.history
            .get(guess_index)
            .map(|guess| Feedback::calculate(guess, &self.target))
    }

    /// Snapshot of the 5x5 grid as a view would draw it
    #[must_use]
    pub fn board(&self) -> Board {
        let mut board = Board::empty();

        for (row, guess) in self.history.iter().enumerate() {
            let feedback = Feedback::calculate(guess, &self.target);
            for (col, cell) in board.rows[row].iter_mut().enumerate() {
                *cell = Cell {
                    letter: guess.letter_at(col),
                    kind: feedback.get(col).map_or(CellKind::Empty, CellKind::Classified),
                };
            }
        }

        if self.state == GameState::Playing {
            let row = self.history.len();
            for (col, cell) in board.rows[row].iter_mut().enumerate() {
                if let Some(letter) = self.buffer.letter_at(col) {
                    *cell = Cell {
                        letter: Some(letter),
                        kind: CellKind::Pending,
                    };
                }
            }
            if !self.buffer.is_full() {
                board.cursor = Some((row, self.buffer.len()));
            }
        }

        board
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// The target, but only once the game is lost
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        (self.state == GameState::Lost).then_some(&self.target)
    }

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// True when `submit_guess` would be accepted
    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == GameState::Playing && self.buffer.is_full()
    }

    #[inline]
    #[must_use]
    pub const fn word_list(&self) -> &'a WordList {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FixedPicker;
    use crate::wordlists::loader::{builtin, words_from_slice};
    use proptest::prelude::*;

    fn word_list(words: &[&str]) -> WordList {
        words_from_slice(words).unwrap()
    }

    fn type_word<P: WordPicker>(game: &mut GuessGame<'_, P>, word: &str) {
        for ch in word.chars() {
            game.append_letter(ch);
        }
    }

    fn guess<P: WordPicker>(game: &mut GuessGame<'_, P>, word: &str) -> Option<GameState> {
        type_word(game, word);
        game.submit_guess()
    }

    #[test]
    fn start_game_resets_everything() {
        let words = word_list(&["about", "react", "world"]);
        let mut game = GuessGame::new(&words, FixedPicker::new([0, 2]));
        assert_eq!(game.target().text(), "ABOUT");

        guess(&mut game, "react");
        type_word(&mut game, "wor");
        game.start_game();

        assert_eq!(game.state(), GameState::Playing);
        assert!(game.buffer().is_empty());
        assert!(game.history().is_empty());
        assert_eq!(game.target().text(), "WORLD");
        assert!(words.contains(game.target()));
    }

    #[test]
    fn out_of_range_pick_wraps() {
        let words = word_list(&["about", "react"]);
        let game = GuessGame::new(&words, FixedPicker::always(5));
        assert_eq!(game.target().text(), "REACT");
    }

    #[test]
    fn append_is_case_insensitive() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        assert!(game.append_letter('a'));
        assert!(game.append_letter('B'));
        assert_eq!(game.buffer().as_str(), "AB");
    }

    #[test]
    fn delete_removes_one_letter() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        assert!(!game.delete_letter());
        type_word(&mut game, "abc");
        assert!(game.delete_letter());
        assert_eq!(game.buffer().as_str(), "AB");
    }

    #[test]
    fn exact_guess_wins_with_all_exact() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());

        assert_eq!(guess(&mut game, "about"), Some(GameState::Won));
        for i in 0..5 {
            assert_eq!(game.classify_letter(0, i), Some(LetterClass::Exact));
        }
        assert!(game.classify_row(0).unwrap().is_perfect());
        assert_eq!(game.revealed_target(), None);
    }

    #[test]
    fn win_on_final_attempt() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());

        for _ in 0..4 {
            assert_eq!(guess(&mut game, "pixel"), Some(GameState::Playing));
        }
        assert_eq!(guess(&mut game, "about"), Some(GameState::Won));
        assert_eq!(game.attempts_used(), 5);
    }

    #[test]
    fn five_misses_lose_and_not_before() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());

        for attempt in 1..5 {
            assert_eq!(guess(&mut game, "cyber"), Some(GameState::Playing));
            assert_eq!(game.attempts_remaining(), 5 - attempt);
        }
        assert_eq!(guess(&mut game, "ultra"), Some(GameState::Lost));
        assert_eq!(game.revealed_target().map(Word::text), Some("ABOUT"));
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn guesses_need_not_be_in_word_list() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        assert_eq!(guess(&mut game, "zzzzz"), Some(GameState::Playing));
        assert_eq!(game.history()[0].text(), "ZZZZZ");
    }

    #[test]
    fn incomplete_submit_is_noop() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        type_word(&mut game, "abou");

        assert!(!game.can_submit());
        assert_eq!(game.submit_guess(), None);
        assert_eq!(game.buffer().as_str(), "ABOU");
        assert!(game.history().is_empty());
    }

    #[test]
    fn terminal_state_ignores_input() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        guess(&mut game, "about");

        assert!(!game.append_letter('a'));
        assert!(!game.delete_letter());
        assert_eq!(game.submit_guess(), None);
        assert!(game.buffer().is_empty());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.state(), GameState::Won);

        game.start_game();
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.append_letter('a'));
    }

    #[test]
    fn classify_uses_plain_containment() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        guess(&mut game, "oxoxo");

        assert_eq!(game.classify_letter(0, 0), Some(LetterClass::Present));
        assert_eq!(game.classify_letter(0, 1), Some(LetterClass::Absent));
        assert_eq!(game.classify_letter(0, 2), Some(LetterClass::Exact));
        assert_eq!(game.classify_letter(0, 3), Some(LetterClass::Absent));
        assert_eq!(game.classify_letter(0, 4), Some(LetterClass::Present));
    }

    #[test]
    fn classify_out_of_range() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        assert_eq!(game.classify_letter(0, 0), None);
        assert_eq!(game.classify_row(0), None);

        guess(&mut game, "round");
        assert_eq!(game.classify_letter(0, 5), None);
        assert_eq!(game.classify_letter(1, 0), None);
    }

    #[test]
    fn apply_dispatches_inputs() {
        let words = word_list(&["smile"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());

        assert!(!game.apply(GameInput::Letter('7')));
        for ch in "smilx".chars() {
            assert!(game.apply(GameInput::Letter(ch)));
        }
        assert!(game.apply(GameInput::Delete));
        assert!(!game.apply(GameInput::Submit));
        assert!(game.apply(GameInput::Letter('e')));
        assert!(game.apply(GameInput::Submit));
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn board_shows_history_pending_and_cursor() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        guess(&mut game, "round");
        type_word(&mut game, "ab");

        let board = game.board();
        let first = board.cell(0, 1).unwrap();
        assert_eq!(first.letter, Some('O'));
        assert_eq!(first.kind, CellKind::Classified(LetterClass::Present));

        let typed = board.cell(1, 1).unwrap();
        assert_eq!(typed.letter, Some('B'));
        assert_eq!(typed.kind, CellKind::Pending);

        assert_eq!(board.cell(1, 2).unwrap().kind, CellKind::Empty);
        assert_eq!(board.cell(4, 0).unwrap().letter, None);
        assert_eq!(board.cursor(), Some((1, 2)));
        assert!(board.cell(5, 0).is_none());
    }

    #[test]
    fn board_has_no_cursor_when_full_or_over() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        type_word(&mut game, "about");
        assert_eq!(game.board().cursor(), None);

        game.submit_guess();
        let board = game.board();
        assert_eq!(board.cursor(), None);
        assert_eq!(board.cell(1, 0).unwrap().kind, CellKind::Empty);
    }

    #[test]
    fn board_after_loss_fills_every_row() {
        let words = word_list(&["about"]);
        let mut game = GuessGame::new(&words, FixedPicker::default());
        for _ in 0..5 {
            guess(&mut game, "magic");
        }
        let board = game.board();
        assert!(board.rows().iter().flatten().all(|c| c.letter.is_some()));
        assert_eq!(board.cursor(), None);
    }

    #[test]
    fn builtin_targets_come_from_list() {
        let words = builtin().unwrap();
        let mut game = GuessGame::new(&words, crate::game::RngPicker::seeded(7));
        for _ in 0..50 {
            game.start_game();
            assert!(game.word_list().contains(game.target()));
        }
    }

    fn input_strategy() -> impl Strategy<Value = GameInput> {
        prop_oneof![
            6 => any::<char>().prop_map(GameInput::Letter),
            2 => Just(GameInput::Delete),
            2 => Just(GameInput::Submit),
        ]
    }

    proptest! {
        #[test]
        fn non_letters_never_change_buffer(
            prefix in "[a-zA-Z]{0,4}",
            ch in any::<char>().prop_filter("non-letter", |c| !c.is_ascii_alphabetic()),
        ) {
            let words = word_list(&["about"]);
            let mut game = GuessGame::new(&words, FixedPicker::default());
            type_word(&mut game, &prefix);
            let before = *game.buffer();

            prop_assert!(!game.append_letter(ch));
            prop_assert_eq!(*game.buffer(), before);
        }

        #[test]
        fn invariants_hold_for_any_input(inputs in prop::collection::vec(input_strategy(), 0..80)) {
            let words = word_list(&["about", "peace", "light"]);
            let mut game = GuessGame::new(&words, FixedPicker::new([1]));

            for input in inputs {
                let state_before = game.state();
                let buffer_before = *game.buffer();
                let history_before = game.history().len();

                game.apply(input);

                prop_assert!(game.buffer().len() <= 5);
                prop_assert!(game.history().len() <= MAX_ATTEMPTS);

                if state_before.is_terminal() {
                    prop_assert_eq!(game.state(), state_before);
                    prop_assert_eq!(*game.buffer(), buffer_before);
                    prop_assert_eq!(game.history().len(), history_before);
                }
                if input == GameInput::Submit && buffer_before.len() != 5 {
                    prop_assert_eq!(game.history().len(), history_before);
                    prop_assert_eq!(*game.buffer(), buffer_before);
                }
                if game.state() == GameState::Lost {
                    prop_assert_eq!(game.history().len(), MAX_ATTEMPTS);
                }
                if game.state() == GameState::Won {
                    prop_assert_eq!(game.history().last(), Some(game.target()));
                }
            }
        }
    }
}
