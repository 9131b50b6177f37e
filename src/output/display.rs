//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_row};
use crate::core::{Feedback, Word};
use crate::game::{GameState, GuessGame, MAX_ATTEMPTS, WordPicker};
use crate::wordlists::WordList;
use colored::Colorize;

/// Print the classification of one guess against one target
pub fn print_classification(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}   {}", feedback_row(guess, feedback), feedback.to_emoji());
    println!(
        "\n  Exact: {}  Present: {}  Absent: {}",
        feedback.count_exact().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold(),
        (5 - feedback.count_exact() - feedback.count_present())
            .to_string()
            .red()
    );
    if feedback.is_perfect() {
        println!("\n{}", "✅ Perfect match!".green().bold());
    }
}

/// Print every submitted guess of a game with its feedback
pub fn print_history<P: WordPicker>(game: &GuessGame<'_, P>) {
    for (i, guess) in game.history().iter().enumerate() {
        if let Some(feedback) = game.classify_row(i) {
            println!(
                "  {}. {}   {}",
                (i + 1).to_string().bright_black(),
                feedback_row(guess, &feedback),
                feedback.to_emoji()
            );
        }
    }
}

/// Print the win or loss banner for a finished game
pub fn print_game_over<P: WordPicker>(game: &GuessGame<'_, P>) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match game.state() {
        GameState::Won => {
            println!("{}", "    🎉  Y O U   W O N !  🎉".bright_green().bold());
            println!(
                "\n  Solved in {} {}",
                game.attempts_used().to_string().bright_cyan().bold(),
                if game.attempts_used() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            );
        }
        GameState::Lost => {
            println!("{}", "    💀  G A M E   O V E R  💀".bright_red().bold());
            if let Some(target) = game.revealed_target() {
                println!(
                    "\n  Word was: {}",
                    target.text().bright_cyan().bold()
                );
            }
        }
        GameState::Playing => {}
    }
    println!(
        "  Attempts: [{}] {}/{MAX_ATTEMPTS}",
        create_progress_bar(game.attempts_used(), MAX_ATTEMPTS, 10),
        game.attempts_used()
    );
    println!("\n  Guess history:");
    print_history(game);
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the active word list in columns
pub fn print_word_list(words: &WordList) {
    println!(
        "\n{} {}",
        "WORD LIST:".bright_cyan().bold(),
        format!("{} words", words.len()).bright_yellow()
    );
    for chunk in words.as_slice().chunks(8) {
        let line: Vec<&str> = chunk.iter().map(Word::text).collect();
        println!("  {}", line.join("  "));
    }
}
