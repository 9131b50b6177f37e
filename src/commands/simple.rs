//! Simple line-mode game
//!
//! Text-based game loop without TUI

use crate::core::WORD_LENGTH;
use crate::game::{GameState, GuessGame, MAX_ATTEMPTS, WordPicker};
use crate::output::formatters::feedback_row;
use crate::output::print_game_over;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What a line of player input did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    NewGame,
    Guessed(GameState),
    Invalid(String),
}

/// Apply one line of input to the game
///
/// A five-letter line is typed into the guess buffer letter by letter and
/// submitted. `:new` and `:quit` are commands.
pub fn handle_line<P: WordPicker>(game: &mut GuessGame<'_, P>, line: &str) -> LineOutcome {
    let input = line.trim();

    match input.to_ascii_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => return LineOutcome::Quit,
        ":new" | ":n" => {
            game.start_game();
            return LineOutcome::NewGame;
        }
        _ => {}
    }

    if game.state().is_terminal() {
        return LineOutcome::Invalid("Game is over, type :new to play again".to_string());
    }
    if input.chars().count() != WORD_LENGTH {
        return LineOutcome::Invalid(format!("Guess must be exactly {WORD_LENGTH} letters"));
    }
    if !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return LineOutcome::Invalid("Guess may only contain letters A-Z".to_string());
    }

    while game.delete_letter() {}
    for ch in input.chars() {
        game.append_letter(ch);
    }

    match game.submit_guess() {
        Some(state) => LineOutcome::Guessed(state),
        None => LineOutcome::Invalid("Guess was not accepted".to_string()),
    }
}

/// Run the simple line-mode game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading player input.
pub fn run_simple<P: WordPicker>(game: &mut GuessGame<'_, P>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║           Word Guessing Game - Line Mode           ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries.");
    println!(
        "  {} right letter, right spot   {} in the word   {} not in the word",
        " A ".black().on_green(),
        " A ".black().on_yellow(),
        " A ".white().on_red()
    );
    println!("Commands: ':new' for a new game, ':quit' to exit\n");

    loop {
        let prompt = format!("Turn {}/{MAX_ATTEMPTS}", game.attempts_used() + 1);
        let Some(line) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match handle_line(game, &line) {
            LineOutcome::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineOutcome::NewGame => println!("\n🔄 New game started!\n"),
            LineOutcome::Invalid(reason) => println!("❌ {reason}\n"),
            LineOutcome::Guessed(state) => {
                let index = game.attempts_used() - 1;
                if let (Some(guess), Some(feedback)) =
                    (game.history().get(index), game.classify_row(index))
                {
                    println!("   {}\n", feedback_row(guess, &feedback));
                }

                if state.is_terminal() {
                    print_game_over(game);

                    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                    if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                        game.start_game();
                        println!("\n🔄 New game started!\n");
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
