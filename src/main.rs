//! Wordle Widget - CLI
//!
//! Five-letter word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use wordle_widget::{
    commands::{classify, run_simple},
    game::{GuessGame, RngPicker},
    interactive::{App, DynPicker, run_tui},
    output::{print_classification, print_word_list},
    wordlists::{
        WordList,
        loader::{builtin, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_widget",
    about = "Guess the five-letter word in five tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, 24 words) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for target word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show the feedback a guess gets against a target word
    Classify {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// List the words targets are drawn from
    Words,
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "builtin" => builtin().context("embedded word list is empty"),
        path => load_from_file(path).with_context(|| format!("failed to load word list '{path}'")),
    }
}

/// Target picker: reproducible with --seed, thread-random otherwise
fn make_picker(seed: Option<u64>) -> DynPicker {
    match seed {
        Some(seed) => {
            info!("using seeded target selection ({seed})");
            Box::new(RngPicker::seeded(seed))
        }
        None => Box::new(RngPicker::thread()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    info!("loaded {} words from '{}'", words.len(), cli.wordlist);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let game = GuessGame::new(&words, make_picker(cli.seed));
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let mut game = GuessGame::new(&words, make_picker(cli.seed));
            run_simple(&mut game)
        }
        Commands::Classify { guess, target } => {
            let result = classify(&guess, &target).context("invalid word")?;
            print_classification(&result.guess, &result.target, &result.feedback);
            Ok(())
        }
        Commands::Words => {
            print_word_list(&words);
            Ok(())
        }
    }
}
