//! Hebrew Wordle - CLI
//!
//! Three-letter Hebrew Wordle with TUI and line-oriented modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use hebrew_wordle::{
    commands::{check_word, evaluate_words, run_simple},
    dictionary::Dictionary,
    game::GameSession,
    output::{print_evaluation, print_statistics},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hebrew_wordle",
    about = "Guess the three-letter Hebrew word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for target selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Path to a custom word list (one word per line) instead of the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback a guess would get against a target
    Evaluate {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Check whether a word is accepted as a guess
    Check {
        /// Word to look up
        word: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: Option<&str>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => {
            let dictionary = Dictionary::from_file(path)?;
            info!(path, words = dictionary.len(), "loaded custom word list");
            Ok(dictionary)
        }
        None => Ok(Dictionary::embedded()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.seed),
        Commands::Simple => run_simple_command(&dictionary, cli.seed),
        Commands::Evaluate { guess, target } => {
            run_evaluate_command(&guess, &target, &dictionary)
        }
        Commands::Check { word } => run_check_command(&word, &dictionary),
    }
}

fn run_play_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    use hebrew_wordle::interactive::{App, run_tui};

    let session = GameSession::new(dictionary, make_rng(seed));
    let stats = run_tui(App::new(session))?;
    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_simple_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    let mut session = GameSession::new(dictionary, make_rng(seed));
    let stats = run_simple(&mut session)?;
    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_evaluate_command(guess: &str, target: &str, dictionary: &Dictionary) -> Result<()> {
    let result = evaluate_words(guess, target, dictionary)?;
    print_evaluation(&result.guess, &result.target, &result.evaluation);
    if !result.guess_in_dictionary {
        println!(
            "{}",
            format!("note: '{}' is not in the word list", result.guess).yellow()
        );
    }
    Ok(())
}

fn run_check_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let (word, valid) = check_word(word, dictionary)?;
    if valid {
        println!("{} {}", "✓".green().bold(), word);
    } else {
        println!("{} {} - המילה לא קיימת ברשימה", "✗".red().bold(), word);
    }
    Ok(())
}
