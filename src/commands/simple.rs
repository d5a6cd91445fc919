//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::MAX_ATTEMPTS;
use crate::game::outcome::outcome_message;
use crate::game::{GameSession, GameState, Statistics};
use crate::output::{print_board, print_statistics};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for on one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    Stats,
    Help,
    Guess(String),
}

impl LineCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "stats" | "s" => Self::Stats,
            "help" | "h" | "?" => Self::Help,
            other => Self::Guess(other.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut GameSession<'_, R>) -> io::Result<Statistics> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Same as [`run_simple`] but reading commands from any buffered reader
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple_with<R: Rng, I: BufRead>(
    session: &mut GameSession<'_, R>,
    input: &mut I,
) -> io::Result<Statistics> {
    let mut stats = Statistics::default();

    println!("\n╔════════════════════════════════════════╗");
    println!("║          וורדל עברי - 3 אותיות          ║");
    println!("╚════════════════════════════════════════╝\n");
    print_help();

    loop {
        print!("{} ", format!("[{}/{MAX_ATTEMPTS}]", session.attempts().len() + 1).cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match LineCommand::parse(&line) {
            LineCommand::Quit => break,
            LineCommand::Help => print_help(),
            LineCommand::Stats => print_statistics(&stats),
            LineCommand::NewGame => {
                session.start_new();
                println!("\n🔄 משחק חדש!\n");
            }
            LineCommand::Guess(text) => {
                play_line(session, &text, &mut stats);
                if session.is_ended() {
                    session.start_new();
                    println!("🔄 משחק חדש!\n");
                }
            }
        }
    }

    println!("\n👋 להתראות!\n");
    Ok(stats)
}

/// Type a whole line into the session and submit it
fn play_line<R: Rng>(session: &mut GameSession<'_, R>, text: &str, stats: &mut Statistics) {
    while !session.current_guess().is_empty() {
        session.delete_letter();
    }
    for letter in text.chars() {
        session.input_letter(letter);
    }

    match session.submit_guess() {
        Ok(outcome) => {
            print_board(session);
            if outcome.transition != GameState::Playing {
                stats.record(outcome.transition, session.attempts().len());
                if let Some(message) =
                    outcome_message(outcome.transition, session.attempts().len(), session.target())
                {
                    let message = if outcome.transition == GameState::Won {
                        message.green().bold()
                    } else {
                        message.yellow().bold()
                    };
                    println!("  {message}\n");
                }
            }
        }
        Err(e) => println!("  {}\n", e.to_string().red()),
    }
}

fn print_help() {
    println!("Type a three-letter Hebrew word and press Enter.");
    println!("  🟩 correct position   🟧 wrong position   ⬜ not in the word");
    println!("Commands: 'new' for a new game, 'stats', 'help', 'quit'\n");
}
