//! Display functions for command results

use super::formatters::{colored_guess, colored_keyboard, create_progress_bar};
use crate::core::{Evaluation, MAX_ATTEMPTS, Word};
use crate::game::{GameSession, Statistics};
use colored::Colorize;
use rand::Rng;

/// Print the evaluation of a single guess
pub fn print_evaluation(guess: &Word, target: &Word, evaluation: &Evaluation) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Guess:  {}", guess.text().bright_yellow().bold());
    println!("Target: {}", target.text().bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}   {}\n", colored_guess(guess, evaluation), evaluation);
}

/// Print the submitted rows and the keyboard
pub fn print_board<R: Rng>(session: &GameSession<'_, R>) {
    println!();
    for (i, attempt) in session.attempts().iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            colored_guess(&attempt.guess, &attempt.evaluation)
        );
    }
    for i in session.attempts().len()..MAX_ATTEMPTS {
        println!("  {}. {}", (i + 1).to_string().bright_black(), " _  _  _ ".bright_black());
    }

    println!();
    for row in colored_keyboard(session.keyboard()) {
        println!("  {row}");
    }
    println!();
}

/// Print the statistics gathered this session
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Games played: {}", stats.total_games);
    println!(
        "   Win rate:     {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, max, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}
