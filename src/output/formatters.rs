//! Formatting utilities for terminal output

use crate::core::{Evaluation, KEYBOARD_ROWS, KeyboardStatus, Status, Word};
use colored::{ColoredString, Colorize};

/// Tile colors: green, orange, gray
#[must_use]
pub const fn status_rgb(status: Status) -> (u8, u8, u8) {
    match status {
        Status::Correct => (0x22, 0xc5, 0x5e),
        Status::Partial => (0xf9, 0x73, 0x16),
        Status::Absent => (0x6b, 0x72, 0x80),
    }
}

fn tile(letter: char, status: Option<Status>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(status) => {
            let (r, g, b) = status_rgb(status);
            text.white().bold().on_truecolor(r, g, b)
        }
        None => text.bold(),
    }
}

/// Render a guess as colored tiles, first letter first
#[must_use]
pub fn colored_guess(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .letters()
        .iter()
        .zip(evaluation.statuses())
        .map(|(&letter, &status)| tile(letter, Some(status)).to_string())
        .collect()
}

/// Render the keyboard rows with each key colored by its best status
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .map(|&key| tile(key, keyboard.status_of(key)).to_string())
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn guess_tiles_keep_letter_order() {
        plain();
        let target = Word::new("אבא").unwrap();
        let guess = Word::new("אור").unwrap();
        let rendered = colored_guess(&guess, &evaluate(&guess, &target));
        assert_eq!(rendered, " א  ו  ר ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        plain();
        let rows = colored_keyboard(&KeyboardStatus::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" ש "));
        assert!(rows[2].ends_with(" ת "));
    }

    #[test]
    fn status_colors_distinct() {
        assert_ne!(status_rgb(Status::Correct), status_rgb(Status::Partial));
        assert_ne!(status_rgb(Status::Partial), status_rgb(Status::Absent));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
