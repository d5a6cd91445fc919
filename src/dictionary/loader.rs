//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are skipped. Lines that are not valid
/// three-letter Hebrew words are skipped with a warning. A last letter written
/// in base form is stored as its final glyph, the same way it is typed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hebrew_wordle::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hebrew_wordle::dictionary::loader::words_from_slice;
/// use hebrew_wordle::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::from_typed(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(line, error = %e, "skipping invalid word list entry");
                None
            }
        })
        .collect()
}
