//! The dictionary of valid words
//!
//! One list serves both as the pool of targets and as the set of accepted
//! guesses. The embedded list is compiled in; a custom list can be loaded from
//! a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Word, apply_final_form};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("the word list contains no valid three-letter words")]
    Empty,

    #[error("could not read word list")]
    Io(#[from] std::io::Error),
}

/// Immutable set of valid words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from a list of words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| lookup.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        debug!(count = words.len(), "dictionary loaded");
        Ok(Self { words, lookup })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded list is checked by the test suite to be
    /// non-empty and valid.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("embedded word list is non-empty")
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Pick a target uniformly at random
    pub fn pick_random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let index = rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    /// Exact membership test
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// See [`apply_final_form`]
    #[inline]
    #[must_use]
    pub fn apply_final_form(letter: char, position: usize, word_length: usize) -> char {
        apply_final_form(letter, position, word_length)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WORD_LENGTH, is_final_form};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::new(loader::words_from_slice(&["אבא", "אור", "כסף"])).unwrap()
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
        }
        assert_eq!(Dictionary::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_use_final_forms_only_at_the_end() {
        for word in Dictionary::embedded().words() {
            for (i, &letter) in word.letters().iter().enumerate() {
                if i + 1 < WORD_LENGTH {
                    assert!(!is_final_form(letter), "'{word}' has a final form mid-word");
                } else {
                    assert_eq!(apply_final_form(letter, i, WORD_LENGTH), letter, "'{word}'");
                }
            }
        }
    }

    #[test]
    fn final_form_rule_exposed_on_dictionary() {
        assert_eq!(Dictionary::apply_final_form('פ', 2, WORD_LENGTH), 'ף');
        assert_eq!(Dictionary::apply_final_form('פ', 1, WORD_LENGTH), 'פ');
    }

    #[test]
    fn empty_dictionary_rejected() {
        assert!(matches!(Dictionary::new(Vec::new()), Err(DictionaryError::Empty)));
    }

    #[test]
    fn duplicates_dropped() {
        let dict = Dictionary::new(loader::words_from_slice(&["אבא", "אבא", "אור"])).unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn membership() {
        let dict = small();
        assert!(dict.is_valid_word("אבא"));
        assert!(dict.is_valid_word("כסף"));
        assert!(!dict.is_valid_word("כספ"));
        assert!(!dict.is_valid_word("אאא"));
    }

    #[test]
    fn embedded_membership() {
        let dict = Dictionary::embedded();
        assert!(dict.is_valid_word("אבא"));
        assert!(dict.is_valid_word("שמש"));
        assert!(!dict.is_valid_word("אאא"));
    }

    #[test]
    fn random_target_is_a_member() {
        let dict = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let target = dict.pick_random_target(&mut rng);
            assert!(dict.is_valid_word(target.text()));
        }
    }

    #[test]
    fn random_target_is_deterministic_for_seed() {
        let dict = Dictionary::embedded();
        let a = dict.pick_random_target(&mut StdRng::seed_from_u64(42));
        let b = dict.pick_random_target(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn random_target_covers_small_list() {
        let dict = small();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            seen.insert(dict.pick_random_target(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
