//! Hebrew alphabet and final-letter (sofit) rules
//!
//! Five letters take a different glyph when they end a word. The substitution
//! depends only on where the letter sits in the word being typed, so it is
//! modeled as a pure function of `(letter, position, word_length)`.

/// The 22 base letters of the Hebrew alphabet, in alphabetical order
pub const BASE_LETTERS: [char; 22] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ',
    'ק', 'ר', 'ש', 'ת',
];

/// Base letter → final glyph
pub const FINAL_FORMS: [(char, char); 5] = [
    ('כ', 'ך'),
    ('מ', 'ם'),
    ('נ', 'ן'),
    ('פ', 'ף'),
    ('צ', 'ץ'),
];

/// On-screen keyboard rows (base letters only)
pub const KEYBOARD_ROWS: [&[char]; 3] = [
    &['ש', 'ק', 'ר', 'א', 'ט', 'ו', 'נ', 'מ', 'פ'],
    &['ד', 'ג', 'כ', 'ע', 'י', 'ח', 'ל', 'צ', 'ס'],
    &['ז', 'ב', 'ה', 'ת'],
];

/// Check whether `c` is one of the 22 base letters
#[inline]
#[must_use]
pub fn is_base_letter(c: char) -> bool {
    BASE_LETTERS.contains(&c)
}

/// Check whether `c` is one of the five final glyphs
#[inline]
#[must_use]
pub fn is_final_form(c: char) -> bool {
    FINAL_FORMS.iter().any(|&(_, fin)| fin == c)
}

/// Letters a player may type: base letters plus already-final glyphs
#[inline]
#[must_use]
pub fn is_accepted_input(c: char) -> bool {
    is_base_letter(c) || is_final_form(c)
}

/// Anything in the Hebrew Unicode block (U+0590..=U+05FF)
///
/// This is the coarse filter applied to raw key presses; [`is_accepted_input`]
/// decides whether the letter is actually usable.
#[inline]
#[must_use]
pub fn is_hebrew_char(c: char) -> bool {
    ('\u{0590}'..='\u{05FF}').contains(&c)
}

/// Return the glyph to store for `letter` typed at `position` in a word of
/// `word_length` letters
///
/// Only the last position is affected, and only for letters that have a
/// final form. Everything else passes through unchanged.
///
/// # Examples
/// ```
/// use hebrew_wordle::core::apply_final_form;
///
/// assert_eq!(apply_final_form('מ', 2, 3), 'ם');
/// assert_eq!(apply_final_form('מ', 0, 3), 'מ');
/// assert_eq!(apply_final_form('ש', 2, 3), 'ש');
/// ```
#[must_use]
pub fn apply_final_form(letter: char, position: usize, word_length: usize) -> char {
    if word_length == 0 || position != word_length - 1 {
        return letter;
    }

    FINAL_FORMS
        .iter()
        .find(|&&(base, _)| base == letter)
        .map_or(letter, |&(_, fin)| fin)
}

/// Map a final glyph back to its base letter; other letters are returned as-is
#[must_use]
pub fn to_base(letter: char) -> char {
    FINAL_FORMS
        .iter()
        .find(|&&(_, fin)| fin == letter)
        .map_or(letter, |&(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_alphabet_has_no_final_forms() {
        assert_eq!(BASE_LETTERS.len(), 22);
        assert!(BASE_LETTERS.iter().all(|&c| !is_final_form(c)));
    }

    #[test]
    fn keyboard_covers_alphabet_once() {
        let mut keys: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.iter().copied()).collect();
        keys.sort_unstable();
        let mut alphabet = BASE_LETTERS.to_vec();
        alphabet.sort_unstable();
        assert_eq!(keys, alphabet);
    }

    #[test]
    fn final_form_only_in_last_position() {
        for &(base, fin) in &FINAL_FORMS {
            assert_eq!(apply_final_form(base, 0, 3), base);
            assert_eq!(apply_final_form(base, 1, 3), base);
            assert_eq!(apply_final_form(base, 2, 3), fin);
        }
    }

    #[test]
    fn final_form_depends_on_word_length() {
        assert_eq!(apply_final_form('נ', 2, 5), 'נ');
        assert_eq!(apply_final_form('נ', 4, 5), 'ן');
        assert_eq!(apply_final_form('נ', 0, 0), 'נ');
    }

    #[test]
    fn letters_outside_rule_domain_pass_through() {
        for &letter in BASE_LETTERS.iter().filter(|&&c| !FINAL_FORMS.iter().any(|&(b, _)| b == c)) {
            assert_eq!(apply_final_form(letter, 2, 3), letter);
        }
    }

    #[test]
    fn final_glyph_is_stable() {
        assert_eq!(apply_final_form('ץ', 2, 3), 'ץ');
        assert_eq!(apply_final_form('ץ', 0, 3), 'ץ');
    }

    #[test]
    fn to_base_reverses_final_forms() {
        for &(base, fin) in &FINAL_FORMS {
            assert_eq!(to_base(fin), base);
            assert_eq!(to_base(base), base);
        }
        assert_eq!(to_base('א'), 'א');
    }

    #[test]
    fn accepted_input() {
        assert!(is_accepted_input('א'));
        assert!(is_accepted_input('ם'));
        assert!(!is_accepted_input('a'));
        assert!(!is_accepted_input('1'));
        // Hebrew block but not a letter (maqaf)
        assert!(is_hebrew_char('\u{05BE}'));
        assert!(!is_accepted_input('\u{05BE}'));
    }
}
