//! Physical key → Hebrew letter
//!
//! Hebrew characters typed on a Hebrew layout pass through. Latin keys are
//! mapped through the standard Israeli layout (SI-1452) so the game can be
//! played without switching keyboard layouts.

use crate::core::is_hebrew_char;

const LATIN_TO_HEBREW: [(char, char); 27] = [
    ('e', 'ק'),
    ('r', 'ר'),
    ('t', 'א'),
    ('y', 'ט'),
    ('u', 'ו'),
    ('i', 'ן'),
    ('o', 'ם'),
    ('p', 'פ'),
    ('a', 'ש'),
    ('s', 'ד'),
    ('d', 'ג'),
    ('f', 'כ'),
    ('g', 'ע'),
    ('h', 'י'),
    ('j', 'ח'),
    ('k', 'ל'),
    ('l', 'ך'),
    (';', 'ף'),
    ('z', 'ז'),
    ('x', 'ס'),
    ('c', 'ב'),
    ('v', 'ה'),
    ('b', 'נ'),
    ('n', 'מ'),
    ('m', 'צ'),
    (',', 'ת'),
    ('.', 'ץ'),
];

/// Translate a pressed character into the Hebrew character it stands for
#[must_use]
pub fn key_to_letter(c: char) -> Option<char> {
    if is_hebrew_char(c) {
        return Some(c);
    }

    let lower = c.to_ascii_lowercase();
    LATIN_TO_HEBREW
        .iter()
        .find(|&&(latin, _)| latin == lower)
        .map(|&(_, hebrew)| hebrew)
}
