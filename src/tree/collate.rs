//! Locale-aware string comparison for sort keys
//!
//! Names are compared the way people expect a file listing to be ordered
//! rather than by byte value:
//!
//! 1. base characters, ignoring case and accents, with whitespace before
//!    punctuation and symbols, before digits, before letters
//! 2. accents
//! 3. case, lowercase first
//! 4. code points, so only identical strings compare equal

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings with multi-level collation.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.cmp(b))
}

fn class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

fn primary(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (class(c), c))
}

fn secondary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().map(char::is_uppercase)
}
