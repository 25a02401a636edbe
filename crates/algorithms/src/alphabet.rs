//! Alphabet utilities shared by every cipher
//!
//! Text is reduced to *clean text*: uppercase `A..Z` only, every other
//! character discarded. Letters map to indices `0..=25`.

use classicrypt_params::alphabet::{ALPHABET, ALPHABET_SIZE, MODULUS};

/// Reduce arbitrary text to uppercase letters `A..Z`
///
/// Non-letters are dropped, not escaped or preserved.
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Index of an uppercase letter, `A` = 0
///
/// The caller guarantees `letter` is in `A..=Z`; use [`letter_index`] for
/// unchecked input.
#[inline]
pub fn to_index(letter: u8) -> u8 {
    debug_assert!(letter.is_ascii_uppercase());
    letter - b'A'
}

/// Letter for an index, reduced mod 26
#[inline]
pub fn to_letter(index: u8) -> char {
    ALPHABET[index as usize % ALPHABET_SIZE] as char
}

/// Index of a single character of either case, if it is a letter
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Non-negative remainder of `n` modulo `m`
///
/// Cipher formulas subtract before reducing, so `n` may be negative.
#[inline]
pub fn modulo(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// `n` reduced into `0..=25`
#[inline]
pub fn mod26(n: i64) -> u8 {
    modulo(n, MODULUS) as u8
}
