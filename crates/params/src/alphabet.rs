//! Constants for the 26-letter Latin alphabet

/// Number of letters; all cipher arithmetic is performed modulo this value
pub const ALPHABET_SIZE: usize = 26;

/// Alphabet size as a signed modulus for formulas that subtract
pub const MODULUS: i64 = 26;

/// The alphabet in index order, `A` = 0 through `Z` = 25
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Filler letter used for padding and for splitting doubled digraphs
pub const FILLER: u8 = b'X';
