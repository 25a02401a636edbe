//! Constants for the Playfair cipher

/// Side length of the key square
pub const GRID_SIZE: usize = 5;

/// Number of cells in the key square
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// The 25-letter Playfair alphabet, `J` merged into `I`
pub const PLAYFAIR_ALPHABET: &[u8; GRID_CELLS] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Letter folded away before any Playfair processing
pub const MERGED_LETTER: u8 = b'J';

/// Letter that replaces [`MERGED_LETTER`]
pub const MERGED_INTO: u8 = b'I';
