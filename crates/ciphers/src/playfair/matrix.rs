//! Keyed 5×5 Playfair square

use classicrypt_params::classical::playfair::{
    GRID_CELLS, GRID_SIZE, MERGED_INTO, MERGED_LETTER, PLAYFAIR_ALPHABET,
};
use zeroize::Zeroize;

/// The keyed square, J merged into I
///
/// Keyword letters come first in order of first appearance, followed by the
/// rest of the alphabet. Row and column of a cell are `index / 5` and
/// `index % 5`.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct PlayfairMatrix {
    cells: [u8; GRID_CELLS],
    /// Cell index of each letter `A..Z`; J shares I's cell
    index: [u8; 26],
    keyword_len: usize,
}

impl PlayfairMatrix {
    /// Build the square for `keyword`
    ///
    /// Non-letters in the keyword are ignored. A keyword with no letters
    /// gives the plain alphabet square.
    pub fn from_keyword(keyword: &str) -> Self {
        let mut cells = [0u8; GRID_CELLS];
        let mut index = [u8::MAX; 26];
        let mut filled = 0;
        let mut keyword_len = 0;

        let keyword_letters = keyword.bytes().filter_map(fold_letter);
        for (from_keyword, letter) in keyword_letters
            .map(|l| (true, l))
            .chain(PLAYFAIR_ALPHABET.iter().map(|&l| (false, l)))
        {
            let slot = &mut index[(letter - b'A') as usize];
            if *slot != u8::MAX {
                continue;
            }
            *slot = filled as u8;
            cells[filled] = letter;
            filled += 1;
            if from_keyword {
                keyword_len += 1;
            }
        }
        index[(MERGED_LETTER - b'A') as usize] = index[(MERGED_INTO - b'A') as usize];

        Self {
            cells,
            index,
            keyword_len,
        }
    }

    /// Row and column of a letter of either case; `None` for non-letters
    ///
    /// J is found in I's cell.
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        if !letter.is_ascii() {
            return None;
        }
        fold_letter(letter as u8).map(|l| self.cell(l))
    }

    /// Row and column of an uppercase `A..=Z` byte
    pub(crate) fn cell(&self, letter: u8) -> (usize, usize) {
        debug_assert!(letter.is_ascii_uppercase());
        let i = self.index[(letter - b'A') as usize] as usize;
        (i / GRID_SIZE, i % GRID_SIZE)
    }

    /// Letter at `row`, `col`, both taken mod 5
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[(row % GRID_SIZE) * GRID_SIZE + col % GRID_SIZE]
    }

    /// All 25 letters in row-major order
    pub fn letters(&self) -> String {
        self.cells.iter().map(|&c| c as char).collect()
    }

    /// The five rows, for display
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(GRID_SIZE)
            .map(|row| row.iter().map(|&c| c as char).collect())
            .collect()
    }

    /// Whether `letter` was placed by the keyword rather than the alphabet fill
    pub fn is_keyword_letter(&self, letter: char) -> bool {
        if !letter.is_ascii() {
            return false;
        }
        fold_letter(letter as u8)
            .is_some_and(|l| (self.index[(l - b'A') as usize] as usize) < self.keyword_len)
    }

    /// Number of distinct letters contributed by the keyword
    pub fn keyword_len(&self) -> usize {
        self.keyword_len
    }
}

/// Uppercase `byte` and merge J into I; `None` for non-letters
pub(crate) fn fold_letter(byte: u8) -> Option<u8> {
    if !byte.is_ascii_alphabetic() {
        return None;
    }
    match byte.to_ascii_uppercase() {
        MERGED_LETTER => Some(MERGED_INTO),
        upper => Some(upper),
    }
}
