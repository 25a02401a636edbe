//! Vigenère cipher
//!
//! Each letter of the text is shifted by the corresponding letter of the
//! repeating key: `C[i] = (P[i] + K[i mod |K|]) mod 26`. The key index
//! advances only over letters, since non-letters are stripped up front.

use classicrypt_algorithms::alphabet::{clean, to_index, to_letter};
use classicrypt_api::{CipherOutput, Mode, Transcript};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::{execute, ClassicalCipher};
use crate::error::{validate, Result};

pub use classicrypt_params::classical::vigenere::DEFAULT_TABLEAU_ROWS;

/// Vigenère cipher keyed by a letter sequence
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Vigenere {
    /// Key letters as shifts in `0..=25`
    shifts: Vec<u8>,
}

impl Vigenere {
    fn apply(&self, text: &str, mode: Mode) -> Result<Transcript> {
        let letters = clean(text);
        validate::non_empty(mode.input_label(), &letters)?;

        let mut out = Transcript::with_capacity(letters.len(), letters.len());
        for (i, byte) in letters.bytes().enumerate() {
            let x = to_index(byte);
            let k = self.shifts[i % self.shifts.len()];
            let (y, op) = match mode {
                Mode::Encrypt => ((x + k) % 26, '+'),
                Mode::Decrypt => ((x + 26 - k) % 26, '−'),
            };
            let letter = to_letter(y);
            out.push(letter);
            out.step(format!(
                "[{:02}]  {}({}) {} {}({}) = {}({})",
                i + 1,
                byte as char,
                x,
                op,
                to_letter(k),
                k,
                letter,
                y
            ));
        }
        Ok(out)
    }
}

impl ClassicalCipher for Vigenere {
    type Key = str;

    fn new(key: &str) -> Result<Self> {
        let key = clean(key);
        validate::non_empty("Key", &key)?;
        Ok(Self {
            shifts: key.bytes().map(to_index).collect(),
        })
    }

    fn name() -> &'static str {
        "Vigenère"
    }

    fn encrypt(&self, plaintext: &str) -> Result<Transcript> {
        self.apply(plaintext, Mode::Encrypt)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<Transcript> {
        self.apply(ciphertext, Mode::Decrypt)
    }
}

impl core::fmt::Debug for Vigenere {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Vigenere")
            .field("key_len", &self.shifts.len())
            .finish_non_exhaustive()
    }
}

/// Encrypt `text` under the Vigenère key `key`
pub fn vigenere_encrypt(text: &str, key: &str) -> CipherOutput {
    execute::<Vigenere>(key, text, Mode::Encrypt)
}

/// Decrypt `text` under the Vigenère key `key`
pub fn vigenere_decrypt(text: &str, key: &str) -> CipherOutput {
    execute::<Vigenere>(key, text, Mode::Decrypt)
}

/// One row of the tabula recta
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableauRow {
    /// Key letter selecting this row
    pub letter: char,
    /// The alphabet shifted by `letter`, space separated
    pub row: String,
}

/// Shifted alphabets for the first `max_rows` key letters
///
/// Each key letter gets its own row, repeats included, in key order. An
/// empty or letterless key yields no rows.
pub fn tableau(key: &str, max_rows: usize) -> Vec<TableauRow> {
    clean(key)
        .bytes()
        .map(to_index)
        .take(max_rows)
        .map(|k| TableauRow {
            letter: to_letter(k),
            row: (0..26u8)
                .map(|j| to_letter(j + k).to_string())
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect()
}
