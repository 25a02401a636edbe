//! Playfair digraph cipher
//!
//! Text is enciphered two letters at a time on a keyed 5×5 square. Each
//! digraph is handled by the first rule that applies:
//!
//! 1. same row: take the letters to the right (left when decrypting)
//! 2. same column: take the letters below (above when decrypting)
//! 3. otherwise: swap columns, keeping rows
//!
//! Encryption splits doubled letters with `X` and pads an odd tail with `X`.
//! Decryption undoes this with [`cleanup_filler`], which is a heuristic and
//! can drop a genuine `X` that sat between two identical letters.

use classicrypt_api::{CipherOutput, Mode, Transcript};
use classicrypt_params::alphabet::FILLER;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::{execute, ClassicalCipher};
use crate::error::{validate, Result};

mod matrix;

use matrix::fold_letter;
pub use matrix::PlayfairMatrix;

/// Which rule transformed a digraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigraphRule {
    /// Both letters in one row: shift along the row
    SameRow,
    /// Both letters in one column: shift along the column
    SameColumn,
    /// Opposite corners of a rectangle: swap columns
    Rectangle,
}

impl DigraphRule {
    /// Label used in trace records
    pub fn as_str(&self) -> &'static str {
        match self {
            DigraphRule::SameRow => "same row",
            DigraphRule::SameColumn => "same column",
            DigraphRule::Rectangle => "rectangle",
        }
    }
}

/// Playfair cipher over a keyed square
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Playfair {
    matrix: PlayfairMatrix,
}

impl Playfair {
    /// The keyed square in use
    pub fn matrix(&self) -> &PlayfairMatrix {
        &self.matrix
    }

    /// Apply the digraph rules to the letters `a` and `b`
    ///
    /// Either case is accepted and J is read as I. Returns `None` if either
    /// character is not a letter.
    pub fn digraph(&self, a: char, b: char, mode: Mode) -> Option<(char, char, DigraphRule)> {
        let pa = self.matrix.position(a)?;
        let pb = self.matrix.position(b)?;
        let (x, y, rule) = self.substitute(pa, pb, mode);
        Some((x as char, y as char, rule))
    }

    fn substitute(
        &self,
        (ra, ca): (usize, usize),
        (rb, cb): (usize, usize),
        mode: Mode,
    ) -> (u8, u8, DigraphRule) {
        // +1 or -1 mod 5
        let shift = match mode {
            Mode::Encrypt => 1,
            Mode::Decrypt => 4,
        };

        if ra == rb {
            (
                self.matrix.at(ra, ca + shift),
                self.matrix.at(rb, cb + shift),
                DigraphRule::SameRow,
            )
        } else if ca == cb {
            (
                self.matrix.at(ra + shift, ca),
                self.matrix.at(rb + shift, cb),
                DigraphRule::SameColumn,
            )
        } else {
            (
                self.matrix.at(ra, cb),
                self.matrix.at(rb, ca),
                DigraphRule::Rectangle,
            )
        }
    }

    fn run_digraphs(&self, prepared: &[u8], mode: Mode) -> Transcript {
        let mut out = Transcript::with_capacity(prepared.len(), prepared.len() / 2 + 1);
        for (i, pair) in prepared.chunks_exact(2).enumerate() {
            let (x, y, rule) = self.substitute(
                self.matrix.cell(pair[0]),
                self.matrix.cell(pair[1]),
                mode,
            );
            out.push(x as char);
            out.push(y as char);
            out.step(format!(
                "[{:02}] {}{} → {} → {}{}",
                i + 1,
                pair[0] as char,
                pair[1] as char,
                rule.as_str(),
                x as char,
                y as char
            ));
        }
        out
    }

    /// Decrypt without removing filler letters
    pub fn decrypt_raw(&self, ciphertext: &str) -> Result<Transcript> {
        let folded = fold(ciphertext);
        validate::non_empty(Mode::Decrypt.input_label(), &folded)?;
        validate::even_length(Mode::Decrypt.input_label(), folded.len())?;
        Ok(self.run_digraphs(folded.as_bytes(), Mode::Decrypt))
    }
}

impl ClassicalCipher for Playfair {
    type Key = str;

    fn new(keyword: &str) -> Result<Self> {
        validate::non_empty("Keyword", &fold(keyword))?;
        Ok(Self {
            matrix: PlayfairMatrix::from_keyword(keyword),
        })
    }

    fn name() -> &'static str {
        "Playfair"
    }

    fn encrypt(&self, plaintext: &str) -> Result<Transcript> {
        let prepared = prepare_plaintext(plaintext);
        validate::non_empty(Mode::Encrypt.input_label(), &prepared)?;
        Ok(self.run_digraphs(prepared.as_bytes(), Mode::Encrypt))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<Transcript> {
        let mut out = self.decrypt_raw(ciphertext)?;
        let cleaned = cleanup_filler(&out.result);
        if cleaned != out.result {
            let record = format!("cleanup: {} → {}", out.result, cleaned);
            out.step(record);
            out.result = cleaned;
        }
        Ok(out)
    }
}

impl core::fmt::Debug for Playfair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Playfair").finish_non_exhaustive()
    }
}

/// Uppercase, J→I, letters only
fn fold(text: &str) -> String {
    text.bytes().filter_map(fold_letter).map(char::from).collect()
}

/// The digraph string that encryption actually enciphers
///
/// A doubled letter inside a pair is split with `X` and the second letter
/// starts the next pair; a single trailing letter is padded with `X`.
pub fn prepare_plaintext(text: &str) -> String {
    let letters = fold(text).into_bytes();
    let mut prepared = String::with_capacity(letters.len() + letters.len() / 2 + 1);
    let mut i = 0;

    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if b != a => {
                prepared.push(a as char);
                prepared.push(b as char);
                i += 2;
            }
            _ => {
                prepared.push(a as char);
                prepared.push(FILLER as char);
                i += 1;
            }
        }
    }
    prepared
}

/// Remove filler `X`s from decrypted text
///
/// Drops every `X` whose neighbours in `text` are the same letter, then one
/// trailing `X`. Lossy: a genuine `X` in that position is removed too.
pub fn cleanup_filler(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut cleaned: String = bytes
        .iter()
        .enumerate()
        .filter(|&(i, &cur)| {
            let sandwiched = cur == FILLER
                && i > 0
                && bytes.get(i + 1).is_some_and(|&next| next == bytes[i - 1]);
            !sandwiched
        })
        .map(|(_, &b)| b as char)
        .collect();

    if cleaned.ends_with(FILLER as char) {
        cleaned.pop();
    }
    cleaned
}

/// Encrypt `text` under a Playfair square keyed by `keyword`
pub fn playfair_encrypt(text: &str, keyword: &str) -> CipherOutput {
    execute::<Playfair>(keyword, text, Mode::Encrypt)
}

/// Decrypt `text` under a Playfair square keyed by `keyword`, removing filler
pub fn playfair_decrypt(text: &str, keyword: &str) -> CipherOutput {
    execute::<Playfair>(keyword, text, Mode::Decrypt)
}
