//! Hill cipher
//!
//! Text is split into blocks of `n` letters, each block read as a column
//! vector and multiplied by the `n×n` key matrix mod 26. Decryption
//! multiplies by the inverse matrix, which is computed once when the cipher
//! is built; a key without an inverse is rejected up front.

use classicrypt_algorithms::alphabet::{clean, to_index, to_letter};
use classicrypt_algorithms::modular::mod_inverse;
use classicrypt_algorithms::ModMatrix;
use classicrypt_api::{CipherOutput, Mode, Transcript};
use classicrypt_params::alphabet::{FILLER, MODULUS};
use classicrypt_params::classical::hill::{default_matrix_values, MATRIX_SIZES};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::{execute, ClassicalCipher};
use crate::error::{validate, Error, PrimitiveResultExt, Result};

const KEY_CONTEXT: &str = "Hill key matrix";

/// Hill cipher with a key matrix known to be invertible mod 26
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hill {
    key: ModMatrix,
    inverse: ModMatrix,
}

impl Hill {
    /// Build from an already reduced matrix
    pub fn from_matrix(key: ModMatrix) -> Result<Self> {
        check_size(key.size())?;
        let inverse = key.inverse().map_primitive_err(KEY_CONTEXT)?;
        Ok(Self { key, inverse })
    }

    /// Block size `n`
    pub fn block_size(&self) -> usize {
        self.key.size()
    }

    /// The inverse key matrix, as rows
    pub fn inverse_rows(&self) -> Vec<Vec<u8>> {
        self.inverse.rows()
    }

    /// Draw a random invertible key of size `n`
    pub fn random_key<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<Vec<i64>>> {
        check_size(n)?;
        let key = ModMatrix::random_invertible(rng, n);
        Ok(key
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(i64::from).collect())
            .collect())
    }

    fn apply(&self, text: &str, mode: Mode) -> Result<Transcript> {
        let cleaned = clean(text);
        validate::non_empty(mode.input_label(), &cleaned)?;
        let mut letters = cleaned.into_bytes();

        let n = self.block_size();
        while letters.len() % n != 0 {
            letters.push(FILLER);
        }

        let (matrix, symbol) = match mode {
            Mode::Encrypt => (&self.key, "M"),
            Mode::Decrypt => (&self.inverse, "M⁻¹"),
        };

        let mut out = Transcript::with_capacity(letters.len(), letters.len() / n);
        for block in letters.chunks_exact(n) {
            let v: Vec<u8> = block.iter().map(|&b| to_index(b)).collect();
            let r = matrix.mul_vec(&v)?;
            let produced: String = r.iter().map(|&x| to_letter(x)).collect();
            out.push_str(&produced);
            out.step(format!(
                "[{}]=[{}]  ×  {}  =  [{}]  →  {}",
                join(block.iter().map(|&b| b as char)),
                join(v.iter()),
                symbol,
                join(r.iter()),
                produced
            ));
        }
        Ok(out)
    }
}

impl ClassicalCipher for Hill {
    type Key = [Vec<i64>];

    fn new(rows: &[Vec<i64>]) -> Result<Self> {
        check_size(rows.len())?;
        let key = ModMatrix::from_rows(rows).map_primitive_err(KEY_CONTEXT)?;
        Self::from_matrix(key)
    }

    fn name() -> &'static str {
        "Hill"
    }

    fn encrypt(&self, plaintext: &str) -> Result<Transcript> {
        self.apply(plaintext, Mode::Encrypt)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<Transcript> {
        self.apply(ciphertext, Mode::Decrypt)
    }
}

impl core::fmt::Debug for Hill {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hill")
            .field("block_size", &self.block_size())
            .finish_non_exhaustive()
    }
}

fn check_size(n: usize) -> Result<()> {
    if MATRIX_SIZES.contains(&n) {
        return Ok(());
    }
    Err(Error::InvalidKey {
        context: KEY_CONTEXT,
        message: format!("size must be 2, 3, 4 or 5, got {}", n),
    })
}

fn join<T: core::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|x| x.to_string()).collect::<Vec<_>>().join(",")
}

/// Validity report for a candidate key matrix
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixReport {
    /// Number of rows supplied
    pub size: usize,
    /// Whether the matrix is invertible mod 26
    pub valid: bool,
    /// Determinant mod 26; `None` when the shape is unusable
    pub determinant: Option<u8>,
    /// Inverse of the determinant mod 26, when it has one
    pub determinant_inverse: Option<u8>,
    /// One-line summary for display
    pub message: String,
}

/// Check a key matrix and describe the result for display
///
/// Validity comes from Gauss-Jordan elimination; the determinant is
/// informational.
pub fn validate_matrix(rows: &[Vec<i64>]) -> MatrixReport {
    let size = rows.len();
    let matrix =
        check_size(size).and_then(|_| ModMatrix::from_rows(rows).map_primitive_err(KEY_CONTEXT));
    let matrix = match matrix {
        Ok(m) => m,
        Err(e) => {
            return MatrixReport {
                size,
                valid: false,
                determinant: None,
                determinant_inverse: None,
                message: e.to_string(),
            }
        }
    };

    let valid = matrix.is_invertible();
    let det = matrix.determinant();
    let det_inv = mod_inverse(i64::from(det), MODULUS).map(|x| x as u8);
    let message = match (valid, det_inv) {
        (true, Some(inv)) => format!("det mod 26 = {}  →  invertible ✓  (det⁻¹ = {})", det, inv),
        (true, None) => format!("det mod 26 = {}  →  invertible ✓", det),
        (false, _) => format!("det mod 26 = {}  →  NOT invertible ✗, choose different values", det),
    };

    MatrixReport {
        size,
        valid,
        determinant: Some(det),
        determinant_inverse: det_inv,
        message,
    }
}

/// Stock key matrix for size `n`, if `n` is supported
///
/// Only the 2×2 and 3×3 stock matrices are invertible.
pub fn default_matrix(n: usize) -> Option<Vec<Vec<i64>>> {
    default_matrix_values(n).map(|values| values.chunks(n).map(<[i64]>::to_vec).collect())
}

/// Encrypt `text` with the Hill key `key_matrix`, padding with `X`
pub fn hill_encrypt(text: &str, key_matrix: &[Vec<i64>]) -> CipherOutput {
    execute::<Hill>(key_matrix, text, Mode::Encrypt)
}

/// Decrypt `text` with the inverse of `key_matrix`, padding with `X`
pub fn hill_decrypt(text: &str, key_matrix: &[Vec<i64>]) -> CipherOutput {
    execute::<Hill>(key_matrix, text, Mode::Decrypt)
}
