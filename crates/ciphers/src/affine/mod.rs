//! Affine cipher
//!
//! `E(x) = (a·x + b) mod 26` and `D(y) = a⁻¹·(y − b) mod 26`. The
//! multiplier must be coprime with 26 for the map to be a bijection.

use classicrypt_algorithms::alphabet::{clean, modulo, to_index, to_letter};
use classicrypt_algorithms::modular::mod_inverse;
use classicrypt_api::{CipherOutput, Mode, Transcript};
use classicrypt_params::alphabet::MODULUS;
use classicrypt_params::classical::affine::{B_MAX, B_MIN, DEFAULT_A, DEFAULT_B, VALID_A_VALUES};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::{execute, ClassicalCipher};
use crate::error::{validate, Error, Result};

/// Affine key `(a, b)`
///
/// Unvalidated: any pair can be held here, [`Affine::new`] rejects the bad
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineKey {
    /// Multiplier, must be coprime with 26
    pub a: i64,
    /// Shift, `0..=25`
    pub b: i64,
}

impl AffineKey {
    /// Hold `a` and `b` without checking them
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// Draw a valid key uniformly from the key space
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: VALID_A_VALUES[rng.gen_range(0..VALID_A_VALUES.len())],
            b: rng.gen_range(B_MIN..=B_MAX),
        }
    }
}

impl Default for AffineKey {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
        }
    }
}

/// Affine cipher with a validated key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Affine {
    a: i64,
    b: i64,
}

impl ClassicalCipher for Affine {
    type Key = AffineKey;

    fn new(key: &AffineKey) -> Result<Self> {
        if !VALID_A_VALUES.contains(&key.a) {
            let valid: Vec<String> = VALID_A_VALUES.iter().map(i64::to_string).collect();
            return Err(Error::InvalidKey {
                context: "a",
                message: format!(
                    "must be coprime with 26, got {}. Valid values: {}",
                    key.a,
                    valid.join(", ")
                ),
            });
        }
        validate::in_range("b", key.b, B_MIN, B_MAX)?;
        Ok(Self { a: key.a, b: key.b })
    }

    fn name() -> &'static str {
        "Affine"
    }

    fn encrypt(&self, plaintext: &str) -> Result<Transcript> {
        let letters = clean(plaintext);
        validate::non_empty(Mode::Encrypt.input_label(), &letters)?;

        let mut out = Transcript::with_capacity(letters.len(), letters.len());
        for byte in letters.bytes() {
            let x = i64::from(to_index(byte));
            let y = modulo(self.a * x + self.b, MODULUS);
            let letter = to_letter(y as u8);
            out.push(letter);
            out.step(format!(
                "E({}) = ({}×{} + {}) mod 26 = {}  →  {}",
                byte as char, self.a, x, self.b, y, letter
            ));
        }
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<Transcript> {
        let a_inv = mod_inverse(self.a, MODULUS).ok_or(Error::NoInverse {
            value: self.a,
            modulus: MODULUS,
        })?;
        let letters = clean(ciphertext);
        validate::non_empty(Mode::Decrypt.input_label(), &letters)?;

        let mut out = Transcript::with_capacity(letters.len(), letters.len());
        for byte in letters.bytes() {
            let y = i64::from(to_index(byte));
            let x = modulo(a_inv * (y - self.b), MODULUS);
            let letter = to_letter(x as u8);
            out.push(letter);
            out.step(format!(
                "D({}) = {}×({} − {}) mod 26 = {}  →  {}",
                byte as char, a_inv, y, self.b, x, letter
            ));
        }
        Ok(out)
    }
}

impl core::fmt::Debug for Affine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Affine").finish_non_exhaustive()
    }
}

/// Encrypt `text` with `E(x) = (a·x + b) mod 26`
pub fn affine_encrypt(text: &str, a: i64, b: i64) -> CipherOutput {
    execute::<Affine>(&AffineKey::new(a, b), text, Mode::Encrypt)
}

/// Decrypt `text` with `D(y) = a⁻¹·(y − b) mod 26`
pub fn affine_decrypt(text: &str, a: i64, b: i64) -> CipherOutput {
    execute::<Affine>(&AffineKey::new(a, b), text, Mode::Decrypt)
}

/// Multipliers accepted for `a`, ascending
pub fn valid_a_values() -> &'static [i64] {
    &VALID_A_VALUES
}

/// Multiplicative inverse of `a` modulo `m`, if one exists
///
/// Only moduli up to 26 are supported; larger `m` yields `None`.
pub fn modular_inverse(a: i64, m: i64) -> Option<i64> {
    if m > MODULUS {
        return None;
    }
    mod_inverse(a, m)
}
