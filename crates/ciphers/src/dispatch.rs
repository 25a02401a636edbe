//! Selecting a cipher by value
//!
//! [`CipherSpec`] is a closed set: one variant per cipher, each carrying
//! that cipher's key material. [`process`] is the single entry point a
//! presentation layer needs.

use core::fmt;
use core::str::FromStr;

use classicrypt_api::{CipherOutput, Mode};
use classicrypt_params::catalog::{self, CipherDescriptor};
use tracing::debug_span;

use crate::affine::{Affine, AffineKey};
use crate::cipher::execute;
use crate::enigma::{Enigma, EnigmaSettings};
use crate::error::{Error, Result};
use crate::hill::Hill;
use crate::playfair::Playfair;
use crate::vigenere::Vigenere;

/// Identifier of one of the five ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CipherId {
    Vigenere,
    Affine,
    Playfair,
    Hill,
    Enigma,
}

impl CipherId {
    /// Every cipher, in presentation order
    pub const ALL: [CipherId; 5] = [
        CipherId::Vigenere,
        CipherId::Affine,
        CipherId::Playfair,
        CipherId::Hill,
        CipherId::Enigma,
    ];

    /// Static catalog entry for this cipher
    pub fn descriptor(&self) -> &'static CipherDescriptor {
        match self {
            CipherId::Vigenere => &catalog::VIGENERE,
            CipherId::Affine => &catalog::AFFINE,
            CipherId::Playfair => &catalog::PLAYFAIR,
            CipherId::Hill => &catalog::HILL,
            CipherId::Enigma => &catalog::ENIGMA,
        }
    }

    /// Lowercase identifier, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        self.descriptor().id
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        CipherId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| Error::InvalidSelection {
                context: "cipher",
                message: format!("unknown cipher \"{}\"", s),
            })
    }
}

/// A cipher together with its key material
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "cipher", rename_all = "lowercase"))]
pub enum CipherSpec {
    Vigenere { key: String },
    Affine(AffineKey),
    Playfair { keyword: String },
    Hill { matrix: Vec<Vec<i64>> },
    Enigma(EnigmaSettings),
}

impl CipherSpec {
    pub fn id(&self) -> CipherId {
        match self {
            CipherSpec::Vigenere { .. } => CipherId::Vigenere,
            CipherSpec::Affine(_) => CipherId::Affine,
            CipherSpec::Playfair { .. } => CipherId::Playfair,
            CipherSpec::Hill { .. } => CipherId::Hill,
            CipherSpec::Enigma(_) => CipherId::Enigma,
        }
    }
}

/// Run `text` through the cipher described by `spec`
///
/// Never fails: invalid keys or text produce an output with `error` set.
/// Enigma ignores `mode`.
pub fn process(text: &str, spec: &CipherSpec, mode: Mode) -> CipherOutput {
    let _span = debug_span!("process", cipher = %spec.id(), %mode).entered();

    match spec {
        CipherSpec::Vigenere { key } => execute::<Vigenere>(key, text, mode),
        CipherSpec::Affine(key) => execute::<Affine>(key, text, mode),
        CipherSpec::Playfair { keyword } => execute::<Playfair>(keyword, text, mode),
        CipherSpec::Hill { matrix } => execute::<Hill>(matrix, text, mode),
        CipherSpec::Enigma(settings) => execute::<Enigma>(settings, text, mode),
    }
}

/// Descriptors for every cipher, in presentation order
pub fn cipher_catalog() -> &'static [CipherDescriptor] {
    &catalog::CIPHERS
}
