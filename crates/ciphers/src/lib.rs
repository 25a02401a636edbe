//! Classical ciphers for the classicrypt library
//!
//! Five independent ciphers share one contract: build an instance from key
//! material (all validation happens here), then encrypt or decrypt text into
//! a [`Transcript`] of the result plus a human-readable trace. The free
//! functions (`vigenere_encrypt`, `hill_decrypt`, `enigma_process`, ...) wrap
//! that contract into a total [`CipherOutput`] that never fails, and
//! [`process`] selects a cipher from a [`CipherSpec`].
//!
//! These are historical ciphers for teaching; none of them is secure.

#![forbid(unsafe_code)]

pub mod affine;
pub mod cipher;
pub mod dispatch;
pub mod enigma;
pub mod error;
pub mod hill;
pub mod playfair;
pub mod vigenere;

// Re-export main types for convenience
pub use affine::{affine_decrypt, affine_encrypt, modular_inverse, valid_a_values, Affine, AffineKey};
pub use cipher::ClassicalCipher;
pub use dispatch::{cipher_catalog, process, CipherId, CipherSpec};
pub use enigma::{
    enigma_process, parse_plugboard, reflector_catalog, rotor_catalog, Enigma, EnigmaConfig, EnigmaSettings,
    ReflectorInfo, RotorInfo,
};
pub use hill::{default_matrix, hill_decrypt, hill_encrypt, validate_matrix, Hill, MatrixReport};
pub use playfair::{
    cleanup_filler, playfair_decrypt, playfair_encrypt, prepare_plaintext, DigraphRule,
    Playfair, PlayfairMatrix,
};
pub use vigenere::{tableau, vigenere_decrypt, vigenere_encrypt, TableauRow, Vigenere};

// Re-export the API error system and result types
pub use classicrypt_api::{CipherOutput, Mode, Transcript};
pub use classicrypt_api::error::{validate, Error, ErrorKind, Result};
