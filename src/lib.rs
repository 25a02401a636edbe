//! # classicrypt
//!
//! Classical ciphers with step-by-step traces: Vigenère, Affine, Playfair,
//! Hill and the Enigma I rotor machine.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! classicrypt = "0.3"
//! ```
//!
//! ```
//! use classicrypt::prelude::*;
//!
//! let out = vigenere_encrypt("attack at dawn", "LEMON");
//! assert_eq!(out.result, "LXFOPVEFRNHR");
//!
//! let spec = CipherSpec::Enigma(EnigmaSettings::default());
//! let out = process("AAAAA", &spec, Mode::Encrypt);
//! assert_eq!(out.result, "BDZGO");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: serialization of outputs, settings and catalogs
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`classicrypt-api`]: error taxonomy, output types and the cipher trait
//! - [`classicrypt-params`]: alphabet constants, rotor wirings, stock keys
//! - [`classicrypt-algorithms`]: modular arithmetic, matrices mod 26, rotor signal path
//! - [`classicrypt-ciphers`]: the five ciphers and the dispatcher
//!
//! None of these ciphers offers any security against a modern attacker.

// Core re-exports (always available)
pub use classicrypt_algorithms as algorithms;
pub use classicrypt_api as api;
pub use classicrypt_ciphers as ciphers;
pub use classicrypt_params as params;

// Random key generation is generic over `rand::Rng`
pub use rand;

/// Common imports for classicrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{CipherOutput, Error, ErrorKind, Mode, Result, Transcript};

    // Re-export core traits
    pub use crate::api::ClassicalCipher;

    // Ciphers and their keys
    pub use crate::ciphers::{
        Affine, AffineKey, Enigma, EnigmaSettings, Hill, Playfair, PlayfairMatrix, Vigenere,
    };

    // Total per-cipher functions
    pub use crate::ciphers::{
        affine_decrypt, affine_encrypt, enigma_process, hill_decrypt, hill_encrypt,
        playfair_decrypt, playfair_encrypt, vigenere_decrypt, vigenere_encrypt,
    };

    // Dispatch and introspection
    pub use crate::ciphers::{
        cipher_catalog, default_matrix, process, reflector_catalog, rotor_catalog, tableau,
        valid_a_values, validate_matrix, CipherId, CipherSpec,
    };
}

// Re-export the most common types at the top level
pub use api::{CipherOutput, Error, Mode, Result};
pub use ciphers::{process, CipherSpec};
