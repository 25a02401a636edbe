//! Common trait for all classical ciphers
//!
//! A cipher instance is built from key material with [`ClassicalCipher::new`],
//! which performs every key check up front. Once built, an instance is
//! immutable: `encrypt` and `decrypt` take `&self`, so one instance can serve
//! any number of calls, from any number of threads.

use crate::error::Result;
use crate::types::{Mode, Transcript};

/// Common trait for all classical encryption algorithms
pub trait ClassicalCipher {
    /// The key material used by this cipher
    type Key: ?Sized;

    /// Creates a new cipher instance, validating the key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str
    where
        Self: Sized;

    /// Encrypts the letters of `text`
    fn encrypt(&self, text: &str) -> Result<Transcript>;

    /// Decrypts the letters of `text`
    fn decrypt(&self, text: &str) -> Result<Transcript>;

    /// Runs the operation selected by `mode`
    fn process(&self, text: &str, mode: Mode) -> Result<Transcript> {
        match mode {
            Mode::Encrypt => self.encrypt(text),
            Mode::Decrypt => self.decrypt(text),
        }
    }
}
