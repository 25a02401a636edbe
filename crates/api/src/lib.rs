//! Public API traits and types for the classicrypt library
//!
//! This crate provides the public API surface for the classicrypt ecosystem:
//! the error taxonomy shared by every cipher, the [`CipherOutput`] contract
//! handed to presentation layers, and the [`ClassicalCipher`] trait.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result};
pub use types::*;

pub use traits::ClassicalCipher;
pub use traits::cipher;
