//! Primitives for the classical ciphers
//!
//! This crate provides the building blocks the cipher modules share:
//!
//! - [`alphabet`]: text cleaning, letter/index mapping and mod-26 arithmetic
//! - [`modular`]: modular inverses over small moduli
//! - [`matrix`]: square matrices over Z/26Z with Gauss-Jordan inversion
//! - [`rotor`]: the Enigma rotor, reflector and plugboard signal path
//!
//! Every function here is pure or operates on state owned by the caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

pub mod alphabet;
pub mod modular;

// Matrix algebra over Z/26Z
pub mod matrix;
pub use matrix::ModMatrix;

// Rotor machine signal path
pub mod rotor;
pub use rotor::{Plugboard, Reflector, ReflectorId, Rotor, RotorId, RotorState, SignalPath};
