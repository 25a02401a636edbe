//! Trait definitions for the classical ciphers

pub mod cipher;

pub use cipher::ClassicalCipher;
