//! Parameters for the individual classical ciphers

pub mod affine;
pub mod enigma;
pub mod hill;
pub mod playfair;
pub mod vigenere;
