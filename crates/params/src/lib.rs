//! Constant values for classicrypt cipher operations
//!
//! This crate holds the fixed catalogs every cipher draws on: the alphabet,
//! the affine key domain, Hill matrix sizes, the historical Enigma rotor and
//! reflector wirings, and the list of ciphers offered to presentation layers.

#![no_std]

pub mod alphabet;
pub mod catalog;
pub mod classical;
