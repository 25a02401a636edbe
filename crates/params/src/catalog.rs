//! Descriptors for the ciphers offered by the engine

/// Static description of one cipher, for navigation and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherDescriptor {
    /// Stable identifier
    pub id: &'static str,
    /// Two-digit ordinal shown in listings
    pub ordinal: &'static str,
    pub label: &'static str,
    /// Family of the cipher
    pub subtitle: &'static str,
    /// Short badge text
    pub tag: &'static str,
}

pub const VIGENERE: CipherDescriptor = CipherDescriptor {
    id: "vigenere",
    ordinal: "01",
    label: "Vigenère",
    subtitle: "Polyalphabetic",
    tag: "KEY",
};

pub const AFFINE: CipherDescriptor = CipherDescriptor {
    id: "affine",
    ordinal: "02",
    label: "Affine",
    subtitle: "Linear Function",
    tag: "MATH",
};

pub const PLAYFAIR: CipherDescriptor = CipherDescriptor {
    id: "playfair",
    ordinal: "03",
    label: "Playfair",
    subtitle: "Digraph Matrix",
    tag: "GRID",
};

pub const HILL: CipherDescriptor = CipherDescriptor {
    id: "hill",
    ordinal: "04",
    label: "Hill",
    subtitle: "Matrix Algebra",
    tag: "MAT",
};

pub const ENIGMA: CipherDescriptor = CipherDescriptor {
    id: "enigma",
    ordinal: "05",
    label: "Enigma",
    subtitle: "Rotor Machine",
    tag: "MECH",
};

/// All ciphers, in presentation order
pub const CIPHERS: [CipherDescriptor; 5] = [VIGENERE, AFFINE, PLAYFAIR, HILL, ENIGMA];
