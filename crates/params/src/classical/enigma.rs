//! Constants for the Enigma I rotor machine
//!
//! Wirings are given as the letter each contact `A..Z` is wired to on the
//! forward (entry to reflector) pass.

/// Static description of a rotor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Roman numeral identifier
    pub id: &'static str,
    pub name: &'static str,
    pub wiring: &'static [u8; 26],
    /// Letter showing in the window when this rotor turns over its neighbour
    pub notch: u8,
}

/// Static description of a reflector (Umkehrwalze)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub wiring: &'static [u8; 26],
}

pub const ROTOR_I: RotorSpec = RotorSpec {
    id: "I",
    name: "Rotor I",
    wiring: b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    notch: b'Q',
};

pub const ROTOR_II: RotorSpec = RotorSpec {
    id: "II",
    name: "Rotor II",
    wiring: b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
    notch: b'E',
};

pub const ROTOR_III: RotorSpec = RotorSpec {
    id: "III",
    name: "Rotor III",
    wiring: b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
    notch: b'V',
};

pub const ROTOR_IV: RotorSpec = RotorSpec {
    id: "IV",
    name: "Rotor IV",
    wiring: b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
    notch: b'J',
};

pub const ROTOR_V: RotorSpec = RotorSpec {
    id: "V",
    name: "Rotor V",
    wiring: b"VZBRGITYUPSDNHLXAWMJQOFECK",
    notch: b'Z',
};

/// Rotor catalog, in identifier order
pub const ROTORS: [RotorSpec; 5] = [ROTOR_I, ROTOR_II, ROTOR_III, ROTOR_IV, ROTOR_V];

pub const REFLECTOR_B: ReflectorSpec = ReflectorSpec {
    id: "B",
    name: "UKW-B",
    wiring: b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
};

pub const REFLECTOR_C: ReflectorSpec = ReflectorSpec {
    id: "C",
    name: "UKW-C",
    wiring: b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
};

/// Reflector catalog, in identifier order
pub const REFLECTORS: [ReflectorSpec; 2] = [REFLECTOR_B, REFLECTOR_C];

/// Number of rotors in the machine
pub const ROTOR_SLOTS: usize = 3;

/// Maximum number of plugboard cables
pub const MAX_PLUG_PAIRS: usize = 13;

/// Ring setting used when the caller leaves one blank
pub const DEFAULT_RING: u8 = b'A';
