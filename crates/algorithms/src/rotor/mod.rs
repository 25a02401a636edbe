//! Enigma I rotor machine primitives
//!
//! The signal path for one key press is:
//!
//! ```text
//! plugboard -> right -> middle -> left -> reflector -> left -> middle -> right -> plugboard
//! ```
//!
//! Rotors carry their ring setting (Ringstellung); positions live in a
//! separate [`RotorState`] owned by whoever is enciphering, so a
//! [`SignalPath`] is immutable and can be shared freely.

use core::fmt;
use core::str::FromStr;

use classicrypt_params::classical::enigma::{
    ReflectorSpec, RotorSpec, REFLECTOR_B, REFLECTOR_C, ROTOR_I, ROTOR_II, ROTOR_III, ROTOR_IV,
    ROTOR_V,
};

use crate::alphabet::to_index;
use crate::error::{Error, Result};

mod plugboard;
mod state;

pub use plugboard::Plugboard;
pub use state::RotorState;

/// Identifier of a rotor in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorId {
    /// Rotor I, notch Q
    I,
    /// Rotor II, notch E
    II,
    /// Rotor III, notch V
    III,
    /// Rotor IV, notch J
    IV,
    /// Rotor V, notch Z
    V,
}

impl RotorId {
    /// Every rotor, in catalog order
    pub const ALL: [RotorId; 5] = [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V];

    /// Static wiring and notch for this rotor
    pub fn spec(&self) -> &'static RotorSpec {
        match self {
            RotorId::I => &ROTOR_I,
            RotorId::II => &ROTOR_II,
            RotorId::III => &ROTOR_III,
            RotorId::IV => &ROTOR_IV,
            RotorId::V => &ROTOR_V,
        }
    }

    /// Roman numeral identifier
    pub fn as_str(&self) -> &'static str {
        self.spec().id
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        RotorId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| Error::param("rotor", format!("unknown rotor \"{}\", expected I-V", s)))
    }
}

/// Identifier of a reflector in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorId {
    /// UKW-B
    B,
    /// UKW-C
    C,
}

impl ReflectorId {
    /// Every reflector, in catalog order
    pub const ALL: [ReflectorId; 2] = [ReflectorId::B, ReflectorId::C];

    /// Static wiring for this reflector
    pub fn spec(&self) -> &'static ReflectorSpec {
        match self {
            ReflectorId::B => &REFLECTOR_B,
            ReflectorId::C => &REFLECTOR_C,
        }
    }

    /// Single-letter identifier
    pub fn as_str(&self) -> &'static str {
        self.spec().id
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReflectorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        ReflectorId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| {
                Error::param("reflector", format!("unknown reflector \"{}\", expected B or C", s))
            })
    }
}

/// A rotor with its ring setting applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    id: RotorId,
    forward: [u8; 26],
    backward: [u8; 26],
    notch: u8,
    ring: u8,
}

impl Rotor {
    /// Build a rotor from the catalog with ring setting `ring` (`0` = A)
    pub fn new(id: RotorId, ring: u8) -> Self {
        let spec = id.spec();
        let mut forward = [0u8; 26];
        let mut backward = [0u8; 26];
        for (contact, &letter) in spec.wiring.iter().enumerate() {
            let out = to_index(letter);
            forward[contact] = out;
            // Inverse wiring: the contact whose forward output is `out`
            backward[out as usize] = contact as u8;
        }
        Self {
            id,
            forward,
            backward,
            notch: to_index(spec.notch),
            ring: ring % 26,
        }
    }

    /// Catalog identifier
    pub fn id(&self) -> RotorId {
        self.id
    }

    /// Ring setting as an index
    pub fn ring(&self) -> u8 {
        self.ring
    }

    /// Position at which this rotor turns over its left neighbour
    ///
    /// The notch is fixed on the wiring core, so moving the ring moves the
    /// visible turnover letter with it.
    pub fn turnover_position(&self) -> u8 {
        (self.notch + 26 - self.ring) % 26
    }

    /// Whether this rotor sits on its notch at `position`
    pub fn at_notch(&self, position: u8) -> bool {
        position == self.turnover_position()
    }

    /// Right-to-left pass at `position`
    pub fn forward(&self, position: u8, n: u8) -> u8 {
        let contact = (n + position + 26 - self.ring) % 26;
        (self.forward[contact as usize] + 26 - position + self.ring) % 26
    }

    /// Left-to-right pass at `position`, the inverse of [`Rotor::forward`]
    pub fn backward(&self, position: u8, n: u8) -> u8 {
        let contact = (n + position + 26 - self.ring) % 26;
        (self.backward[contact as usize] + 26 - position + self.ring) % 26
    }
}

/// A reflector: a fixed-point-free involution on the alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    id: ReflectorId,
    wiring: [u8; 26],
}

impl Reflector {
    /// Build a reflector from the catalog
    pub fn new(id: ReflectorId) -> Self {
        let mut wiring = [0u8; 26];
        for (i, &letter) in id.spec().wiring.iter().enumerate() {
            wiring[i] = to_index(letter);
        }
        Self { id, wiring }
    }

    /// Catalog identifier
    pub fn id(&self) -> ReflectorId {
        self.id
    }

    /// Send the signal back through the machine
    pub fn reflect(&self, n: u8) -> u8 {
        self.wiring[n as usize % 26]
    }
}

/// The complete wiring of a configured machine
///
/// Rotors are ordered left, middle, right, matching [`RotorState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalPath {
    rotors: [Rotor; 3],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl SignalPath {
    /// Assemble a machine from its parts
    pub fn new(rotors: [Rotor; 3], reflector: Reflector, plugboard: Plugboard) -> Self {
        Self {
            rotors,
            reflector,
            plugboard,
        }
    }

    /// Rotors, left to right
    pub fn rotors(&self) -> &[Rotor; 3] {
        &self.rotors
    }

    /// The installed reflector
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The installed plugboard
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Press a key: step the rotors, then send `n` through the machine
    pub fn press(&self, state: &mut RotorState, n: u8) -> u8 {
        state.step(&self.rotors);
        self.signal(state, n)
    }

    /// Send `n` through the machine at the current positions, without stepping
    pub fn signal(&self, state: &RotorState, n: u8) -> u8 {
        let [left, middle, right] = &self.rotors;
        let [pl, pm, pr] = state.positions();

        let mut n = self.plugboard.swap(n);

        n = right.forward(pr, n);
        n = middle.forward(pm, n);
        n = left.forward(pl, n);

        n = self.reflector.reflect(n);

        n = left.backward(pl, n);
        n = middle.backward(pm, n);
        n = right.backward(pr, n);

        self.plugboard.swap(n)
    }
}
