//! Machine settings as entered by a user, and their validated form

use classicrypt_algorithms::{Plugboard, ReflectorId, RotorId};
use classicrypt_params::classical::enigma::{DEFAULT_RING, ROTOR_SLOTS};

use crate::error::{selection_error, Error, Result};

/// Slot names, left to right
const SLOTS: [&str; ROTOR_SLOTS] = ["left rotor", "middle rotor", "right rotor"];

/// Raw machine settings, left to right
///
/// Nothing is checked until the settings are turned into an
/// [`EnigmaConfig`]. An empty ring setting means `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnigmaSettings {
    /// Rotor identifiers `I`-`V`
    pub rotors: [String; ROTOR_SLOTS],
    /// Start positions, one letter each
    pub positions: [String; ROTOR_SLOTS],
    /// Ring settings, one letter each
    pub rings: [String; ROTOR_SLOTS],
    /// Reflector identifier `B` or `C`
    pub reflector: String,
    /// Whitespace-separated letter pairs
    pub plugboard: String,
}

impl EnigmaSettings {
    /// Settings from raw strings; nothing is checked until the machine is built
    pub fn new(
        rotors: [&str; ROTOR_SLOTS],
        positions: [&str; ROTOR_SLOTS],
        rings: [&str; ROTOR_SLOTS],
        reflector: &str,
        plugboard: &str,
    ) -> Self {
        Self {
            rotors: rotors.map(str::to_string),
            positions: positions.map(str::to_string),
            rings: rings.map(str::to_string),
            reflector: reflector.to_string(),
            plugboard: plugboard.to_string(),
        }
    }
}

impl Default for EnigmaSettings {
    fn default() -> Self {
        Self::new(["I", "II", "III"], ["A", "A", "A"], ["A", "A", "A"], "B", "")
    }
}

/// Validated machine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaConfig {
    rotors: [RotorId; ROTOR_SLOTS],
    positions: [u8; ROTOR_SLOTS],
    rings: [u8; ROTOR_SLOTS],
    reflector: ReflectorId,
    plugboard: Plugboard,
}

impl EnigmaConfig {
    /// Validate raw settings
    ///
    /// Checks run in order: rotors, reflector, start positions, ring
    /// settings, plugboard. The first failure is reported.
    pub fn from_settings(settings: &EnigmaSettings) -> Result<Self> {
        let mut rotors = [RotorId::I; ROTOR_SLOTS];
        for (slot, raw) in settings.rotors.iter().enumerate() {
            rotors[slot] = raw
                .parse::<RotorId>()
                .map_err(|e| selection_error(e, SLOTS[slot]))?;
        }

        let reflector = settings
            .reflector
            .parse::<ReflectorId>()
            .map_err(|e| selection_error(e, "reflector"))?;

        let mut positions = [0u8; ROTOR_SLOTS];
        for (slot, raw) in settings.positions.iter().enumerate() {
            positions[slot] = single_letter(raw).ok_or_else(|| Error::InvalidPosition {
                context: SLOTS[slot],
                message: letter_message(raw),
            })?;
        }

        let mut rings = [0u8; ROTOR_SLOTS];
        for (slot, raw) in settings.rings.iter().enumerate() {
            let ring = if raw.trim().is_empty() {
                Some(DEFAULT_RING - b'A')
            } else {
                single_letter(raw)
            };
            rings[slot] = ring.ok_or_else(|| Error::InvalidRing {
                context: SLOTS[slot],
                message: letter_message(raw),
            })?;
        }

        let plugboard = Plugboard::parse(&settings.plugboard)?;

        Ok(Self {
            rotors,
            positions,
            rings,
            reflector,
            plugboard,
        })
    }

    /// Rotors, left to right
    pub fn rotors(&self) -> [RotorId; ROTOR_SLOTS] {
        self.rotors
    }

    /// Start positions as indices, left to right
    pub fn positions(&self) -> [u8; ROTOR_SLOTS] {
        self.positions
    }

    /// Ring settings as indices, left to right
    pub fn rings(&self) -> [u8; ROTOR_SLOTS] {
        self.rings
    }

    pub fn reflector(&self) -> ReflectorId {
        self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}

impl TryFrom<&EnigmaSettings> for EnigmaConfig {
    type Error = Error;

    fn try_from(settings: &EnigmaSettings) -> Result<Self> {
        Self::from_settings(settings)
    }
}

/// Index of `raw` if it is exactly one letter, either case
fn single_letter(raw: &str) -> Option<u8> {
    match raw.trim().as_bytes() {
        [b] if b.is_ascii_alphabetic() => Some(b.to_ascii_uppercase() - b'A'),
        _ => None,
    }
}

fn letter_message(raw: &str) -> String {
    format!("expected a single letter A-Z, got \"{}\"", raw)
}
