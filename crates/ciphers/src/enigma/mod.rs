//! Enigma I rotor machine
//!
//! Three rotors chosen from I-V, a B or C reflector, ring settings and a
//! plugboard. Encryption and decryption are the same operation: with
//! identical settings, running the output back through the machine restores
//! the input.
//!
//! Each call starts from the configured positions. Rotor state is private
//! to the call and wiped when the call returns.

use classicrypt_algorithms::alphabet::{clean, to_index, to_letter};
use classicrypt_algorithms::{Plugboard, Reflector, ReflectorId, Rotor, RotorId, RotorState, SignalPath};
use classicrypt_api::{CipherOutput, Mode, Transcript};
use zeroize::Zeroize;

use crate::cipher::{execute, ClassicalCipher};
use crate::error::{validate, Result};

mod settings;

pub use settings::{EnigmaConfig, EnigmaSettings};

/// A configured machine
#[derive(Debug, Clone)]
pub struct Enigma {
    config: EnigmaConfig,
    path: SignalPath,
}

impl Enigma {
    /// Assemble a machine from a validated configuration
    pub fn from_config(config: EnigmaConfig) -> Self {
        let rings = config.rings();
        let rotors = config.rotors();
        let path = SignalPath::new(
            [0, 1, 2].map(|slot| Rotor::new(rotors[slot], rings[slot])),
            Reflector::new(config.reflector()),
            config.plugboard().clone(),
        );
        Self { config, path }
    }

    /// The validated configuration this machine was built from
    pub fn config(&self) -> &EnigmaConfig {
        &self.config
    }

    /// Run `text` through the machine from the configured start positions
    pub fn run(&self, text: &str) -> Result<Transcript> {
        let letters = clean(text);
        validate::non_empty("Message", &letters)?;

        let [left, middle, right] = self.config.rotors();
        let ring_letters = self.config.rings().map(to_letter);
        let reflector = self.config.reflector();

        let [pl, pm, pr] = self.config.positions();
        let mut state = RotorState::new(pl, pm, pr);
        let mut out = Transcript::with_capacity(letters.len(), letters.len());

        for (i, byte) in letters.bytes().enumerate() {
            let letter = to_letter(self.path.press(&mut state, to_index(byte)));
            out.push(letter);

            let [wl, wm, wr] = state.letters();
            out.step(format!(
                "[{:02}] {} → plugboard → {}[{} R:{}]/{}[{} R:{}]/{}[{} R:{}] → reflector {} → {}",
                i + 1,
                byte as char,
                right,
                wr,
                ring_letters[2],
                middle,
                wm,
                ring_letters[1],
                left,
                wl,
                ring_letters[0],
                reflector,
                letter
            ));
        }

        state.zeroize();
        Ok(out)
    }
}

impl ClassicalCipher for Enigma {
    type Key = EnigmaSettings;

    fn new(settings: &EnigmaSettings) -> Result<Self> {
        EnigmaConfig::from_settings(settings).map(Self::from_config)
    }

    fn name() -> &'static str {
        "Enigma"
    }

    fn encrypt(&self, plaintext: &str) -> Result<Transcript> {
        self.run(plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<Transcript> {
        self.run(ciphertext)
    }
}

/// Encrypt or decrypt `text`; the machine is its own inverse
pub fn enigma_process(text: &str, settings: &EnigmaSettings) -> CipherOutput {
    execute::<Enigma>(settings, text, Mode::Encrypt)
}

/// Parse a plugboard string into its letter pairs
pub fn parse_plugboard(pairs: &str) -> Result<Vec<(char, char)>> {
    Ok(Plugboard::parse(pairs)?.pairs())
}

/// Catalog entry for a rotor
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RotorInfo {
    /// Roman numeral identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Forward wiring as 26 letters, contact A first
    pub wiring: String,
    /// Window letter at which the rotor turns over its neighbour
    pub notch: char,
}

/// Catalog entry for a reflector
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReflectorInfo {
    /// Single-letter identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Wiring as 26 letters, contact A first
    pub wiring: String,
}

/// Rotors I-V with their wirings and notches
pub fn rotor_catalog() -> Vec<RotorInfo> {
    RotorId::ALL
        .iter()
        .map(|id| {
            let spec = id.spec();
            RotorInfo {
                id: spec.id,
                name: spec.name,
                wiring: spec.wiring.iter().map(|&b| b as char).collect(),
                notch: spec.notch as char,
            }
        })
        .collect()
}

/// Reflectors B and C with their wirings
pub fn reflector_catalog() -> Vec<ReflectorInfo> {
    ReflectorId::ALL
        .iter()
        .map(|id| {
            let spec = id.spec();
            ReflectorInfo {
                id: spec.id,
                name: spec.name,
                wiring: spec.wiring.iter().map(|&b| b as char).collect(),
            }
        })
        .collect()
}
