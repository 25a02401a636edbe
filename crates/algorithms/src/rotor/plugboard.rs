//! Plugboard (Steckerbrett)

use classicrypt_params::classical::enigma::MAX_PLUG_PAIRS;

use crate::alphabet::{to_index, to_letter};
use crate::error::{Error, Result};

/// A partial involution on the alphabet: each letter is wired to at most
/// one other letter, symmetrically, never to itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    map: [u8; 26],
}

impl Default for Plugboard {
    fn default() -> Self {
        let mut map = [0u8; 26];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { map }
    }
}

impl Plugboard {
    /// A plugboard with no cables
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated letter pairs such as `"AB cd EF"`
    ///
    /// Every pair must be exactly two letters, a letter cannot be plugged to
    /// itself, and no letter may appear in more than one pair. An empty or
    /// blank string yields an empty plugboard.
    pub fn parse(pairs: &str) -> Result<Self> {
        let mut board = Self::default();
        let mut used = [false; 26];

        for pair in pairs.split_whitespace() {
            let upper = pair.to_ascii_uppercase();
            let bytes = upper.as_bytes();
            if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_uppercase) {
                return Err(Error::Plugboard {
                    pair: pair.to_string(),
                    reason: "pairs must be two letters, like \"AB CD\"",
                });
            }

            let (a, b) = (to_index(bytes[0]), to_index(bytes[1]));
            if a == b {
                return Err(Error::Plugboard {
                    pair: pair.to_string(),
                    reason: "cannot plug a letter to itself",
                });
            }
            if used[a as usize] || used[b as usize] {
                return Err(Error::Plugboard {
                    pair: pair.to_string(),
                    reason: "letter used more than once",
                });
            }

            used[a as usize] = true;
            used[b as usize] = true;
            board.map[a as usize] = b;
            board.map[b as usize] = a;
        }

        debug_assert!(board.pairs().len() <= MAX_PLUG_PAIRS);
        Ok(board)
    }

    /// Substitute `n` if it is plugged, otherwise pass it through
    #[inline]
    pub fn swap(&self, n: u8) -> u8 {
        self.map[n as usize % 26]
    }

    /// Whether `n` has a cable
    pub fn is_plugged(&self, n: u8) -> bool {
        self.swap(n) != n % 26
    }

    /// The installed pairs, each ordered alphabetically, sorted by first letter
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.map
            .iter()
            .enumerate()
            .filter(|&(i, &j)| (i as u8) < j)
            .map(|(i, &j)| (to_letter(i as u8), to_letter(j)))
            .collect()
    }
}
