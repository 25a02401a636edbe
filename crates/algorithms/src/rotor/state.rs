//! Rotor positions and the stepping mechanism

use zeroize::Zeroize;

use crate::alphabet::to_letter;

use super::Rotor;

/// Positions of the left, middle and right rotors, each `0..=25`
///
/// A state belongs to a single enciphering run: it is created from the start
/// positions, advanced once per letter, and dropped when the run ends.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct RotorState {
    positions: [u8; 3],
}

impl RotorState {
    /// Start positions, `0` = A
    pub fn new(left: u8, middle: u8, right: u8) -> Self {
        Self {
            positions: [left % 26, middle % 26, right % 26],
        }
    }

    /// Current positions, left to right
    pub fn positions(&self) -> [u8; 3] {
        self.positions
    }

    /// Current window letters, left to right
    pub fn letters(&self) -> [char; 3] {
        self.positions.map(to_letter)
    }

    /// Advance the rotors for one key press
    ///
    /// The right rotor always steps. The middle rotor steps when the right
    /// rotor is on its notch, and also when the middle rotor itself is on
    /// its notch, in which case it carries the left rotor along. The second
    /// rule is the pawl mechanism's double step.
    pub fn step(&mut self, rotors: &[Rotor; 3]) {
        let [left, middle, right] = &mut self.positions;

        let middle_at_notch = rotors[1].at_notch(*middle);
        let right_at_notch = rotors[2].at_notch(*right);

        if middle_at_notch {
            *left = (*left + 1) % 26;
        }
        if right_at_notch || middle_at_notch {
            *middle = (*middle + 1) % 26;
        }
        *right = (*right + 1) % 26;
    }
}
