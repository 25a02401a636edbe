//! Rotor stepping, checked directly against the primitives

use classicrypt_algorithms::{Rotor, RotorId, RotorState};

fn rotors(left: RotorId, middle: RotorId, right: RotorId) -> [Rotor; 3] {
    [Rotor::new(left, 0), Rotor::new(middle, 0), Rotor::new(right, 0)]
}

fn window(state: &RotorState) -> String {
    state.letters().iter().collect()
}

#[test]
fn test_double_step_sequence() {
    // II in the middle (notch E), III on the right (notch V)
    let rotors = rotors(RotorId::I, RotorId::II, RotorId::III);
    let mut state = RotorState::new(0, 3, 20);
    assert_eq!(window(&state), "ADU");

    let mut seen = Vec::new();
    for _ in 0..4 {
        state.step(&rotors);
        seen.push(window(&state));
    }
    // The middle rotor moves on two consecutive presses
    assert_eq!(seen, ["ADV", "AEW", "BFX", "BFY"]);
}

#[test]
fn test_right_rotor_steps_every_press() {
    let rotors = rotors(RotorId::I, RotorId::II, RotorId::III);
    let mut state = RotorState::new(0, 0, 0);
    for i in 1..=21u8 {
        state.step(&rotors);
        assert_eq!(state.positions()[2], i % 26);
    }
    // Passing V carried the middle rotor once
    assert_eq!(state.positions(), [0, 0, 21]);
    state.step(&rotors);
    assert_eq!(state.positions(), [0, 1, 22]);
}

#[test]
fn test_ring_setting_moves_turnover() {
    let plain = Rotor::new(RotorId::III, 0);
    let ringed = Rotor::new(RotorId::III, 1);
    assert_eq!(plain.turnover_position(), 21);
    assert_eq!(ringed.turnover_position(), 20);
    assert!(ringed.at_notch(20));
    assert!(!ringed.at_notch(21));
}

#[test]
fn test_full_cycle_period() {
    let rotors = rotors(RotorId::V, RotorId::IV, RotorId::I);
    let start = RotorState::new(0, 0, 0);
    let mut state = start.clone();
    let mut steps = 0u32;
    loop {
        state.step(&rotors);
        steps += 1;
        if state == start {
            break;
        }
        assert!(steps < 26 * 26 * 26, "rotor state never returned to start");
    }
    // Double stepping shortens the period from 26³ to 26·25·26
    assert_eq!(steps, 26 * 25 * 26);
}
