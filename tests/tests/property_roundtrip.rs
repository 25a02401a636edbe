//! Property-based round-trip tests for every cipher

use classicrypt_algorithms::alphabet::clean;
use classicrypt_algorithms::ModMatrix;
use classicrypt_api::{ClassicalCipher, Mode};
use classicrypt_ciphers::{
    affine_decrypt, affine_encrypt, enigma_process, hill_decrypt, hill_encrypt, prepare_plaintext,
    valid_a_values, vigenere_decrypt, vigenere_encrypt, EnigmaSettings, Playfair,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Arbitrary text with at least one letter
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,.!0-9]{0,80}"
}

fn letters() -> impl Strategy<Value = String> {
    "[A-Z]{1,80}"
}

fn rotor() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["I", "II", "III", "IV", "V"])
}

fn letter() -> impl Strategy<Value = String> {
    (0u8..26).prop_map(|i| ((b'A' + i) as char).to_string())
}

/// Up to 13 disjoint pairs from a shuffled alphabet
fn plugboard() -> impl Strategy<Value = String> {
    (Just((b'A'..=b'Z').collect::<Vec<u8>>()).prop_shuffle(), 0usize..=13).prop_map(
        |(alphabet, pairs)| {
            alphabet
                .chunks(2)
                .take(pairs)
                .map(|p| format!("{}{}", p[0] as char, p[1] as char))
                .collect::<Vec<_>>()
                .join(" ")
        },
    )
}

fn enigma_settings() -> impl Strategy<Value = EnigmaSettings> {
    (
        [rotor(), rotor(), rotor()],
        [letter(), letter(), letter()],
        [letter(), letter(), letter()],
        prop::sample::select(vec!["B", "C"]),
        plugboard(),
    )
        .prop_map(|(rotors, positions, rings, reflector, plugboard)| EnigmaSettings {
            rotors: rotors.map(str::to_string),
            positions,
            rings,
            reflector: reflector.to_string(),
            plugboard,
        })
}

proptest! {
    #[test]
    fn vigenere_roundtrip(text in text(), key in "[A-Za-z]{1,12}") {
        let ct = vigenere_encrypt(&text, &key);
        prop_assert!(ct.is_ok());
        prop_assert_eq!(ct.trace.len(), ct.result.len());

        let pt = vigenere_decrypt(&ct.result, &key);
        prop_assert_eq!(pt.result, clean(&text));
    }

    #[test]
    fn affine_roundtrip(
        text in text(),
        a in prop::sample::select(valid_a_values().to_vec()),
        b in 0i64..26,
    ) {
        let ct = affine_encrypt(&text, a, b);
        let pt = affine_decrypt(&ct.result, a, b);
        prop_assert_eq!(pt.result, clean(&text));
    }

    #[test]
    fn affine_rejects_even_or_thirteen(text in text(), k in 0i64..13, b in 0i64..26) {
        // 2k and 13 share a factor with 26
        prop_assert!(!affine_encrypt(&text, 2 * k, b).is_ok());
        prop_assert!(!affine_encrypt(&text, 13, b).is_ok());
    }

    #[test]
    fn playfair_raw_decrypt_recovers_prepared_text(text in text(), keyword in "[A-Za-z]{1,10}") {
        let cipher = Playfair::new(&keyword).unwrap();
        let ct = cipher.encrypt(&text).unwrap();
        let raw = cipher.decrypt_raw(&ct.result).unwrap();
        prop_assert_eq!(raw.result, prepare_plaintext(&text));
    }

    #[test]
    fn hill_roundtrip(seed in any::<u64>(), n in 2usize..=5, blocks in 1usize..8, fill in letters()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let key: Vec<Vec<i64>> = ModMatrix::random_invertible(&mut rng, n)
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(i64::from).collect())
            .collect();

        // Block-aligned input so no padding is added
        let text: String = fill.chars().cycle().take(n * blocks).collect();
        let ct = hill_encrypt(&text, &key);
        prop_assert_eq!(ct.result.len(), text.len());
        prop_assert_eq!(hill_decrypt(&ct.result, &key).result, text);
    }

    #[test]
    fn enigma_is_self_reciprocal(settings in enigma_settings(), text in text()) {
        let ct = enigma_process(&text, &settings);
        prop_assert!(ct.is_ok(), "{:?}", ct.error);
        prop_assert_eq!(enigma_process(&ct.result, &settings).result, clean(&text));
    }

    #[test]
    fn enigma_never_maps_letter_to_itself(settings in enigma_settings(), text in letters()) {
        let ct = enigma_process(&text, &settings);
        for (p, c) in text.chars().zip(ct.result.chars()) {
            prop_assert_ne!(p, c);
        }
    }

    #[test]
    fn dispatcher_never_panics(text in ".{0,40}", key in ".{0,12}", a in any::<i64>(), b in any::<i64>()) {
        use classicrypt_ciphers::{process, AffineKey, CipherSpec};
        for spec in [
            CipherSpec::Vigenere { key: key.clone() },
            CipherSpec::Affine(AffineKey::new(a, b)),
            CipherSpec::Playfair { keyword: key.clone() },
        ] {
            for mode in [Mode::Encrypt, Mode::Decrypt] {
                let out = process(&text, &spec, mode);
                prop_assert!(out.is_ok() || (out.result.is_empty() && out.trace.is_empty()));
            }
        }
    }
}
