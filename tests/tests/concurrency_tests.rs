//! Calls share no state, so concurrent use matches sequential use

use std::thread;

use classicrypt_api::{CipherOutput, Mode};
use classicrypt_ciphers::{process, AffineKey, CipherSpec, EnigmaSettings};

fn specs() -> Vec<CipherSpec> {
    vec![
        CipherSpec::Vigenere {
            key: "LEMON".to_string(),
        },
        CipherSpec::Affine(AffineKey::new(7, 3)),
        CipherSpec::Playfair {
            keyword: "MONARCHY".to_string(),
        },
        CipherSpec::Hill {
            matrix: vec![vec![3, 3], vec![2, 5]],
        },
        CipherSpec::Enigma(EnigmaSettings::default()),
        CipherSpec::Enigma(EnigmaSettings::new(
            ["IV", "II", "V"],
            ["Q", "E", "V"],
            ["B", "U", "L"],
            "C",
            "AB CD EF",
        )),
    ]
}

static MESSAGES: [&str; 4] = [
    "attack at dawn",
    "the quick brown fox jumps over the lazy dog",
    "balloon",
    "ENIGMA",
];

fn sequential() -> Vec<CipherOutput> {
    let specs = specs();
    specs
        .iter()
        .flat_map(|spec| MESSAGES.iter().map(move |m| process(m, spec, Mode::Encrypt)))
        .collect()
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let expected = sequential();
    let specs = specs();

    for _ in 0..4 {
        let outputs: Vec<CipherOutput> = thread::scope(|s| {
            let handles: Vec<_> = specs
                .iter()
                .flat_map(|spec| {
                    MESSAGES
                        .iter()
                        .map(move |m| s.spawn(move || process(m, spec, Mode::Encrypt)))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("cipher thread panicked"))
                .collect()
        });
        assert_eq!(outputs, expected);
    }
}

#[test]
fn test_shared_machine_across_threads() {
    use classicrypt_api::ClassicalCipher;
    use classicrypt_ciphers::Enigma;

    let machine = Enigma::new(&EnigmaSettings::default()).expect("default settings are valid");
    let results: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| machine.run("AAAAA").map(|t| t.result)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked").expect("run succeeds"))
            .collect()
    });
    // Every call starts from the configured positions
    assert!(results.iter().all(|r| r == "BDZGO"));
}
