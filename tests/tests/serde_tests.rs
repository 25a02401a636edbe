//! JSON shapes seen by presentation layers

use classicrypt_api::{CipherOutput, ErrorKind, Mode};
use classicrypt_ciphers::{
    cipher_catalog, process, reflector_catalog, rotor_catalog, validate_matrix, AffineKey,
    CipherSpec, EnigmaSettings,
};
use serde_json::json;

#[test]
fn test_success_output_shape() {
    let spec = CipherSpec::Affine(AffineKey::default());
    let out = process("HELLO", &spec, Mode::Encrypt);
    let value = serde_json::to_value(&out).unwrap();

    assert_eq!(value["result"], "RCLLA");
    assert_eq!(value["trace"].as_array().map(Vec::len), Some(5));
    assert!(value["error"].is_null());
    assert!(value.get("error_kind").is_none());
}

#[test]
fn test_failure_output_shape() {
    let spec = CipherSpec::Playfair {
        keyword: "KEY".to_string(),
    };
    let out = process("ABC", &spec, Mode::Decrypt);
    let value = serde_json::to_value(&out).unwrap();

    assert_eq!(value["result"], "");
    assert_eq!(value["trace"], json!([]));
    assert_eq!(value["error"], "Ciphertext length must be even, got 3 letters");
    assert_eq!(value["error_kind"], "OddLength");

    let back: CipherOutput = serde_json::from_value(value).unwrap();
    assert_eq!(back.error_kind, Some(ErrorKind::OddLength));
}

#[test]
fn test_spec_from_request_json() {
    let request = json!({
        "cipher": "enigma",
        "rotors": ["IV", "II", "V"],
        "positions": ["Q", "E", "V"],
        "rings": ["B", "U", "L"],
        "reflector": "C",
        "plugboard": "AB CD EF"
    });
    let spec: CipherSpec = serde_json::from_value(request).unwrap();
    assert_eq!(
        spec,
        CipherSpec::Enigma(EnigmaSettings::new(
            ["IV", "II", "V"],
            ["Q", "E", "V"],
            ["B", "U", "L"],
            "C",
            "AB CD EF"
        ))
    );

    let mode: Mode = serde_json::from_value(json!("decrypt")).unwrap();
    assert_eq!(process("WQDZYJZBPW", &spec, mode).result, "HELLOWORLD");
}

#[test]
fn test_spec_roundtrips_through_json() {
    let specs = [
        CipherSpec::Vigenere {
            key: "LEMON".to_string(),
        },
        CipherSpec::Affine(AffineKey::new(5, 8)),
        CipherSpec::Hill {
            matrix: vec![vec![3, 3], vec![2, 5]],
        },
    ];
    for spec in specs {
        let text = serde_json::to_string(&spec).unwrap();
        let back: CipherSpec = serde_json::from_str(&text).unwrap();
        assert_eq!(back, spec);
    }
    assert_eq!(
        serde_json::to_value(CipherSpec::Affine(AffineKey::new(5, 8))).unwrap(),
        json!({ "cipher": "affine", "a": 5, "b": 8 })
    );
}

#[test]
fn test_catalogs_serialize() {
    let rotors = serde_json::to_value(rotor_catalog()).unwrap();
    assert_eq!(rotors[2]["id"], "III");
    assert_eq!(rotors[2]["notch"], "V");

    let reflectors = serde_json::to_value(reflector_catalog()).unwrap();
    assert_eq!(reflectors[0]["name"], "UKW-B");

    let report = serde_json::to_value(validate_matrix(&[vec![3, 3], vec![2, 5]])).unwrap();
    assert_eq!(report["valid"], true);
    assert_eq!(report["determinant"], 9);

    assert_eq!(cipher_catalog().len(), 5);
}
