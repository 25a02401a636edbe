// tests/kat_tests.rs
use classicrypt_tests::suites::kat::{load_all, loader, runner::run_suite};

fn run_named(name: &str) {
    let suite = loader::load_suite_by_name(name)
        .unwrap_or_else(|e| panic!("Failed to load {} suite: {}", name, e));
    assert_eq!(suite.suite_name, name);
    assert!(!suite.tests.is_empty());

    println!("Running known-answer suite: {}", suite.suite_name);
    let passed = run_suite(&suite).unwrap_or_else(|e| panic!("{}", e));
    assert_eq!(passed, suite.tests.len());
}

#[test]
fn test_vigenere_kat() {
    run_named("vigenere");
}

#[test]
fn test_affine_kat() {
    run_named("affine");
}

#[test]
fn test_playfair_kat() {
    run_named("playfair");
}

#[test]
fn test_hill_kat() {
    run_named("hill");
}

#[test]
fn test_enigma_kat() {
    run_named("enigma");
}

#[test]
fn test_case_ids_are_unique() {
    for suite in load_all().expect("all suites load") {
        let mut ids: Vec<u64> = suite.tests.iter().map(|c| c.tc_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), suite.tests.len(), "duplicate tcId in {}", suite.suite_name);
    }
}
