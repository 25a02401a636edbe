//! Loads known-answer suites from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use super::error::{KatError, Result};
use super::model::KatSuite;

/// Every suite shipped with the crate
pub const SUITE_NAMES: [&str; 5] = ["vigenere", "affine", "playfair", "hill", "enigma"];

static KAT_DIR: Lazy<PathBuf> = Lazy::new(|| {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("kat_json")
});

/// Load `<name>.json` from the vector directory
pub fn load_suite_by_name(name: &str) -> Result<KatSuite> {
    let path = KAT_DIR.join(format!("{}.json", name));
    let json = fs::read_to_string(&path).map_err(|source| KatError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| KatError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load every suite in [`SUITE_NAMES`]
pub fn load_all() -> Result<Vec<KatSuite>> {
    SUITE_NAMES.iter().map(|name| load_suite_by_name(name)).collect()
}
