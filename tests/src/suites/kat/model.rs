//! Data model for known-answer vectors.

use classicrypt_api::{ErrorKind, Mode};
use classicrypt_ciphers::CipherSpec;
use serde::Deserialize;

/// One vector: a cipher with its key, an input, and the expected outcome
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KatCase {
    pub tc_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    pub spec: CipherSpec,
    #[serde(default)]
    pub mode: Mode,
    pub input: String,
    /// Expected `result` on success
    #[serde(default)]
    pub expected: Option<String>,
    /// Expected error category on failure
    #[serde(default)]
    pub expected_error: Option<ErrorKind>,
    /// Expected number of trace records
    #[serde(default)]
    pub trace_len: Option<usize>,
}

/// All vectors for one cipher
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KatSuite {
    pub suite_name: String,
    pub tests: Vec<KatCase>,
}
