//! Core types shared by every cipher in the classicrypt library
//!
//! Results are produced fresh for each call and never mutated after they are
//! returned; nothing here holds state across calls.

use core::fmt;

use crate::{Error, ErrorKind, Result};

/// Direction of a cipher operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Lowercase name, as used in log events
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }

    /// What the input text is called in this direction
    pub fn input_label(&self) -> &'static str {
        match self {
            Mode::Encrypt => "Plaintext",
            Mode::Decrypt => "Ciphertext",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful output of a cipher: the transformed text and one
/// human-readable record per processing step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    pub result: String,
    pub trace: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript with room for `steps` trace records
    pub fn with_capacity(letters: usize, steps: usize) -> Self {
        Self {
            result: String::with_capacity(letters),
            trace: Vec::with_capacity(steps),
        }
    }

    /// Append output text
    pub fn push_str(&mut self, text: &str) {
        self.result.push_str(text);
    }

    /// Append a single output letter
    pub fn push(&mut self, letter: char) {
        self.result.push(letter);
    }

    /// Record a trace step
    pub fn step(&mut self, record: String) {
        self.trace.push(record);
    }
}

/// Total result handed to presentation layers
///
/// On success `error` is `None`; on failure `result` and `trace` are empty
/// and `error` holds the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipherOutput {
    pub result: String,
    pub trace: Vec<String>,
    pub error: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub error_kind: Option<ErrorKind>,
}

impl CipherOutput {
    /// Build a successful output
    pub fn success(transcript: Transcript) -> Self {
        Self {
            result: transcript.result,
            trace: transcript.trace,
            error: None,
            error_kind: None,
        }
    }

    /// Build a failed output from an error
    pub fn failure(error: &Error) -> Self {
        Self {
            result: String::new(),
            trace: Vec::new(),
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
        }
    }

    /// Whether the call succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Result<Transcript>> for CipherOutput {
    fn from(result: Result<Transcript>) -> Self {
        match result {
            Ok(transcript) => Self::success(transcript),
            Err(e) => Self::failure(&e),
        }
    }
}
