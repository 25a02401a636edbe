//! Error handling for cipher primitives

use std::borrow::Cow;

use classicrypt_api::Error as CoreError;

/// The error type for cipher primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Value has no multiplicative inverse for the modulus
    #[error("No modular inverse exists for {value} mod {modulus}")]
    NoInverse {
        /// Value that was inverted
        value: i64,
        /// Modulus of the ring
        modulus: i64,
    },

    /// Matrix has no inverse over the ring
    #[error("{size}x{size} matrix is not invertible mod 26")]
    Singular {
        /// Dimension of the matrix
        size: usize,
    },

    /// Malformed plugboard pair
    #[error("{reason}: \"{pair}\"")]
    Plugboard {
        /// The offending pair as written by the caller
        pair: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for cipher primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidKey {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidKey {
                context,
                message: format!("expected {}, got {}", expected, actual),
            },
            Error::NoInverse { value, modulus } => CoreError::NoInverse { value, modulus },
            Error::Singular { .. } => CoreError::SingularMatrix {
                context: "no invertible pivot found during Gauss-Jordan elimination",
            },
            err @ Error::Plugboard { .. } => CoreError::InvalidPlugboard {
                message: err.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
