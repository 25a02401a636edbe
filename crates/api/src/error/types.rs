//! Error type definitions for cipher operations

/// Primary error type for cipher operations
///
/// Every variant is a user-facing diagnostic: the engine never panics on
/// malformed input, it reports one of these instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Text or key reduced to zero letters after cleaning
    #[error("{context} cannot be empty")]
    EmptyInput {
        context: &'static str,
    },

    /// Key material fails a precondition (set membership, range, shape)
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Unknown rotor or reflector identifier
    #[error("Invalid {context} selection: {message}")]
    InvalidSelection {
        context: &'static str,
        message: String,
    },

    /// Rotor start position is not a single letter A-Z
    #[error("Invalid start position for {context}: {message}")]
    InvalidPosition {
        context: &'static str,
        message: String,
    },

    /// Ring setting is not a single letter A-Z
    #[error("Invalid ring setting for {context}: {message}")]
    InvalidRing {
        context: &'static str,
        message: String,
    },

    /// Plugboard string does not parse into distinct letter pairs
    #[error("Invalid plugboard: {message}")]
    InvalidPlugboard {
        message: String,
    },

    /// The value has no multiplicative inverse for the modulus
    #[error("No modular inverse exists for {value} mod {modulus}")]
    NoInverse {
        value: i64,
        modulus: i64,
    },

    /// The key matrix has no inverse over Z/26Z
    #[error("Matrix is not invertible mod 26 ({context}). Choose different key values.")]
    SingularMatrix {
        context: &'static str,
    },

    /// Digraph input cannot be split into pairs
    #[error("{context} length must be even, got {actual} letters")]
    OddLength {
        context: &'static str,
        actual: usize,
    },
}

/// Fieldless view of an [`Error`], convenient for matching on categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    EmptyInput,
    InvalidKey,
    InvalidSelection,
    InvalidPosition,
    InvalidRing,
    InvalidPlugboard,
    NoInverse,
    SingularMatrix,
    OddLength,
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::InvalidKey { .. } => ErrorKind::InvalidKey,
            Self::InvalidSelection { .. } => ErrorKind::InvalidSelection,
            Self::InvalidPosition { .. } => ErrorKind::InvalidPosition,
            Self::InvalidRing { .. } => ErrorKind::InvalidRing,
            Self::InvalidPlugboard { .. } => ErrorKind::InvalidPlugboard,
            Self::NoInverse { .. } => ErrorKind::NoInverse,
            Self::SingularMatrix { .. } => ErrorKind::SingularMatrix,
            Self::OddLength { .. } => ErrorKind::OddLength,
        }
    }

    /// Replace the context of an existing error
    ///
    /// Variants without a context (`InvalidPlugboard`, `NoInverse`) are
    /// returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::EmptyInput { .. } => Self::EmptyInput { context },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSelection { message, .. } => Self::InvalidSelection { context, message },
            Self::InvalidPosition { message, .. } => Self::InvalidPosition { context, message },
            Self::InvalidRing { message, .. } => Self::InvalidRing { context, message },
            Self::SingularMatrix { .. } => Self::SingularMatrix { context },
            Self::OddLength { actual, .. } => Self::OddLength { context, actual },
            other @ (Self::InvalidPlugboard { .. } | Self::NoInverse { .. }) => other,
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::EmptyInput => "EmptyInput",
            Self::InvalidKey => "InvalidKey",
            Self::InvalidSelection => "InvalidSelection",
            Self::InvalidPosition => "InvalidPosition",
            Self::InvalidRing => "InvalidRing",
            Self::InvalidPlugboard => "InvalidPlugboard",
            Self::NoInverse => "NoInverse",
            Self::SingularMatrix => "SingularMatrix",
            Self::OddLength => "OddLength",
        };
        f.write_str(name)
    }
}
