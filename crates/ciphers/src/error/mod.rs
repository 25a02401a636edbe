//! Error handling for the cipher modules
//!
//! Uses the API error system and adds conversions for errors raised by the
//! primitives crate where the category depends on the caller.

// Re-export the primary API error system
pub use classicrypt_api::error::{validate, Error, ErrorKind, Result};

use classicrypt_algorithms::Error as PrimitiveError;

/// Convert a primitive error raised while resolving a catalog identifier
pub fn selection_error(err: PrimitiveError, context: &'static str) -> Error {
    match err {
        PrimitiveError::Parameter { reason, .. } => Error::InvalidSelection {
            context,
            message: reason.into_owned(),
        },
        other => Error::from(other),
    }
}

/// Extension trait to make conversions more ergonomic
pub trait PrimitiveResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self, context: &'static str) -> Result<T>;
}

impl<T> PrimitiveResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self, context: &'static str) -> Result<T> {
        self.map_err(|e| Error::from(e).with_context(context))
    }
}
