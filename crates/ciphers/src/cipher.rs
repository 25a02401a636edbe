//! Cipher trait for classicrypt-ciphers
//!
//! The trait itself lives in the API crate; this module adds the runner that
//! turns any cipher into a total [`CipherOutput`].

use tracing::debug;

pub use classicrypt_api::traits::ClassicalCipher;
use classicrypt_api::{CipherOutput, Mode};

/// Build `C` from `key` and run it over `text`
///
/// Key validation happens before the text is looked at. Failures become an
/// output with an empty result and trace and a populated error.
pub fn execute<C: ClassicalCipher>(key: &C::Key, text: &str, mode: Mode) -> CipherOutput {
    debug!(cipher = C::name(), %mode, input_len = text.len(), "processing");

    let result = C::new(key).and_then(|cipher| cipher.process(text, mode));

    match &result {
        Ok(transcript) => debug!(
            cipher = C::name(),
            %mode,
            output_len = transcript.result.len(),
            steps = transcript.trace.len(),
            "completed"
        ),
        Err(e) => debug!(cipher = C::name(), %mode, kind = %e.kind(), "rejected"),
    }

    CipherOutput::from(result)
}
