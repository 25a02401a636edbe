//! Log events carry identifiers and lengths, never keys or text

use std::io;
use std::sync::{Arc, Mutex};

use classicrypt_ciphers::{affine_encrypt, enigma_process, vigenere_encrypt, EnigmaSettings};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured<F: FnOnce()>(f: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_completion_is_logged_without_key_material() {
    let logs = captured(|| {
        vigenere_encrypt("MEETMEATNOON", "SWORDFISH");
    });

    assert!(logs.contains("processing"));
    assert!(logs.contains("completed"));
    assert!(logs.contains("Vigenère"));
    assert!(!logs.contains("SWORDFISH"));
    assert!(!logs.contains("MEETMEATNOON"));
}

#[test]
fn test_rejection_is_logged_with_kind() {
    let logs = captured(|| {
        affine_encrypt("HELLO", 13, 8);
        let mut settings = EnigmaSettings::default();
        settings.plugboard = "QQ".to_string();
        enigma_process("HELLO", &settings);
    });

    assert!(logs.contains("rejected"));
    assert!(logs.contains("InvalidKey"));
    assert!(logs.contains("InvalidPlugboard"));
    assert!(!logs.contains("WARN"));
}
