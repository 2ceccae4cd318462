//! Transform commands queued from UI to the backend worker.

/// One command is constructed per submit action and never reused; the
/// decrypt hex is the validator's cleaned output.
#[derive(Debug)]
pub enum BackendCommand {
    Encrypt {
        plaintext: String,
        key_hex: Option<String>,
    },
    Decrypt {
        ciphertext_hex: String,
        key_hex: Option<String>,
    },
}
