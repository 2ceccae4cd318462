/// Largest plaintext the transform service accepts, in characters.
///
/// The service rejects anything larger with a 413; the client only uses this
/// for hint text, the service stays the authority.
pub const MAX_PLAINTEXT_CHARS: usize = 4096;

/// Largest ciphertext hex string the transform service accepts, in characters.
pub const MAX_CIPHERTEXT_HEX_CHARS: usize = 8192;
