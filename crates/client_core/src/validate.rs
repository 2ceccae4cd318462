//! Local input validation for the decrypt path. Nothing here touches the
//! network; a validation failure means no request is constructed at all.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input is empty")]
    EmptyInput,
    #[error("invalid hex format, only 0-9, a-f, A-F allowed")]
    InvalidHexChars,
    #[error("hex string must have even length")]
    OddHexLength,
}

/// Strip whitespace from raw ciphertext input and check it is well-formed
/// hex. Check order is fixed: emptiness, then alphabet, then parity, so an
/// odd-length string with bad characters reports the alphabet problem.
pub fn clean_ciphertext_hex(raw: &str) -> Result<String, ValidationError> {
    let cleaned: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if !cleaned.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidHexChars);
    }
    if cleaned.len() % 2 != 0 {
        return Err(ValidationError::OddHexLength);
    }
    Ok(cleaned)
}

/// The encrypt path only requires presence; key material is passed through
/// unvalidated since the service is the authority on key format.
pub fn validate_plaintext(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_only_input_is_rejected() {
        assert_eq!(clean_ciphertext_hex(""), Err(ValidationError::EmptyInput));
        assert_eq!(
            clean_ciphertext_hex(" \t\n "),
            Err(ValidationError::EmptyInput)
        );
    }

    #[test]
    fn non_hex_characters_are_rejected() {
        assert_eq!(
            clean_ciphertext_hex("1g2b"),
            Err(ValidationError::InvalidHexChars)
        );
    }

    #[test]
    fn odd_length_is_rejected_after_alphabet() {
        assert_eq!(
            clean_ciphertext_hex("abc"),
            Err(ValidationError::OddHexLength)
        );
        // Bad alphabet wins over bad parity.
        assert_eq!(
            clean_ciphertext_hex("abz"),
            Err(ValidationError::InvalidHexChars)
        );
    }

    #[test]
    fn whitespace_is_stripped_and_case_preserved() {
        assert_eq!(
            clean_ciphertext_hex("DEad  Beef"),
            Ok("DEadBeef".to_string())
        );
        assert_eq!(
            clean_ciphertext_hex("a1\nb2\tc3 d4"),
            Ok("a1b2c3d4".to_string())
        );
    }

    #[test]
    fn plaintext_only_needs_presence() {
        assert_eq!(validate_plaintext(""), Err(ValidationError::EmptyInput));
        assert!(validate_plaintext("x").is_ok());
        // Whitespace counts as content on the encrypt path.
        assert!(validate_plaintext("  ").is_ok());
    }
}
