use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptRequest {
    pub plaintext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_hex: Option<String>,
}

/// Success body of `POST /api/encrypt`.
///
/// The service echoes more fields than these (the original text and its
/// ascii/binary renderings); the client derives those locally and ignores
/// the extras.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    pub cipher_hex: String,
    pub cipher_binary: String,
    pub padded_hex: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptRequest {
    pub ciphertext_hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_hex: Option<String>,
}

/// Success body of `POST /api/decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    pub decrypted: String,
    pub ascii_str: String,
    pub binary: String,
    pub padded_hex: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_request_wire_field_names_match_service_contract() {
        let value = serde_json::to_value(EncryptRequest {
            plaintext: "Hi".to_string(),
            key_hex: None,
        })
        .expect("serialize");
        assert_eq!(value, serde_json::json!({ "plaintext": "Hi" }));

        let value = serde_json::to_value(DecryptRequest {
            ciphertext_hex: "a1b2".to_string(),
            key_hex: Some("00112233445566778899aabbccddeeff".to_string()),
        })
        .expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "ciphertext_hex": "a1b2",
                "key_hex": "00112233445566778899aabbccddeeff",
            })
        );
    }

    #[test]
    fn responses_tolerate_extra_echo_fields_from_the_service() {
        let body = serde_json::json!({
            "original": "Hi",
            "ascii": [72, 105],
            "ascii_str": "72 105",
            "binary": "01001000 01101001",
            "cipher_hex": "a1b2",
            "cipher_binary": "1010000110110010",
            "padded_hex": "4869",
        });
        let parsed: EncryptResponse = serde_json::from_value(body).expect("parse");
        assert_eq!(parsed.cipher_hex, "a1b2");
        assert_eq!(parsed.padded_hex, "4869");
    }
}
