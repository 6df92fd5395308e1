//! Text encoding helpers

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Encode the UTF-8 bytes of `value` as standard, padded base64
pub fn to_base64(value: &str) -> String {
    BASE64.encode(value.as_bytes())
}
