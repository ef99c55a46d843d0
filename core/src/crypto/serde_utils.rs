//! Base64 serialization utilities for serde
//!
//! Byte vectors and fixed-size byte arrays travel as base64 strings in JSON.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize/deserialize a `Vec<u8>` as a base64 string.
///
/// Usage:
/// ```ignore
/// #[serde(with = "crate::crypto::serde_utils::base64_bytes")]
/// pub field: Vec<u8>,
/// ```
pub mod base64_bytes {
    use super::*;

    pub fn serialize<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(data))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        BASE64.decode(&s).map_err(serde::de::Error::custom)
    }
}

/// Serialize/deserialize a `[u8; N]` array as a base64 string,
/// rejecting any other decoded length.
///
/// Usage:
/// ```ignore
/// #[serde(with = "crate::crypto::serde_utils::base64_array")]
/// pub nonce: [u8; 12],
/// ```
pub mod base64_array {
    use super::*;

    pub fn serialize<S, const N: usize>(data: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(data))
    }

    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        let bytes = BASE64.decode(&s).map_err(serde::de::Error::custom)?;
        let len = bytes.len();
        bytes.try_into().map_err(|_| {
            serde::de::Error::custom(format!("invalid length: expected {} bytes, got {}", N, len))
        })
    }
}

/// Decode a standard base64 string into bytes
pub fn decode_base64(s: &str) -> crate::Result<Vec<u8>> {
    BASE64
        .decode(s.trim())
        .map_err(|e| crate::Error::Encoding(e.to_string()))
}

/// Encode bytes as a standard base64 string
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestVec {
        #[serde(with = "base64_bytes")]
        data: Vec<u8>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestArray {
        #[serde(with = "base64_array")]
        nonce: [u8; 12],
    }

    #[test]
    fn test_base64_bytes_json_form() {
        let original = TestVec { data: vec![1, 2, 3, 4, 5] };
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#"{"data":"AQIDBAU="}"#);
        let decoded: TestVec = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_base64_array_length_is_checked() {
        let original = TestArray { nonce: [9u8; 12] };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: TestArray = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);

        // 16 bytes of zeros
        let err = serde_json::from_str::<TestArray>(r#"{"nonce":"AAAAAAAAAAAAAAAAAAAAAA=="}"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected 12 bytes, got 16"));
    }

    #[test]
    fn test_decode_base64_rejects_garbage() {
        assert_eq!(decode_base64(" AQID\n").unwrap(), vec![1, 2, 3]);
        assert!(matches!(decode_base64("not base64!"), Err(crate::Error::Encoding(_))));
    }
}
