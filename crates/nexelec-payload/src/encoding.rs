//! Payload string encodings.

use crate::error::PayloadError;
use crate::transcode::{base64_decode, base64_encode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a payload is rendered as a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadEncoding {
    /// Lowercase hexadecimal, two digits per byte.
    #[default]
    Hex,
    /// Standard base64 of the raw bytes.
    Base64,
}

impl PayloadEncoding {
    /// Get the encoding name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadEncoding::Hex => "hex",
            PayloadEncoding::Base64 => "base64",
        }
    }
}

impl std::fmt::Display for PayloadEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadEncoding {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(PayloadEncoding::Hex),
            "base64" => Ok(PayloadEncoding::Base64),
            _ => Err(PayloadError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Decode a payload string to raw bytes.
pub fn decode_payload(payload: &str, encoding: PayloadEncoding) -> Result<Vec<u8>, PayloadError> {
    match encoding {
        PayloadEncoding::Hex => Ok(hex::decode(payload)?),
        PayloadEncoding::Base64 => base64_decode(payload),
    }
}

/// Render raw bytes as a payload string.
pub fn encode_payload(bytes: &[u8], encoding: PayloadEncoding) -> String {
    match encoding {
        PayloadEncoding::Hex => hex::encode(bytes),
        PayloadEncoding::Base64 => base64_encode(bytes),
    }
}
