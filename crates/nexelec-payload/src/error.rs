//! Error types for nexelec-payload.

use thiserror::Error;

/// Errors that can occur while normalizing or reading a payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    /// The payload is not a valid hexadecimal string.
    #[error("invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The payload is not a valid base64 string.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Unrecognized payload encoding name.
    #[error("invalid payload encoding \"{0}\" (expected \"hex\" or \"base64\")")]
    UnknownEncoding(String),

    /// A bit field extends past the end of the payload.
    #[error("field `{field}` truncated: needs bits {offset}..{end}, payload has {available} bits")]
    Truncated {
        /// Name of the field being read.
        field: &'static str,
        /// First bit of the field.
        offset: usize,
        /// One past the last bit of the field.
        end: usize,
        /// Number of bits in the payload.
        available: usize,
    },

    /// A bit field is wider than the reader supports.
    #[error("field `{field}` is {width} bits wide (max {max})")]
    FieldTooWide {
        /// Name of the field being read.
        field: &'static str,
        /// Requested width.
        width: usize,
        /// Maximum supported width.
        max: usize,
    },
}

impl PayloadError {
    /// Create an invalid hex character error.
    pub fn invalid_hex_char(c: char, index: usize) -> Self {
        PayloadError::InvalidHex(hex::FromHexError::InvalidHexCharacter { c, index })
    }
}
