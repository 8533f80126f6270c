//! Conversions between hex, base64 and binary-digit renderings.

use crate::error::PayloadError;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

/// Standard alphabet decoder that accepts input with or without `=` padding.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Binary expansion of each hex digit, indexed by nibble value.
const NIBBLE_BITS: [&str; 16] = [
    "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111", "1000", "1001", "1010",
    "1011", "1100", "1101", "1110", "1111",
];

pub(crate) fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub(crate) fn base64_decode(source: &str) -> Result<Vec<u8>, PayloadError> {
    Ok(STANDARD_LENIENT.decode(source)?)
}

/// Re-encode a hex string as base64.
///
/// Fails if the string has an odd length or contains non-hex characters.
pub fn hex_to_base64(source: &str) -> Result<String, PayloadError> {
    let bytes = hex::decode(source)?;
    Ok(base64_encode(&bytes))
}

/// Re-encode a base64 string as lowercase hex.
pub fn base64_to_hex(source: &str) -> Result<String, PayloadError> {
    let bytes = base64_decode(source)?;
    Ok(hex::encode(bytes))
}

/// Expand a hex string to a string of binary digits, four per hex digit.
///
/// Input is case-insensitive. Leading zeros are kept, so the output is always
/// exactly `4 * source.len()` characters.
pub fn hex_to_binary_string(source: &str) -> Result<String, PayloadError> {
    let mut out = String::with_capacity(source.len() * 4);
    for (index, c) in source.chars().enumerate() {
        let nibble = c
            .to_ascii_lowercase()
            .to_digit(16)
            .ok_or_else(|| PayloadError::invalid_hex_char(c, index))?;
        out.push_str(NIBBLE_BITS[nibble as usize]);
    }
    Ok(out)
}
