//! Payload transcoding for Nexelec sensor codecs.
//!
//! Radio payloads travel as either lowercase hexadecimal strings or base64
//! strings. This crate normalizes both renderings to bytes, converts between
//! them, and provides the [`BitReader`] primitive used to extract bit-packed
//! fields from uplink messages.
//!
//! # Example
//!
//! ```rust
//! use nexelec_payload::{base64_to_hex, hex_to_base64, BitField, BitReader};
//!
//! let b64 = hex_to_base64("aa05").unwrap();
//! assert_eq!(base64_to_hex(&b64).unwrap(), "aa05");
//!
//! let bytes = [0xaa, 0x05];
//! let reader = BitReader::new(&bytes);
//! assert_eq!(reader.read(BitField::new("message_type", 8, 8)).unwrap(), 0x05);
//! ```

mod bits;
mod encoding;
mod error;
mod transcode;

pub use bits::*;
pub use encoding::*;
pub use error::*;
pub use transcode::*;
