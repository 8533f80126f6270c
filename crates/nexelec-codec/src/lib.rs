//! Nexelec sensor codec
//!
//! Translates between the compact radio payloads of Nexelec environmental
//! sensors (feel, rise, move, sign) and typed Rust values:
//!
//! - [`decode_downlink`] / [`encode_downlink`]: configuration commands sent
//!   to a sensor
//! - [`decode_uplink`]: telemetry, status and configuration messages sent by
//!   a sensor
//!
//! Payloads are strings in either hex or base64, selected per call with
//! [`PayloadEncoding`]. Every decoded type implements `serde::Serialize`.
//!
//! # Example
//!
//! ```rust
//! use nexelec_codec::{decode_uplink, encode_downlink, DownlinkEntry, PayloadEncoding, UplinkMessage};
//! use nexelec_codec::downlink::{CMD_MEASUREMENT_PERIOD, CMD_REBOOT};
//!
//! let payload = encode_downlink(
//!     &[
//!         DownlinkEntry::new(CMD_MEASUREMENT_PERIOD, 10),
//!         DownlinkEntry::trigger(CMD_REBOOT),
//!     ],
//!     PayloadEncoding::Hex,
//! )?;
//! assert_eq!(payload, "552f0a4a01");
//!
//! let message = decode_uplink("qgMYBDhuG4diCKIn", PayloadEncoding::Base64)?;
//! assert!(matches!(message, UplinkMessage::HistoricalData(_)));
//! # Ok::<(), nexelec_codec::CodecError>(())
//! ```

mod error;

pub use error::*;

pub use nexelec_downlink as downlink;
pub use nexelec_payload as payload;
pub use nexelec_uplink as uplink;

pub use nexelec_downlink::{CommandId, CommandValue, DecodedCommand, DecodedValue, DownlinkEntry};
pub use nexelec_payload::PayloadEncoding;
pub use nexelec_uplink::{MessageType, ProductType, UplinkMessage};

/// Decode a downlink payload into its commands, in payload order.
pub fn decode_downlink(payload: &str, encoding: PayloadEncoding) -> CodecResult<Vec<DecodedCommand>> {
    Ok(nexelec_downlink::decode_downlink(payload, encoding)?)
}

/// Encode commands into a downlink payload.
///
/// Fails on the first entry whose id is unknown or whose value is invalid.
pub fn encode_downlink(entries: &[DownlinkEntry], encoding: PayloadEncoding) -> CodecResult<String> {
    Ok(nexelec_downlink::encode_downlink(entries, encoding)?)
}

/// Decode an uplink payload.
pub fn decode_uplink(payload: &str, encoding: PayloadEncoding) -> CodecResult<UplinkMessage> {
    Ok(nexelec_uplink::decode_uplink(payload, encoding)?)
}
