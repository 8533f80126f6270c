//! Nexelec downlink commands
//!
//! Downlinks are configuration commands sent to a sensor. A payload starts
//! with the [`PREAMBLE`] byte followed by any number of commands, each a
//! one-byte command id and a 0, 1 or 2 byte big-endian value:
//!
//! ```text
//! +------+------+-----------+------+-----------+----
//! | 0x55 | id_0 | value_0   | id_1 | value_1   | ...
//! +------+------+-----------+------+-----------+----
//! ```
//!
//! Every command id maps to a [`CommandDef`] in the static registry, which
//! fixes the value width and how the raw integer is interpreted (trigger,
//! boolean, fixed-point number or enumerated choice).
//!
//! # Example
//!
//! ```rust
//! use nexelec_downlink::{decode_downlink, encode_downlink, DownlinkEntry, CMD_DELTA_TEMPERATURE};
//! use nexelec_payload::PayloadEncoding;
//!
//! let payload = encode_downlink(
//!     &[DownlinkEntry::new(CMD_DELTA_TEMPERATURE, 2.5)],
//!     PayloadEncoding::Hex,
//! ).unwrap();
//! assert_eq!(payload, "550819");
//!
//! let decoded = decode_downlink(&payload, PayloadEncoding::Hex).unwrap();
//! assert_eq!(decoded[0].value.as_f64(), Some(2.5));
//! ```

mod codec;
mod commands;
mod constants;
mod error;
mod value;

pub use codec::*;
pub use commands::*;
pub use constants::*;
pub use error::*;
pub use value::*;
