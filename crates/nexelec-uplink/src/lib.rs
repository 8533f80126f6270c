//! Nexelec uplink messages
//!
//! Uplinks are messages emitted by a sensor. Every payload starts with a
//! product type byte and a message type byte; the rest is a bit-packed
//! layout specific to the message type:
//!
//! ```text
//! +--------------+--------------+---------------------------------
//! | product type | message type | fields (MSB-first bit offsets)
//! |   bits 0-7   |   bits 8-15  | bits 16..
//! +--------------+--------------+---------------------------------
//! ```
//!
//! Four message layouts are decoded:
//!
//! - **Historical data**: a run of CO2, temperature or humidity records
//! - **Periodic data**: the latest measurement of every sensor channel
//! - **Product status**: versions, power and sensor health
//! - **Product configuration**: an echo of the active settings
//!
//! The Sigfox message types are recognized but rejected with
//! [`UplinkError::NotImplemented`].
//!
//! # Example
//!
//! ```rust
//! use nexelec_payload::PayloadEncoding;
//! use nexelec_uplink::{decode_uplink, BatteryVoltage, UplinkMessage};
//!
//! let message = decode_uplink("qgUIGy0EASSYAfScQA==", PayloadEncoding::Base64).unwrap();
//! match message {
//!     UplinkMessage::ProductStatus(status) => {
//!         assert_eq!(status.battery_voltage, BatteryVoltage::Millivolts(3600));
//!     }
//!     other => panic!("unexpected message: {:?}", other),
//! }
//! ```

#[macro_use]
mod macros;

mod constants;
mod decoder;
mod error;
mod layout;
mod registry;
mod types;

pub use constants::*;
pub use decoder::*;
pub use error::*;
pub use registry::*;
pub use types::*;
