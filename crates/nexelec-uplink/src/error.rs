//! Error types for nexelec-uplink.

use crate::registry::MessageType;
use nexelec_payload::PayloadError;
use thiserror::Error;

/// Errors that can occur when decoding an uplink.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UplinkError {
    /// Payload string could not be normalized, or a field runs past its end.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// First byte is not a known product type.
    #[error("invalid product type code : \"{0}\"")]
    UnknownProductType(u8),

    /// Second byte is not a known message type.
    #[error("invalid message type code : \"{0}\"")]
    UnknownMessageType(u8),

    /// Message type is known but has no decoder.
    #[error("{0} not implemented")]
    NotImplemented(MessageType),

    /// Raw value has no entry in the field's label table.
    #[error("field `{field}` has unmapped value {value}")]
    UnmappedValue {
        /// Name of the field.
        field: &'static str,
        /// Raw value read.
        value: u32,
    },
}

impl UplinkError {
    /// Create an unmapped value error.
    pub fn unmapped(field: &'static str, value: u32) -> Self {
        UplinkError::UnmappedValue { field, value }
    }
}

/// Result type for uplink decoding.
pub type UplinkResult<T> = Result<T, UplinkError>;
