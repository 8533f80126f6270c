//! Error types for nexelec-codec.

use nexelec_downlink::DownlinkError;
use nexelec_uplink::UplinkError;
use thiserror::Error;

/// Any error raised by the codec.
///
/// Hex and base64 failures arrive wrapped in the direction that hit them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error(transparent)]
    Downlink(#[from] DownlinkError),

    #[error(transparent)]
    Uplink(#[from] UplinkError),
}

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
