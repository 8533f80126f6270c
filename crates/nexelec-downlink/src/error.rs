//! Error types for nexelec-downlink.

use crate::commands::CommandId;
use nexelec_payload::PayloadError;
use thiserror::Error;

/// Errors that can occur when encoding or decoding a downlink.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DownlinkError {
    /// Payload string could not be normalized to bytes.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// Payload has no bytes at all.
    #[error("empty downlink payload")]
    EmptyPayload,

    /// First byte is not the downlink preamble.
    #[error("invalid first byte \"{0:02x}\"")]
    InvalidPreamble(u8),

    /// Command id text is not two hex digits.
    #[error("invalid command id \"{0}\"")]
    InvalidCommandId(String),

    /// Command id is not in the registry.
    #[error("invalid command code \"{0}\"")]
    UnknownCommand(CommandId),

    /// Payload ends before the command value.
    #[error("command \"{id}\" truncated: expected {expected} value bytes, got {actual}")]
    Truncated {
        /// Command id.
        id: CommandId,
        /// Value width of the command.
        expected: usize,
        /// Bytes left in the payload.
        actual: usize,
    },

    /// Command has no value bytes but its kind needs one.
    #[error("command \"{id}\" has no value")]
    MissingValue {
        /// Command id.
        id: CommandId,
    },

    /// Trigger command with a raw value other than 1.
    #[error("invalid command \"{id}\" value: \"{raw}\" is not a valid command")]
    InvalidTrigger {
        /// Command id.
        id: CommandId,
        /// Raw value read.
        raw: u32,
    },

    /// Boolean command with a raw value other than 0 or 1.
    #[error("invalid command \"{id}\" value: \"{raw}\" is not a boolean")]
    NotBoolean {
        /// Command id.
        id: CommandId,
        /// Raw value read.
        raw: u32,
    },

    /// Number below the command's minimum, in raw units.
    #[error("invalid command \"{id}\" value: \"{value}\" is less than min value {min}")]
    BelowMin {
        /// Command id.
        id: CommandId,
        /// Offending value in raw units.
        value: f64,
        /// Minimum raw value.
        min: u32,
    },

    /// Number above the command's maximum, in raw units.
    #[error("invalid command \"{id}\" value: \"{value}\" is more than max value {max}")]
    AboveMax {
        /// Command id.
        id: CommandId,
        /// Offending value in raw units.
        value: f64,
        /// Maximum raw value.
        max: u32,
    },

    /// Enum index outside the choice list.
    #[error("invalid command \"{id}\" value: \"{index}\" does not match possible enum values {choices:?}")]
    EnumOutOfRange {
        /// Command id.
        id: CommandId,
        /// Offending index.
        index: i64,
        /// Valid labels.
        choices: &'static [&'static str],
    },

    /// Enum label not in the choice list.
    #[error("invalid command \"{id}\" value: \"{label}\" does not match possible enum values {choices:?}")]
    UnknownLabel {
        /// Command id.
        id: CommandId,
        /// Offending label.
        label: String,
        /// Valid labels.
        choices: &'static [&'static str],
    },

    /// Value of the wrong type for the command's kind.
    #[error("invalid command \"{id}\" value: \"{value}\" is not a valid {expected}")]
    TypeMismatch {
        /// Command id.
        id: CommandId,
        /// Expected kind name.
        expected: &'static str,
        /// Supplied value.
        value: String,
    },
}

/// Result type alias for downlink operations.
pub type DownlinkResult<T> = Result<T, DownlinkError>;
