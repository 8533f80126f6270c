//! Command values.
//!
//! This module provides:
//! - [`CommandValue`] - The dynamic value supplied when encoding a command
//! - [`DecodedValue`] - The typed value produced when decoding a command
//! - [`DecodedCommand`] - A decoded command with its registry metadata

use crate::commands::CommandId;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ============================================================================
// Command Value
// ============================================================================

/// A value to encode, as supplied by a caller.
///
/// The expected variant depends on the command: booleans for boolean
/// commands, numbers for number commands, and either an index or a label for
/// enum commands. Trigger commands ignore the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandValue {
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
    /// Boolean value.
    Bool(bool),
    /// No value.
    #[default]
    Null,
}

impl CommandValue {
    /// Convert to f64 if numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CommandValue::Integer(v) => Some(*v as f64),
            CommandValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert to an integer if numeric and whole.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CommandValue::Integer(v) => Some(*v),
            CommandValue::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CommandValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Convert to bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CommandValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CommandValue::Null)
    }
}

impl std::fmt::Display for CommandValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValue::Integer(v) => write!(f, "{}", v),
            CommandValue::Float(v) => write!(f, "{}", v),
            CommandValue::String(v) => write!(f, "{}", v),
            CommandValue::Bool(v) => write!(f, "{}", v),
            CommandValue::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for CommandValue {
    fn from(v: i64) -> Self {
        CommandValue::Integer(v)
    }
}

impl From<i32> for CommandValue {
    fn from(v: i32) -> Self {
        CommandValue::Integer(i64::from(v))
    }
}

impl From<u32> for CommandValue {
    fn from(v: u32) -> Self {
        CommandValue::Integer(i64::from(v))
    }
}

impl From<usize> for CommandValue {
    fn from(v: usize) -> Self {
        CommandValue::Integer(v as i64)
    }
}

impl From<f64> for CommandValue {
    fn from(v: f64) -> Self {
        CommandValue::Float(v)
    }
}

impl From<bool> for CommandValue {
    fn from(v: bool) -> Self {
        CommandValue::Bool(v)
    }
}

impl From<&str> for CommandValue {
    fn from(v: &str) -> Self {
        CommandValue::String(v.to_string())
    }
}

impl From<String> for CommandValue {
    fn from(v: String) -> Self {
        CommandValue::String(v)
    }
}

impl<T: Into<CommandValue>> From<Option<T>> for CommandValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CommandValue::Null, Into::into)
    }
}

// ============================================================================
// Decoded Value
// ============================================================================

/// A validated value read from a downlink payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecodedValue {
    /// Trigger command (always 1 on the wire).
    Trigger,
    /// Boolean command.
    Boolean(bool),
    /// Number command, already scaled by its step.
    Number(f64),
    /// Enum command.
    Enum {
        /// Index into the choice list.
        index: usize,
        /// Label at that index.
        label: &'static str,
    },
}

impl DecodedValue {
    /// Numeric view of the value: 1 for triggers, 0/1 for booleans, the
    /// scaled number, or the enum index.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            DecodedValue::Trigger => Some(1.0),
            DecodedValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
            DecodedValue::Number(v) => Some(v),
            DecodedValue::Enum { index, .. } => Some(index as f64),
        }
    }

    /// Get the boolean, for boolean commands.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            DecodedValue::Boolean(b) => Some(b),
            _ => None,
        }
    }

    /// Get the label, for enum commands.
    pub fn label(&self) -> Option<&'static str> {
        match *self {
            DecodedValue::Enum { label, .. } => Some(label),
            _ => None,
        }
    }

    /// The value that encodes back to the same bytes.
    pub fn to_command_value(&self) -> CommandValue {
        match *self {
            DecodedValue::Trigger => CommandValue::Integer(1),
            DecodedValue::Boolean(b) => CommandValue::Bool(b),
            DecodedValue::Number(v) => CommandValue::Float(v),
            DecodedValue::Enum { index, .. } => CommandValue::from(index),
        }
    }
}

impl std::fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodedValue::Trigger => write!(f, "1"),
            DecodedValue::Boolean(b) => write!(f, "{}", b),
            DecodedValue::Number(v) => write!(f, "{}", v),
            DecodedValue::Enum { index, label } => write!(f, "{} ({})", index, label),
        }
    }
}

// ============================================================================
// Decoded Command
// ============================================================================

/// One command read from a downlink payload.
///
/// Serializes as `{"id", "name", "value", "unit"?, "enum"?}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedCommand {
    /// Command id.
    pub id: CommandId,
    /// Display name from the registry.
    pub name: &'static str,
    /// Decoded value.
    pub value: DecodedValue,
    /// Unit of a number value.
    pub unit: Option<&'static str>,
}

impl Serialize for DecodedCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", self.name)?;
        match self.value {
            DecodedValue::Trigger => map.serialize_entry("value", &1)?,
            DecodedValue::Boolean(b) => map.serialize_entry("value", &b)?,
            DecodedValue::Number(v) => map.serialize_entry("value", &v)?,
            DecodedValue::Enum { index, label } => {
                map.serialize_entry("value", &index)?;
                map.serialize_entry("enum", label)?;
            }
        }
        if let Some(unit) = self.unit {
            map.serialize_entry("unit", unit)?;
        }
        map.end()
    }
}
