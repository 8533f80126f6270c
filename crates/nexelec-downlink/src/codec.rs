//! Downlink encoding and decoding.

use crate::commands::{CommandDef, CommandId, CommandKind};
use crate::constants::PREAMBLE;
use crate::error::{DownlinkError, DownlinkResult};
use crate::value::{CommandValue, DecodedCommand, DecodedValue};
use nexelec_payload::{decode_payload, encode_payload, PayloadEncoding};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Tolerance when snapping a scaled value to a whole raw integer.
const RAW_EPSILON: f64 = 1e-6;

/// A command and the value to encode for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownlinkEntry {
    /// Command id.
    pub id: CommandId,
    /// Value; ignored for trigger commands.
    #[serde(default)]
    pub value: CommandValue,
}

impl DownlinkEntry {
    /// Create an entry.
    pub fn new(id: impl Into<CommandId>, value: impl Into<CommandValue>) -> Self {
        DownlinkEntry {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Create an entry for a trigger command.
    pub fn trigger(id: impl Into<CommandId>) -> Self {
        DownlinkEntry {
            id: id.into(),
            value: CommandValue::Null,
        }
    }
}

impl From<&DecodedCommand> for DownlinkEntry {
    fn from(decoded: &DecodedCommand) -> Self {
        DownlinkEntry {
            id: decoded.id,
            value: decoded.value.to_command_value(),
        }
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a downlink payload string.
pub fn decode_downlink(
    payload: &str,
    encoding: PayloadEncoding,
) -> DownlinkResult<Vec<DecodedCommand>> {
    let bytes = decode_payload(payload, encoding)?;
    decode_downlink_bytes(&bytes)
}

/// Decode a downlink payload from raw bytes.
pub fn decode_downlink_bytes(data: &[u8]) -> DownlinkResult<Vec<DecodedCommand>> {
    match data.first() {
        None => return Err(DownlinkError::EmptyPayload),
        Some(&first) if first != PREAMBLE => return Err(DownlinkError::InvalidPreamble(first)),
        Some(_) => {}
    }

    let mut decoded = Vec::new();
    let mut offset = 1;

    while offset < data.len() {
        let id = CommandId(data[offset]);
        let command = CommandDef::lookup(id)?;
        offset += 1;

        let available = data.len() - offset;
        if command.size > available {
            return Err(DownlinkError::Truncated {
                id,
                expected: command.size,
                actual: available,
            });
        }

        let raw = if command.size == 0 {
            None
        } else {
            Some(read_be(&data[offset..offset + command.size]))
        };
        offset += command.size;

        let value = decode_value(command, raw)?;
        trace!(command = %id, %value, "decoded downlink command");

        decoded.push(DecodedCommand {
            id,
            name: command.name,
            value,
            unit: command.unit(),
        });
    }

    debug!(commands = decoded.len(), "decoded downlink payload");
    Ok(decoded)
}

fn read_be(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b))
}

/// Validate a raw value against its command and convert it.
fn decode_value(command: &CommandDef, raw: Option<u32>) -> DownlinkResult<DecodedValue> {
    let id = command.id;
    let raw = match (command.kind, raw) {
        (CommandKind::Trigger, None) => return Ok(DecodedValue::Trigger),
        (_, None) => return Err(DownlinkError::MissingValue { id }),
        (_, Some(raw)) => raw,
    };

    match command.kind {
        CommandKind::Trigger => {
            if raw == 1 {
                Ok(DecodedValue::Trigger)
            } else {
                Err(DownlinkError::InvalidTrigger { id, raw })
            }
        }
        CommandKind::Boolean => match raw {
            0 => Ok(DecodedValue::Boolean(false)),
            1 => Ok(DecodedValue::Boolean(true)),
            _ => Err(DownlinkError::NotBoolean { id, raw }),
        },
        CommandKind::Number { step, min, max, .. } => {
            if raw < min {
                return Err(DownlinkError::BelowMin {
                    id,
                    value: f64::from(raw),
                    min,
                });
            }
            if raw > max {
                return Err(DownlinkError::AboveMax {
                    id,
                    value: f64::from(raw),
                    max,
                });
            }
            Ok(DecodedValue::Number(step.scale(raw)))
        }
        CommandKind::Enum { choices } => match choices.get(raw as usize) {
            Some(label) => Ok(DecodedValue::Enum {
                index: raw as usize,
                label,
            }),
            None => Err(DownlinkError::EnumOutOfRange {
                id,
                index: i64::from(raw),
                choices,
            }),
        },
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode commands to a downlink payload string.
pub fn encode_downlink(entries: &[DownlinkEntry], encoding: PayloadEncoding) -> DownlinkResult<String> {
    let bytes = encode_downlink_bytes(entries)?;
    Ok(encode_payload(&bytes, encoding))
}

/// Encode commands to raw downlink bytes.
pub fn encode_downlink_bytes(entries: &[DownlinkEntry]) -> DownlinkResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(1 + entries.len() * 3);
    buf.push(PREAMBLE);

    for entry in entries {
        let command = CommandDef::lookup(entry.id)?;
        let raw = encode_value(command, &entry.value)?;
        trace!(command = %command.id, raw, "encoded downlink command");

        buf.push(command.id.as_u8());
        // Range checks keep `raw` within `size` bytes.
        buf.extend_from_slice(&raw.to_be_bytes()[4 - command.size..]);
    }

    debug!(commands = entries.len(), bytes = buf.len(), "encoded downlink payload");
    Ok(buf)
}

/// Validate a caller value against its command and convert it to raw units.
fn encode_value(command: &CommandDef, value: &CommandValue) -> DownlinkResult<u32> {
    let id = command.id;
    let mismatch = || DownlinkError::TypeMismatch {
        id,
        expected: command.kind.name(),
        value: value.to_string(),
    };

    match command.kind {
        CommandKind::Trigger => Ok(1),
        CommandKind::Boolean => value.as_bool().map(u32::from).ok_or_else(mismatch),
        CommandKind::Number { step, min, max, .. } => {
            let scaled = value.as_f64().ok_or_else(mismatch)?;
            if !scaled.is_finite() {
                return Err(mismatch());
            }
            let raw = snap(step.unscale(scaled));
            if raw < f64::from(min) {
                return Err(DownlinkError::BelowMin { id, value: raw, min });
            }
            if raw > f64::from(max) {
                return Err(DownlinkError::AboveMax { id, value: raw, max });
            }
            Ok(raw.round() as u32)
        }
        CommandKind::Enum { choices } => {
            if let Some(label) = value.as_str() {
                return choices
                    .iter()
                    .position(|c| *c == label)
                    .map(|i| i as u32)
                    .ok_or_else(|| DownlinkError::UnknownLabel {
                        id,
                        label: label.to_string(),
                        choices,
                    });
            }
            let index = value.as_i64().ok_or_else(mismatch)?;
            match usize::try_from(index) {
                Ok(i) if i < choices.len() => Ok(i as u32),
                _ => Err(DownlinkError::EnumOutOfRange { id, index, choices }),
            }
        }
    }
}

/// Snap values that are a rounding error away from a whole number onto it.
fn snap(raw: f64) -> f64 {
    let whole = raw.round();
    if (raw - whole).abs() < RAW_EPSILON {
        whole
    } else {
        raw
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use approx::assert_relative_eq;

    fn hex(entries: &[DownlinkEntry]) -> DownlinkResult<String> {
        encode_downlink(entries, PayloadEncoding::Hex)
    }

    fn decode(payload: &str) -> DownlinkResult<Vec<DecodedCommand>> {
        decode_downlink(payload, PayloadEncoding::Hex)
    }

    #[test]
    fn test_decode_trigger() {
        let decoded = decode("554a01").unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].value, DecodedValue::Trigger);
        assert!(matches!(
            decode("554a00"),
            Err(DownlinkError::InvalidTrigger { raw: 0, .. })
        ));
    }

    #[test]
    fn test_encode_trigger() {
        assert_eq!(hex(&[DownlinkEntry::trigger(CMD_REBOOT)]).unwrap(), "554a01");
        // Any supplied value is ignored.
        assert_eq!(hex(&[DownlinkEntry::new(CMD_FACTORY_RESET, 7)]).unwrap(), "554b01");
    }

    #[test]
    fn test_decode_boolean() {
        assert_eq!(decode("550301").unwrap()[0].value, DecodedValue::Boolean(true));
        assert_eq!(decode("550300").unwrap()[0].value, DecodedValue::Boolean(false));
        assert!(matches!(
            decode("550302"),
            Err(DownlinkError::NotBoolean { raw: 2, .. })
        ));
    }

    #[test]
    fn test_encode_boolean() {
        assert_eq!(hex(&[DownlinkEntry::new(CMD_NFC_ENABLE, true)]).unwrap(), "550a01");
        assert_eq!(hex(&[DownlinkEntry::new(CMD_NFC_ENABLE, false)]).unwrap(), "550a00");
        assert!(matches!(
            hex(&[DownlinkEntry::new(CMD_NFC_ENABLE, "invalid boolean")]),
            Err(DownlinkError::TypeMismatch { expected: "boolean", .. })
        ));
        assert!(hex(&[DownlinkEntry::new(CMD_NFC_ENABLE, 1)]).is_err());
    }

    #[test]
    fn test_decode_number() {
        let decoded = decode("550819").unwrap();
        assert_relative_eq!(decoded[0].value.as_f64().unwrap(), 2.5);
        assert_eq!(decoded[0].unit, Some(UNIT_CELSIUS));

        // Two-byte value: 0x012c = 300 * 10 minutes.
        let decoded = decode("551c012c").unwrap();
        assert_relative_eq!(decoded[0].value.as_f64().unwrap(), 3000.0);
    }

    #[test]
    fn test_decode_number_out_of_range() {
        // Measurement period accepts 5..=30.
        assert!(matches!(
            decode("552f04"),
            Err(DownlinkError::BelowMin { min: 5, .. })
        ));
        assert!(matches!(
            decode("552f1f"),
            Err(DownlinkError::AboveMax { max: 30, .. })
        ));
    }

    #[test]
    fn test_encode_number() {
        assert_eq!(hex(&[DownlinkEntry::new(CMD_DELTA_TEMPERATURE, 9.9)]).unwrap(), "550863");
        assert_eq!(hex(&[DownlinkEntry::new(CMD_DELTA_CO2, 100)]).unwrap(), "551005");
        assert_eq!(
            hex(&[DownlinkEntry::new(CMD_CO2_MANUAL_CALIBRATION, 5000)]).unwrap(),
            "551d1388"
        );
    }

    #[test]
    fn test_encode_number_rejects() {
        assert!(matches!(
            hex(&[DownlinkEntry::new(CMD_MEASUREMENT_PERIOD, 4)]),
            Err(DownlinkError::BelowMin { .. })
        ));
        assert!(matches!(
            hex(&[DownlinkEntry::new(CMD_DELTA_TEMPERATURE, 10.0)]),
            Err(DownlinkError::AboveMax { .. })
        ));
        assert!(matches!(
            hex(&[DownlinkEntry::new(CMD_DELTA_CO2, "invalid number")]),
            Err(DownlinkError::TypeMismatch { expected: "number", .. })
        ));
        assert!(hex(&[DownlinkEntry::new(CMD_DELTA_CO2, f64::NAN)]).is_err());
    }

    #[test]
    fn test_encode_number_rounds_to_step() {
        // 30 ppm is 1.5 steps of 20 ppm.
        assert_eq!(hex(&[DownlinkEntry::new(CMD_DELTA_CO2, 30)]).unwrap(), "551002");
    }

    #[test]
    fn test_decode_enum() {
        let decoded = decode("552d01").unwrap();
        assert_eq!(
            decoded[0].value,
            DecodedValue::Enum {
                index: 1,
                label: "IziAir"
            }
        );
        assert!(matches!(
            decode("552d09"),
            Err(DownlinkError::EnumOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn test_encode_enum() {
        assert_eq!(hex(&[DownlinkEntry::new(CMD_INDICATOR_SOURCE, 2)]).unwrap(), "552d02");
        assert_eq!(
            hex(&[DownlinkEntry::new(CMD_INDICATOR_SOURCE, "Réservé 2")]).unwrap(),
            "552d03"
        );
        assert!(matches!(
            hex(&[DownlinkEntry::new(CMD_INDICATOR_SOURCE, "invalid enum")]),
            Err(DownlinkError::UnknownLabel { .. })
        ));
        assert!(matches!(
            hex(&[DownlinkEntry::new(CMD_INDICATOR_SOURCE, 4)]),
            Err(DownlinkError::EnumOutOfRange { index: 4, .. })
        ));
        assert!(hex(&[DownlinkEntry::new(CMD_INDICATOR_SOURCE, -1)]).is_err());
        assert!(hex(&[DownlinkEntry::new(CMD_INDICATOR_SOURCE, true)]).is_err());
    }

    #[test]
    fn test_invalid_preamble() {
        assert!(matches!(decode("540301"), Err(DownlinkError::InvalidPreamble(0x54))));
        assert!(matches!(decode("00"), Err(DownlinkError::InvalidPreamble(0x00))));
        assert!(matches!(decode(""), Err(DownlinkError::EmptyPayload)));
    }

    #[test]
    fn test_preamble_only() {
        assert!(decode("55").unwrap().is_empty());
        assert_eq!(hex(&[]).unwrap(), "55");
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            decode("553301"),
            Err(DownlinkError::UnknownCommand(CommandId(0x33)))
        ));
        assert!(matches!(
            hex(&[DownlinkEntry::new(0x33u8, true)]),
            Err(DownlinkError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_truncated_command() {
        assert!(matches!(
            decode("550301 03"),
            Err(DownlinkError::Payload(_))
        ));
        assert!(matches!(
            decode("55030103"),
            Err(DownlinkError::Truncated {
                expected: 1,
                actual: 0,
                ..
            })
        ));
        assert!(matches!(
            decode("551c01"),
            Err(DownlinkError::Truncated {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_multiple_commands_keep_order() {
        let entries = vec![
            DownlinkEntry::new(CMD_CO2_LED_ENABLE, true),
            DownlinkEntry::new(CMD_DEFERRED_NETWORK_JOIN, 120),
            DownlinkEntry::new(CMD_INDICATOR_SOURCE, "CO2"),
            DownlinkEntry::trigger(CMD_REBOOT),
            DownlinkEntry::new(CMD_CO2_LED_ENABLE, false),
        ];
        let payload = hex(&entries).unwrap();
        assert_eq!(payload, "5503011c000c2d004a010300");

        let decoded = decode(&payload).unwrap();
        let ids: Vec<u8> = decoded.iter().map(|d| d.id.as_u8()).collect();
        assert_eq!(ids, vec![0x03, 0x1c, 0x2d, 0x4a, 0x03]);
    }

    #[test]
    fn test_base64_round_trip() {
        let entries = vec![
            DownlinkEntry::new(CMD_PERIODIC_DATA_PERIOD, 15),
            DownlinkEntry::new(CMD_PIR_ENABLE, true),
        ];
        let b64 = encode_downlink(&entries, PayloadEncoding::Base64).unwrap();
        assert_eq!(b64, "VUkPVAE=");
        let decoded = decode_downlink(&b64, PayloadEncoding::Base64).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].value, DecodedValue::Boolean(true));

        let unpadded = decode_downlink("VUkPVAE", PayloadEncoding::Base64).unwrap();
        assert_eq!(unpadded, decoded);
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let decoded = decode("552D01").unwrap();
        assert_eq!(decoded[0].value.label(), Some("IziAir"));
    }

    #[test]
    fn test_decoded_entries_re_encode() {
        let payload = "550863101e2d034a015d24";
        let decoded = decode(payload).unwrap();
        let entries: Vec<DownlinkEntry> = decoded.iter().map(DownlinkEntry::from).collect();
        assert_eq!(hex(&entries).unwrap(), payload);
    }

    #[test]
    fn test_random_values_round_trip() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            for command in CommandDef::all() {
                let entry = match command.kind {
                    CommandKind::Trigger => DownlinkEntry::trigger(command.id),
                    CommandKind::Boolean => DownlinkEntry::new(command.id, rng.gen_bool(0.5)),
                    CommandKind::Number { step, min, max, .. } => {
                        DownlinkEntry::new(command.id, step.scale(rng.gen_range(min..=max)))
                    }
                    CommandKind::Enum { choices } => {
                        DownlinkEntry::new(command.id, rng.gen_range(0..choices.len()))
                    }
                };

                let bytes = encode_downlink_bytes(std::slice::from_ref(&entry)).unwrap();
                assert_eq!(bytes.len(), 2 + command.size);

                let decoded = decode_downlink_bytes(&bytes).unwrap();
                assert_eq!(decoded.len(), 1);
                assert_eq!(decoded[0].id, command.id);
                let expected = match entry.value {
                    CommandValue::Null => DecodedValue::Trigger.to_command_value(),
                    ref other => other.clone(),
                };
                let actual = decoded[0].value.to_command_value();
                match (actual.as_f64(), expected.as_f64()) {
                    (Some(a), Some(e)) => assert_relative_eq!(a, e, epsilon = 1e-9),
                    _ => assert_eq!(actual, expected),
                }
            }
        }
    }

    #[test]
    fn test_entry_deserialize() {
        let entries: Vec<DownlinkEntry> = serde_json::from_str(
            r#"[{"id": "4a"}, {"id": "08", "value": 1.5}, {"id": "2d", "value": "IziAir"}]"#,
        )
        .unwrap();
        assert_eq!(hex(&entries).unwrap(), "554a01080f2d01");
    }
}
