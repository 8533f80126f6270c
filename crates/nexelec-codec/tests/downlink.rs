mod common;

use nexelec_codec::downlink::{
    CommandDef, CommandKind, DownlinkError, CMD_CO2_ORANGE_THRESHOLD, CMD_DELTA_TEMPERATURE,
    CMD_FACTORY_RESET, CMD_INDICATOR_SOURCE, CMD_NFC_ENABLE, DOWNLINK_COMMANDS,
};
use nexelec_codec::payload::PayloadError;
use nexelec_codec::{
    decode_downlink, encode_downlink, CodecError, CommandValue, DecodedValue, DownlinkEntry,
    PayloadEncoding,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// An in-range value for every registry command, picked from `rng`.
fn random_entries(rng: &mut ChaCha8Rng) -> Vec<DownlinkEntry> {
    DOWNLINK_COMMANDS
        .iter()
        .map(|command| match command.kind {
            CommandKind::Trigger => DownlinkEntry::trigger(command.id),
            CommandKind::Boolean => DownlinkEntry::new(command.id, rng.gen_bool(0.5)),
            CommandKind::Number { step, min, max, .. } => {
                DownlinkEntry::new(command.id, step.scale(rng.gen_range(min..=max)))
            }
            CommandKind::Enum { choices } => {
                let label = choices[rng.gen_range(0..choices.len())];
                DownlinkEntry::new(command.id, label)
            }
        })
        .collect()
}

#[test]
fn every_command_in_one_payload() {
    common::init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for encoding in [PayloadEncoding::Hex, PayloadEncoding::Base64] {
        let entries = random_entries(&mut rng);
        let payload = encode_downlink(&entries, encoding).unwrap();
        let decoded = decode_downlink(&payload, encoding).unwrap();

        assert_eq!(decoded.len(), entries.len());
        for ((entry, command), def) in entries.iter().zip(&decoded).zip(CommandDef::all()) {
            assert_eq!(command.id, entry.id);
            assert_eq!(command.name, def.name);
            assert_eq!(command.unit, def.unit());
            match (&command.value, &entry.value) {
                (DecodedValue::Trigger, _) => assert_eq!(def.kind, CommandKind::Trigger),
                (DecodedValue::Boolean(b), CommandValue::Bool(want)) => assert_eq!(b, want),
                (DecodedValue::Number(v), want) => {
                    approx::assert_relative_eq!(*v, want.as_f64().unwrap(), epsilon = 1e-9)
                }
                (DecodedValue::Enum { label, .. }, CommandValue::String(want)) => {
                    assert_eq!(*label, want.as_str())
                }
                (got, want) => panic!("{}: decoded {} from {}", entry.id, got, want),
            }
        }

        // Decoding then re-encoding is stable.
        let again: Vec<DownlinkEntry> = decoded.iter().map(DownlinkEntry::from).collect();
        assert_eq!(encode_downlink(&again, encoding).unwrap(), payload);
    }
}

#[test]
fn payload_size_follows_registry_widths() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let entries = random_entries(&mut rng);
    let payload = encode_downlink(&entries, PayloadEncoding::Hex).unwrap();

    let expected: usize = 1 + CommandDef::all().iter().map(|c| 1 + c.size).sum::<usize>();
    assert_eq!(payload.len(), expected * 2);
}

#[test]
fn out_of_range_values_fail_both_ways() {
    for command in CommandDef::all() {
        let CommandKind::Number { step, min, max, .. } = command.kind else {
            continue;
        };

        let above = DownlinkEntry::new(command.id, step.scale(max + 1));
        assert!(
            matches!(
                encode_downlink(&[above], PayloadEncoding::Hex),
                Err(CodecError::Downlink(DownlinkError::AboveMax { .. }))
            ),
            "{} accepted a value above max",
            command.id
        );

        if min > 0 {
            let below = DownlinkEntry::new(command.id, step.scale(min - 1));
            assert!(
                encode_downlink(&[below], PayloadEncoding::Hex).is_err(),
                "{} accepted a value below min",
                command.id
            );

            let raw = (min - 1).to_be_bytes();
            let payload = format!(
                "55{}{}",
                command.id,
                raw[4 - command.size..]
                    .iter()
                    .map(|b| format!("{:02x}", b))
                    .collect::<String>()
            );
            assert!(matches!(
                decode_downlink(&payload, PayloadEncoding::Hex),
                Err(CodecError::Downlink(DownlinkError::BelowMin { .. }))
            ));
        }
    }
}

#[test]
fn one_bad_entry_fails_the_whole_payload() {
    let entries = [
        DownlinkEntry::new(CMD_NFC_ENABLE, true),
        DownlinkEntry::new(CMD_DELTA_TEMPERATURE, 42.0),
        DownlinkEntry::trigger(CMD_FACTORY_RESET),
    ];
    let err = encode_downlink(&entries, PayloadEncoding::Hex).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid command \"08\" value: \"420\" is more than max value 99"
    );
}

#[test]
fn decoded_commands_serialize() {
    let decoded = decode_downlink("55081912032d01", PayloadEncoding::Hex).unwrap();
    let json = serde_json::to_value(&decoded).unwrap();
    assert_eq!(json[0]["id"], "08");
    assert_eq!(json[0]["value"], 2.5);
    assert_eq!(json[0]["unit"], "°C");
    assert_eq!(json[1]["value"], 60.0);
    assert_eq!(json[1]["unit"], "ppm");
    assert_eq!(json[2]["id"], "2d");
    assert_eq!(json[2]["value"], 1);
    assert_eq!(json[2]["enum"], "IziAir");
    assert!(json[2].get("unit").is_none());
}

#[test]
fn entries_load_from_json() {
    let entries: Vec<DownlinkEntry> = serde_json::from_str(
        r#"[
            {"id": "12", "value": 60},
            {"id": "2d", "value": "IziAir"},
            {"id": "4b"}
        ]"#,
    )
    .unwrap();
    assert_eq!(entries[0].id.as_u8(), CMD_CO2_ORANGE_THRESHOLD);
    assert_eq!(entries[1].id.as_u8(), CMD_INDICATOR_SOURCE);
    assert_eq!(
        encode_downlink(&entries, PayloadEncoding::Hex).unwrap(),
        "5512032d014b01"
    );

    let bad: Result<DownlinkEntry, _> = serde_json::from_str(r#"{"id": "xyz"}"#);
    assert!(bad.is_err());
}

#[test]
fn preamble_is_required() {
    for payload in ["00", "560301", "aa0301"] {
        assert!(matches!(
            decode_downlink(payload, PayloadEncoding::Hex),
            Err(CodecError::Downlink(DownlinkError::InvalidPreamble(_)))
        ));
    }
}

#[test]
fn transcoding_errors_are_wrapped_by_direction() {
    assert!(matches!(
        decode_downlink("55zz", PayloadEncoding::Hex),
        Err(CodecError::Downlink(DownlinkError::Payload(PayloadError::InvalidHex(_))))
    ));
}
