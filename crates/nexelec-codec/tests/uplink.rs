mod common;

use approx::assert_relative_eq;
use nexelec_codec::uplink::{
    BatteryVoltage, HistoricalRecord, Measured, RecordUnit, SensorStatus, Threshold, UplinkError,
};
use nexelec_codec::payload::PayloadError;
use nexelec_codec::{decode_uplink, CodecError, MessageType, PayloadEncoding, ProductType, UplinkMessage};
use serde_json::json;

const HISTORICAL: &str = "qgMYBDhuG4diCKIn";
const PERIODIC: &str = "qgGGICCnv/7/v79+ADg=";
const STATUS: &str = "qgUIGy0EASSYAfScQA==";
const CONFIGURATION: &str = "qgYvozISwGN59FYIQMMSR0g=";

fn decode(payload: &str) -> UplinkMessage {
    common::init_tracing();
    decode_uplink(payload, PayloadEncoding::Base64).unwrap()
}

#[test]
fn sample_payloads_dispatch_by_message_type() {
    let cases = [
        (HISTORICAL, MessageType::TemperatureHistoricalData),
        (PERIODIC, MessageType::PeriodicData),
        (STATUS, MessageType::ProductStatus),
        (CONFIGURATION, MessageType::ProductConfiguration),
    ];
    for (payload, message_type) in cases {
        let message = decode(payload);
        assert_eq!(message.product_type(), ProductType::Rise);
        assert_eq!(message.message_type(), message_type);
    }
}

#[test]
fn hex_and_base64_agree() {
    let hex = nexelec_codec::payload::base64_to_hex(STATUS).unwrap();
    assert_eq!(hex, "aa05081b2d0401249801f49c40");
    assert_eq!(decode_uplink(&hex, PayloadEncoding::Hex).unwrap(), decode(STATUS));
}

#[test]
fn historical_records() {
    let UplinkMessage::HistoricalData(data) = decode(HISTORICAL) else {
        panic!("expected historical data");
    };
    let values: Vec<f64> = data.records.iter().filter_map(HistoricalRecord::value).collect();
    assert_eq!(values.len(), 6);
    assert_relative_eq!(values[0], 23.9, epsilon = 1e-9);
    assert_relative_eq!(values[5], 25.1, epsilon = 1e-9);
    assert_eq!(data.unit, RecordUnit::Temperature);
}

#[test]
fn periodic_channels() {
    let UplinkMessage::PeriodicData(data) = decode(PERIODIC) else {
        panic!("expected periodic data");
    };
    let enabled = [data.temperature, data.humidity, data.co2];
    assert!(enabled.iter().all(|r| r.status == SensorStatus::Enabled && r.unit.is_some()));
    let absent = [
        data.covt,
        data.luminosity,
        data.average_noise,
        data.peak_noise,
        data.occupancy_rate,
    ];
    assert!(absent.iter().all(|r| r.status == SensorStatus::NotPresent && r.unit.is_none()));
}

#[test]
fn status_and_configuration_sentinels() {
    let UplinkMessage::ProductStatus(status) = decode(STATUS) else {
        panic!("expected product status");
    };
    assert_eq!(status.battery_voltage, BatteryVoltage::Millivolts(3600));
    assert_eq!(status.time_since_calibration, Measured::Value(250));

    let UplinkMessage::ProductConfiguration(config) = decode(CONFIGURATION) else {
        panic!("expected product configuration");
    };
    assert_eq!(config.delta_co2, Threshold::Value(500));
    assert_eq!(config.date, "2012-04-18 07:18");
}

#[test]
fn errors_surface_through_the_facade() {
    assert_eq!(
        decode_uplink("0005", PayloadEncoding::Hex).unwrap_err(),
        CodecError::Uplink(UplinkError::UnknownProductType(0))
    );
    assert_eq!(
        decode_uplink("ab15", PayloadEncoding::Hex)
            .unwrap_err()
            .to_string(),
        "sigfox-product-status not implemented"
    );
    assert!(decode_uplink("aa0", PayloadEncoding::Hex).is_err());
}

#[test]
fn transcoding_errors_are_wrapped_by_direction() {
    assert!(matches!(
        decode_uplink("zz", PayloadEncoding::Hex),
        Err(CodecError::Uplink(UplinkError::Payload(PayloadError::InvalidHex(_))))
    ));
    assert!(matches!(
        decode_uplink("qg!", PayloadEncoding::Base64),
        Err(CodecError::Uplink(UplinkError::Payload(PayloadError::InvalidBase64(_))))
    ));
}

#[test]
fn unpadded_base64_is_accepted() {
    assert_eq!(decode("qgUIGy0EASSYAfScQA"), decode(STATUS));
}

#[test]
fn product_status_json_shape() {
    let json = serde_json::to_value(decode(STATUS)).unwrap();
    assert_eq!(
        json,
        json!({
            "productType": "rise",
            "messageType": "product-status",
            "hardwareVersion": 8,
            "softwareVersion": 27,
            "powerSource": "battery",
            "batteryVoltage": 3600,
            "batteryLevel": "low",
            "hardwareStatus": "ok",
            "temperatureSensorStatus": "ok",
            "co2SensorStatus": "ok",
            "covtSensorStatus": "not-present",
            "pirSensorStatus": "not-present",
            "microphoneSensorStatus": "not-present",
            "luminositySensorStatus": "not-present",
            "sdStatus": "disabled",
            "activationTime": 0,
            "timeSinceCalibration": 250,
            "antiTearSensorStatus": "dock-detected"
        })
    );
}

#[test]
fn periodic_json_shape() {
    let json = serde_json::to_value(decode(PERIODIC)).unwrap();
    assert_eq!(json["messageType"], "periodic-data");
    assert_eq!(json["temperature"]["status"], "enabled");
    assert_eq!(json["temperature"]["unit"], "°C");
    assert_eq!(json["co2"]["value"], 670.0);
    assert_eq!(json["covt"], json!({"status": "not-present", "value": 16382.0}));
    assert_eq!(json["pickNoise"]["status"], "not-present");
    assert_eq!(json["buttonPressed"], true);
    assert_eq!(json["iziairSource"], "none");
    assert_eq!(json["iziairCov"], "error");
}

#[test]
fn configuration_json_shape() {
    let json = serde_json::to_value(decode(CONFIGURATION)).unwrap();
    assert_eq!(json["configurationSource"], "application");
    assert_eq!(json["configurationState"], "partial-success");
    assert_eq!(json["mediumCO2Threshold"], 200);
    assert_eq!(json["highCO2Threshold"], 300);
    assert_eq!(json["orangeLEDActivation"], false);
    assert_eq!(json["ledSourceActivation"], "iziair");
    assert_eq!(json["lora"], "LR-US915");
    assert_eq!(json["deltaCO2"], 500);
    assert_eq!(json["deltaTemperature"], 1.0);
    assert_eq!(json["historicalCO2DataActivation"], true);
    assert_eq!(json["historicalMeasurementTransmissionPeriod"], 3);
    assert_eq!(json["networkJoinStatus"], "no-join-request");
    assert_eq!(json["nfcStatus"], "discoverable");
}

#[test]
fn historical_json_shape() {
    let json = serde_json::to_value(decode(HISTORICAL)).unwrap();
    assert_eq!(json["numberOfRecords"], 6);
    assert_eq!(json["periodBetweenRecords"], json!({"value": 10, "unit": "minute"}));
    assert_eq!(json["redundancyOfRecord"], 3);
    assert_eq!(json["unit"], "°C");
    assert_eq!(json["records"].as_array().map(Vec::len), Some(6));
}
