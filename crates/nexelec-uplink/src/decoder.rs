//! Uplink decoding.

use crate::constants::*;
use crate::error::{UplinkError, UplinkResult};
use crate::layout::{self, configuration, historical, periodic, status};
use crate::registry::{MessageType, ProductType};
use crate::types::*;
use nexelec_payload::{decode_payload, BitField, BitReader, PayloadEncoding};
use tracing::{debug, trace};

/// Decode an uplink payload string.
pub fn decode_uplink(payload: &str, encoding: PayloadEncoding) -> UplinkResult<UplinkMessage> {
    let bytes = decode_payload(payload, encoding)?;
    decode_uplink_bytes(&bytes)
}

/// Decode an uplink payload from raw bytes.
pub fn decode_uplink_bytes(data: &[u8]) -> UplinkResult<UplinkMessage> {
    let reader = BitReader::new(data);

    let code = reader.read(layout::PRODUCT_TYPE)? as u8;
    let product_type = ProductType::from_code(code).ok_or(UplinkError::UnknownProductType(code))?;

    let code = reader.read(layout::MESSAGE_TYPE)? as u8;
    let message_type = MessageType::from_code(code).ok_or(UplinkError::UnknownMessageType(code))?;

    let message = match message_type {
        MessageType::Co2HistoricalData
        | MessageType::TemperatureHistoricalData
        | MessageType::HumidityHistoricalData => {
            UplinkMessage::HistoricalData(decode_historical(&reader, product_type, message_type)?)
        }
        MessageType::PeriodicData => {
            UplinkMessage::PeriodicData(decode_periodic(&reader, product_type, message_type)?)
        }
        MessageType::ProductStatus => {
            UplinkMessage::ProductStatus(decode_status(&reader, product_type, message_type)?)
        }
        MessageType::ProductConfiguration => UplinkMessage::ProductConfiguration(
            decode_configuration(&reader, product_type, message_type)?,
        ),
        MessageType::SigfoxPeriodicData
        | MessageType::SigfoxProductStatus
        | MessageType::SigfoxProductConfigurationN1
        | MessageType::SigfoxProductConfigurationN2 => {
            return Err(UplinkError::NotImplemented(message_type));
        }
    };

    debug!(
        product = %product_type,
        message = %message_type,
        bytes = data.len(),
        "decoded uplink payload"
    );
    Ok(message)
}

// ============================================================================
// Field Helpers
// ============================================================================

/// Read a field and map it through a label table.
fn read_label<T: Copy>(reader: &BitReader<'_>, field: BitField, table: &[T]) -> UplinkResult<T> {
    let raw = reader.read(field)?;
    table
        .get(raw as usize)
        .copied()
        .ok_or(UplinkError::unmapped(field.name, raw))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn temperature(raw: u32) -> f64 {
    round2(f64::from(raw) / 10.0 - TEMPERATURE_OFFSET)
}

fn humidity(raw: u32) -> f64 {
    round2(f64::from(raw) / 10.0)
}

/// Classify a sensor channel by the reserved values at the top of its range.
fn sensor_status(field: BitField, raw: u32) -> SensorStatus {
    let max = field.max_value();
    if raw >= max {
        SensorStatus::Error
    } else if raw == max - 1 {
        SensorStatus::NotPresent
    } else if raw == max - 2 {
        SensorStatus::Disabled
    } else {
        SensorStatus::Enabled
    }
}

fn read_sensor(
    reader: &BitReader<'_>,
    field: BitField,
    unit: RecordUnit,
    scale: fn(u32) -> f64,
) -> UplinkResult<PeriodicRecord> {
    let raw = reader.read(field)?;
    let status = sensor_status(field, raw);
    let record = if status == SensorStatus::Enabled {
        PeriodicRecord {
            status,
            value: scale(raw),
            unit: Some(unit),
        }
    } else {
        PeriodicRecord {
            status,
            value: f64::from(raw),
            unit: None,
        }
    };
    trace!(field = field.name, raw, status = %record.status, "read sensor channel");
    Ok(record)
}

fn read_measured(reader: &BitReader<'_>, field: BitField, error: u32) -> UplinkResult<Measured<u32>> {
    let raw = reader.read(field)?;
    Ok(if raw == error {
        Measured::Error
    } else {
        Measured::Value(raw)
    })
}

// ============================================================================
// Extractors
// ============================================================================

fn decode_historical(
    reader: &BitReader<'_>,
    product_type: ProductType,
    message_type: MessageType,
) -> UplinkResult<HistoricalData> {
    let unit = message_type
        .historical_unit()
        .ok_or(UplinkError::NotImplemented(message_type))?;

    let number_of_records = reader.read(historical::NUMBER_OF_RECORDS)?;
    let period = reader.read(historical::PERIOD_BETWEEN_RECORDS)?;
    let redundancy_of_record = reader.read(historical::REDUNDANCY_OF_RECORD)?;

    let records = (0..number_of_records as usize)
        .map(|index| {
            let raw = reader.read(historical::record(index))?;
            if raw == HISTORICAL_INVALID_RECORD {
                return Ok(HistoricalRecord::Invalid {
                    error: INVALID_RECORD_ERROR,
                    value: raw,
                });
            }
            let value = match unit {
                RecordUnit::Co2 => f64::from(raw * HISTORICAL_CO2_STEP),
                RecordUnit::Temperature => temperature(raw),
                _ => humidity(raw),
            };
            Ok(HistoricalRecord::Value(value))
        })
        .collect::<UplinkResult<Vec<_>>>()?;

    trace!(records = records.len(), %unit, "read historical records");

    Ok(HistoricalData {
        product_type,
        message_type,
        number_of_records,
        period_between_records: RecordPeriod {
            value: period * HISTORICAL_PERIOD_STEP,
            unit: PeriodUnit::Minute,
        },
        redundancy_of_record,
        unit,
        records,
    })
}

fn decode_periodic(
    reader: &BitReader<'_>,
    product_type: ProductType,
    message_type: MessageType,
) -> UplinkResult<PeriodicData> {
    let raw = |raw: u32| f64::from(raw);

    Ok(PeriodicData {
        product_type,
        message_type,
        temperature: read_sensor(reader, periodic::TEMPERATURE, RecordUnit::Temperature, temperature)?,
        humidity: read_sensor(reader, periodic::HUMIDITY, RecordUnit::Humidity, humidity)?,
        co2: read_sensor(reader, periodic::CO2, RecordUnit::Co2, raw)?,
        covt: read_sensor(reader, periodic::COVT, RecordUnit::Covt, raw)?,
        luminosity: read_sensor(reader, periodic::LUMINOSITY, RecordUnit::Luminosity, |r| {
            f64::from(r * LUMINOSITY_STEP)
        })?,
        button_pressed: reader.read_flag(periodic::BUTTON_PRESSED)?,
        average_noise: read_sensor(reader, periodic::AVERAGE_NOISE, RecordUnit::Noise, raw)?,
        peak_noise: read_sensor(reader, periodic::PEAK_NOISE, RecordUnit::Noise, raw)?,
        occupancy_rate: read_sensor(reader, periodic::OCCUPANCY_RATE, RecordUnit::Percentage, raw)?,
        iziair_global: read_label(reader, periodic::IZIAIR_GLOBAL, &IZIAIR_VALUES)?,
        iziair_source: read_label(reader, periodic::IZIAIR_SOURCE, &IZIAIR_SOURCES)?,
        iziair_co2: read_label(reader, periodic::IZIAIR_CO2, &IZIAIR_VALUES)?,
        iziair_cov: read_label(reader, periodic::IZIAIR_COV, &IZIAIR_VALUES)?,
    })
}

fn decode_status(
    reader: &BitReader<'_>,
    product_type: ProductType,
    message_type: MessageType,
) -> UplinkResult<ProductStatus> {
    let battery_voltage = match reader.read(status::BATTERY_VOLTAGE)? {
        BATTERY_VOLTAGE_EXTERNAL => BatteryVoltage::ExternalPowerSource,
        BATTERY_VOLTAGE_ERROR => BatteryVoltage::Error,
        raw => BatteryVoltage::Millivolts(raw * BATTERY_VOLTAGE_STEP),
    };
    let hardware_status = if reader.read_flag(status::HARDWARE_STATUS)? {
        HardwareStatus::HardwareDefect
    } else {
        HardwareStatus::Ok
    };

    Ok(ProductStatus {
        product_type,
        message_type,
        hardware_version: reader.read(status::HARDWARE_VERSION)?,
        software_version: reader.read(status::SOFTWARE_VERSION)?,
        power_source: read_label(reader, status::POWER_SOURCE, &POWER_SOURCES)?,
        battery_voltage,
        battery_level: read_label(reader, status::BATTERY_LEVEL, &BATTERY_LEVELS)?,
        hardware_status,
        temperature_sensor_status: read_label(reader, status::TEMPERATURE_SENSOR, &SENSOR_HEALTH)?,
        co2_sensor_status: read_label(reader, status::CO2_SENSOR, &SENSOR_HEALTH)?,
        covt_sensor_status: read_label(reader, status::COVT_SENSOR, &SENSOR_HEALTH)?,
        pir_sensor_status: read_label(reader, status::PIR_SENSOR, &SENSOR_HEALTH)?,
        microphone_sensor_status: read_label(reader, status::MICROPHONE_SENSOR, &SENSOR_HEALTH)?,
        luminosity_sensor_status: read_label(reader, status::LUMINOSITY_SENSOR, &SENSOR_HEALTH)?,
        sd_status: read_label(reader, status::SD_CARD, &SD_CARD_STATUSES)?,
        activation_time: read_measured(reader, status::ACTIVATION_TIME, ACTIVATION_TIME_ERROR)?,
        time_since_calibration: read_measured(
            reader,
            status::TIME_SINCE_CALIBRATION,
            CALIBRATION_TIME_ERROR,
        )?,
        anti_tear_sensor_status: read_label(reader, status::ANTI_TEAR, &ANTI_TEAR_STATUSES)?,
    })
}

fn decode_configuration(
    reader: &BitReader<'_>,
    product_type: ProductType,
    message_type: MessageType,
) -> UplinkResult<ProductConfiguration> {
    use configuration::*;

    let delta_co2 = match reader.read(DELTA_CO2)? {
        DELTA_CO2_DISABLED => Threshold::Disabled,
        raw => Threshold::Value(raw * DELTA_CO2_STEP),
    };
    let delta_temperature = match reader.read(DELTA_TEMPERATURE)? {
        DELTA_TEMPERATURE_DISABLED => Threshold::Disabled,
        raw => Threshold::Value(f64::from(raw) / 10.0),
    };
    let network_join_status = if reader.read_flag(NETWORK_JOIN)? {
        NetworkJoinStatus::ProgrammedJoinRequest
    } else {
        NetworkJoinStatus::NoJoinRequest
    };
    let nfc_status = if reader.read_flag(NFC)? {
        NfcStatus::NotDiscoverable
    } else {
        NfcStatus::Discoverable
    };
    let date = format!(
        "20{:02}-{:02}-{:02} {:02}:{:02}",
        reader.read(YEAR)?,
        reader.read(MONTH)?,
        reader.read(DAY)?,
        reader.read(HOUR)?,
        reader.read(MINUTE)?,
    );

    Ok(ProductConfiguration {
        product_type,
        message_type,
        configuration_source: read_label(reader, SOURCE, &CONFIGURATION_SOURCES)?,
        configuration_state: read_label(reader, STATE, &CONFIGURATION_STATES)?,
        measurement_period: reader.read(MEASUREMENT_PERIOD)?,
        co2_sensor_activation: reader.read_flag(CO2_SENSOR)?,
        cov_sensor_activation: reader.read_flag(COV_SENSOR)?,
        pir_sensor_activation: reader.read_flag(PIR_SENSOR)?,
        microphone_sensor_activation: reader.read_flag(MICROPHONE_SENSOR)?,
        local_storage_activation: reader.read_flag(LOCAL_STORAGE)?,
        automatic_calibration_activation: reader.read_flag(AUTOMATIC_CALIBRATION)?,
        medium_co2_threshold: reader.read(MEDIUM_CO2_THRESHOLD)?,
        high_co2_threshold: reader.read(HIGH_CO2_THRESHOLD)?,
        led_activation: reader.read_flag(LED)?,
        orange_led_activation: reader.read_flag(ORANGE_LED)?,
        buzzer_activation: reader.read_flag(BUZZER)?,
        buzzer_confirmation_activation: reader.read_flag(BUZZER_CONFIRMATION)?,
        led_source_activation: read_label(reader, LED_SOURCE, &LED_SOURCES)?,
        button_notification_activation: reader.read_flag(BUTTON_NOTIFICATION)?,
        lora: read_label(reader, LORA, &RADIO_REGIONS)?,
        periodical_data_activation: reader.read_flag(PERIODIC_DATA)?,
        data_transmission_period: reader.read(DATA_TRANSMISSION_PERIOD)?,
        delta_co2,
        delta_temperature,
        historical_co2_data_activation: reader.read_flag(HISTORICAL_CO2)?,
        historical_temperature_data_activation: reader.read_flag(HISTORICAL_TEMPERATURE)?,
        nb_datalog_records: reader.read(DATALOG_RECORDS)?,
        nb_datalog_transmission: reader.read(DATALOG_TRANSMISSIONS)?,
        historical_measurement_transmission_period: read_measured(
            reader,
            HISTORICAL_TRANSMISSION_PERIOD,
            TRANSMISSION_PERIOD_ERROR,
        )?,
        network_join_status,
        nfc_status,
        date,
    })
}
