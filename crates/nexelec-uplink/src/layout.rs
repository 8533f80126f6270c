//! Bit layouts of the uplink messages.
//!
//! Offsets count from the most significant bit of the first payload byte.

use nexelec_payload::BitField;

pub const PRODUCT_TYPE: BitField = BitField::new("productType", 0, 8);
pub const MESSAGE_TYPE: BitField = BitField::new("messageType", 8, 8);

pub mod historical {
    use super::*;

    pub const NUMBER_OF_RECORDS: BitField = BitField::new("numberOfRecords", 16, 6);
    pub const PERIOD_BETWEEN_RECORDS: BitField = BitField::new("periodBetweenRecords", 22, 8);
    pub const REDUNDANCY_OF_RECORD: BitField = BitField::new("redundancyOfRecord", 30, 6);

    pub const RECORDS_OFFSET: usize = 36;
    pub const RECORD_WIDTH: usize = 10;

    /// The `index`th record.
    pub const fn record(index: usize) -> BitField {
        BitField::new("records", RECORDS_OFFSET + index * RECORD_WIDTH, RECORD_WIDTH)
    }
}

pub mod periodic {
    use super::*;

    pub const TEMPERATURE: BitField = BitField::new("temperature", 16, 10);
    pub const HUMIDITY: BitField = BitField::new("humidity", 26, 10);
    pub const CO2: BitField = BitField::new("co2", 36, 14);
    pub const COVT: BitField = BitField::new("covt", 50, 14);
    pub const LUMINOSITY: BitField = BitField::new("luminosity", 64, 10);
    pub const BUTTON_PRESSED: BitField = BitField::new("buttonPressed", 74, 1);
    pub const AVERAGE_NOISE: BitField = BitField::new("averageNoise", 75, 7);
    pub const PEAK_NOISE: BitField = BitField::new("pickNoise", 82, 7);
    pub const OCCUPANCY_RATE: BitField = BitField::new("occupancyRate", 89, 7);
    pub const IZIAIR_GLOBAL: BitField = BitField::new("iziairGlobal", 96, 3);
    pub const IZIAIR_SOURCE: BitField = BitField::new("iziairSource", 99, 4);
    pub const IZIAIR_CO2: BitField = BitField::new("iziairCo2", 103, 3);
    pub const IZIAIR_COV: BitField = BitField::new("iziairCov", 106, 3);
}

pub mod status {
    use super::*;

    pub const HARDWARE_VERSION: BitField = BitField::new("hardwareVersion", 16, 8);
    pub const SOFTWARE_VERSION: BitField = BitField::new("softwareVersion", 24, 8);
    pub const POWER_SOURCE: BitField = BitField::new("powerSource", 32, 2);
    pub const BATTERY_VOLTAGE: BitField = BitField::new("batteryVoltage", 34, 10);
    pub const BATTERY_LEVEL: BitField = BitField::new("batteryLevel", 44, 3);
    pub const HARDWARE_STATUS: BitField = BitField::new("hardwareStatus", 47, 1);
    pub const TEMPERATURE_SENSOR: BitField = BitField::new("temperatureSensorStatus", 48, 3);
    pub const CO2_SENSOR: BitField = BitField::new("co2SensorStatus", 51, 3);
    pub const COVT_SENSOR: BitField = BitField::new("covtSensorStatus", 54, 3);
    pub const PIR_SENSOR: BitField = BitField::new("pirSensorStatus", 57, 3);
    pub const MICROPHONE_SENSOR: BitField = BitField::new("microphoneSensorStatus", 60, 3);
    pub const LUMINOSITY_SENSOR: BitField = BitField::new("luminositySensorStatus", 63, 3);
    pub const SD_CARD: BitField = BitField::new("sdStatus", 66, 3);
    pub const ACTIVATION_TIME: BitField = BitField::new("activationTime", 69, 10);
    pub const TIME_SINCE_CALIBRATION: BitField = BitField::new("timeSinceCalibration", 79, 8);
    pub const ANTI_TEAR: BitField = BitField::new("antiTearSensorStatus", 96, 2);
}

pub mod configuration {
    use super::*;

    pub const SOURCE: BitField = BitField::new("configurationSource", 16, 3);
    pub const STATE: BitField = BitField::new("configurationState", 19, 2);
    pub const MEASUREMENT_PERIOD: BitField = BitField::new("measurementPeriod", 21, 5);
    pub const CO2_SENSOR: BitField = BitField::new("co2SensorActivation", 26, 1);
    pub const COV_SENSOR: BitField = BitField::new("covSensorActivation", 27, 1);
    pub const PIR_SENSOR: BitField = BitField::new("pirSensorActivation", 28, 1);
    pub const MICROPHONE_SENSOR: BitField = BitField::new("microphoneSensorActivation", 29, 1);
    pub const LOCAL_STORAGE: BitField = BitField::new("localStorageActivation", 30, 1);
    pub const AUTOMATIC_CALIBRATION: BitField =
        BitField::new("automaticCalibrationActivation", 31, 1);
    pub const MEDIUM_CO2_THRESHOLD: BitField = BitField::new("mediumCO2Threshold", 32, 10);
    pub const HIGH_CO2_THRESHOLD: BitField = BitField::new("highCO2Threshold", 42, 10);
    pub const LED: BitField = BitField::new("ledActivation", 52, 1);
    pub const ORANGE_LED: BitField = BitField::new("orangeLEDActivation", 53, 1);
    pub const BUZZER: BitField = BitField::new("buzzerActivation", 54, 1);
    pub const BUZZER_CONFIRMATION: BitField = BitField::new("buzzerConfirmationActivation", 55, 1);
    pub const LED_SOURCE: BitField = BitField::new("ledSourceActivation", 56, 2);
    pub const BUTTON_NOTIFICATION: BitField = BitField::new("buttonNotificationActivation", 58, 1);
    pub const LORA: BitField = BitField::new("lora", 59, 4);
    pub const PERIODIC_DATA: BitField = BitField::new("periodicalDataActivation", 63, 1);
    pub const DATA_TRANSMISSION_PERIOD: BitField = BitField::new("dataTransmissionPeriod", 64, 6);
    pub const DELTA_CO2: BitField = BitField::new("deltaCO2", 70, 8);
    pub const DELTA_TEMPERATURE: BitField = BitField::new("deltaTemperature", 78, 7);
    pub const HISTORICAL_CO2: BitField = BitField::new("historicalCO2DataActivation", 85, 1);
    pub const HISTORICAL_TEMPERATURE: BitField =
        BitField::new("historicalTemperatureDataActivation", 86, 1);
    pub const DATALOG_RECORDS: BitField = BitField::new("nbDatalogRecords", 87, 6);
    pub const DATALOG_TRANSMISSIONS: BitField = BitField::new("nbDatalogTransmission", 93, 5);
    pub const HISTORICAL_TRANSMISSION_PERIOD: BitField =
        BitField::new("historicalMeasurementTransmissionPeriod", 98, 8);
    pub const NETWORK_JOIN: BitField = BitField::new("networkJoinStatus", 106, 1);
    pub const NFC: BitField = BitField::new("nfcStatus", 107, 1);
    pub const YEAR: BitField = BitField::new("date.year", 108, 6);
    pub const MONTH: BitField = BitField::new("date.month", 114, 4);
    pub const DAY: BitField = BitField::new("date.day", 118, 5);
    pub const HOUR: BitField = BitField::new("date.hour", 123, 5);
    pub const MINUTE: BitField = BitField::new("date.minute", 128, 6);
}
