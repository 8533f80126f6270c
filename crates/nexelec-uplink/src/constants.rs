//! Uplink constants.

// ============================================================================
// Product Type Codes
// ============================================================================

/// Feel indoor air quality sensor.
pub const PRODUCT_FEEL: u8 = 0xa9;
/// Rise CO2, temperature and humidity sensor.
pub const PRODUCT_RISE: u8 = 0xaa;
/// Move presence sensor.
pub const PRODUCT_MOVE: u8 = 0xab;
/// Sign sensor.
pub const PRODUCT_SIGN: u8 = 0xad;

// ============================================================================
// Message Type Codes
// ============================================================================

/// LoRa periodic measurement frame.
pub const MSG_PERIODIC_DATA: u8 = 0x01;
/// CO2 history frame.
pub const MSG_CO2_HISTORICAL_DATA: u8 = 0x02;
/// Temperature history frame.
pub const MSG_TEMPERATURE_HISTORICAL_DATA: u8 = 0x03;
/// Humidity history frame.
pub const MSG_HUMIDITY_HISTORICAL_DATA: u8 = 0x04;
/// Product status frame.
pub const MSG_PRODUCT_STATUS: u8 = 0x05;
/// Product configuration frame.
pub const MSG_PRODUCT_CONFIGURATION: u8 = 0x06;
/// Sigfox periodic measurement frame.
pub const MSG_SIGFOX_PERIODIC_DATA: u8 = 0x11;
/// Sigfox product status frame.
pub const MSG_SIGFOX_PRODUCT_STATUS: u8 = 0x15;
/// First half of a Sigfox product configuration.
pub const MSG_SIGFOX_PRODUCT_CONFIGURATION_N1: u8 = 0x16;
/// Second half of a Sigfox product configuration.
pub const MSG_SIGFOX_PRODUCT_CONFIGURATION_N2: u8 = 0x17;

// ============================================================================
// Sentinels
// ============================================================================

/// Raw historical record value marking an invalid measurement.
pub const HISTORICAL_INVALID_RECORD: u32 = 1023;

/// Error text carried by an invalid historical record.
pub const INVALID_RECORD_ERROR: &str = "invalid record";

/// Raw battery voltage meaning the sensor runs on external power.
pub const BATTERY_VOLTAGE_EXTERNAL: u32 = 1022;

/// Raw battery voltage meaning the measurement failed.
pub const BATTERY_VOLTAGE_ERROR: u32 = 1023;

/// Raw activation time meaning the counter is unavailable.
pub const ACTIVATION_TIME_ERROR: u32 = 1023;

/// Raw time since calibration meaning the counter is unavailable.
pub const CALIBRATION_TIME_ERROR: u32 = 255;

/// Raw CO2 delta meaning the threshold is disabled.
pub const DELTA_CO2_DISABLED: u32 = 255;

/// Raw temperature delta meaning the threshold is disabled.
pub const DELTA_TEMPERATURE_DISABLED: u32 = 127;

/// Raw historical transmission period meaning the value is unavailable.
pub const TRANSMISSION_PERIOD_ERROR: u32 = 255;

// ============================================================================
// Scaling
// ============================================================================

/// Offset subtracted from a scaled temperature, in °C.
pub const TEMPERATURE_OFFSET: f64 = 30.0;

/// Historical periods are counted in steps of this many minutes.
pub const HISTORICAL_PERIOD_STEP: u32 = 10;

/// Battery voltage step, in mV.
pub const BATTERY_VOLTAGE_STEP: u32 = 5;

/// CO2 step for historical records, in ppm.
pub const HISTORICAL_CO2_STEP: u32 = 5;

/// Luminosity step, in lux.
pub const LUMINOSITY_STEP: u32 = 5;

/// Delta CO2 step in configuration messages, in ppm.
pub const DELTA_CO2_STEP: u32 = 4;
