//! Downlink constants
//!
//! Command ids accepted by the sensor firmware. Ids 0x33, 0x46, 0x47, 0x48
//! and 0x4c are reserved by the manufacturer and are not in the registry.

/// First byte of every downlink payload.
pub const PREAMBLE: u8 = 0x55;

// ============================================================================
// Command Ids
// ============================================================================

/// Enable the CO2 LED indicator.
pub const CMD_CO2_LED_ENABLE: u8 = 0x03;
/// Enable sending periodic data on button press.
pub const CMD_BUTTON_PERIODIC_DATA_ENABLE: u8 = 0x04;
/// Enable periodic data transmission.
pub const CMD_PERIODIC_DATA_ENABLE: u8 = 0x05;
/// Temperature change that triggers an immediate transmission (0.1 °C steps).
pub const CMD_DELTA_TEMPERATURE: u8 = 0x08;
/// Enable the NFC interface.
pub const CMD_NFC_ENABLE: u8 = 0x0a;
/// CO2 change that triggers an immediate transmission (20 ppm steps).
pub const CMD_DELTA_CO2: u8 = 0x10;
/// CO2 "orange" threshold (20 ppm steps).
pub const CMD_CO2_ORANGE_THRESHOLD: u8 = 0x12;
/// CO2 "red" threshold (20 ppm steps).
pub const CMD_CO2_RED_THRESHOLD: u8 = 0x13;
/// Enable CO2 measurement.
pub const CMD_CO2_MEASUREMENT_ENABLE: u8 = 0x19;
/// Delay before joining the network, in minutes.
pub const CMD_DEFERRED_NETWORK_JOIN: u8 = 0x1c;
/// Calibrate the CO2 sensor against a reference value.
pub const CMD_CO2_MANUAL_CALIBRATION: u8 = 0x1d;
/// Enable historical temperature transmission.
pub const CMD_HISTORICAL_TEMPERATURE_ENABLE: u8 = 0x28;
/// Enable historical humidity transmission.
pub const CMD_HISTORICAL_HUMIDITY_ENABLE: u8 = 0x29;
/// Source driving the sound and light indicator.
pub const CMD_INDICATOR_SOURCE: u8 = 0x2d;
/// Enable the "orange" level LED notification.
pub const CMD_CO2_ORANGE_NOTIFICATION_ENABLE: u8 = 0x2e;
/// Period between two measurements.
pub const CMD_MEASUREMENT_PERIOD: u8 = 0x2f;
/// Period between two periodic data transmissions.
pub const CMD_PERIODIC_DATA_PERIOD: u8 = 0x49;
/// Reboot the product.
pub const CMD_REBOOT: u8 = 0x4a;
/// Restore the factory configuration.
pub const CMD_FACTORY_RESET: u8 = 0x4b;
/// Enable the motion (PIR) sensor.
pub const CMD_PIR_ENABLE: u8 = 0x54;
/// Enable luminosity measurement.
pub const CMD_LUMINOSITY_ENABLE: u8 = 0x55;
/// Enable sound level measurement.
pub const CMD_MICROPHONE_ENABLE: u8 = 0x56;
/// Enable VOC measurement.
pub const CMD_COV_ENABLE: u8 = 0x57;
/// Enable local storage of measurements on the SD card.
pub const CMD_SD_STORAGE_ENABLE: u8 = 0x58;
/// Enable automatic CO2 calibration.
pub const CMD_CO2_AUTO_CALIBRATION_ENABLE: u8 = 0x59;
/// Enable the buzzer on level change.
pub const CMD_BUZZER_LEVEL_CHANGE_ENABLE: u8 = 0x5a;
/// Enable the buzzer confirmation on bad level.
pub const CMD_BUZZER_BAD_LEVEL_CONFIRMATION_ENABLE: u8 = 0x5b;
/// Enable historical CO2 transmission.
pub const CMD_HISTORICAL_CO2_ENABLE: u8 = 0x5c;
/// Number of new measurements in a datalog message.
pub const CMD_DATALOG_RECORD_COUNT: u8 = 0x5d;
/// Period between two historical data transmissions.
pub const CMD_HISTORICAL_TRANSMISSION_PERIOD: u8 = 0x5e;
/// Number of times the same measurement is transmitted.
pub const CMD_TRANSMISSION_REPEAT_COUNT: u8 = 0x5f;

// ============================================================================
// Units
// ============================================================================

/// Degrees Celsius.
pub const UNIT_CELSIUS: &str = "°C";
/// Parts per million.
pub const UNIT_PPM: &str = "ppm";
/// Minutes.
pub const UNIT_MINUTE: &str = "minute";

// ============================================================================
// Enum Choices
// ============================================================================

/// Choices for [`CMD_INDICATOR_SOURCE`].
pub const INDICATOR_SOURCES: [&str; 4] = ["CO2", "IziAir", "Réservé 1", "Réservé 2"];
