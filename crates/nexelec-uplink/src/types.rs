//! Decoded uplink messages and their labels.

use crate::registry::{MessageType, ProductType};
use serde::{Serialize, Serializer};

// ============================================================================
// Units
// ============================================================================

label_enum! {
    /// Unit of a measured value.
    RecordUnit {
        Temperature => "°C",
        Humidity => "%RH",
        Co2 => "ppm",
        Covt => "ug/m3",
        Luminosity => "lux",
        Noise => "db",
        Percentage => "%",
    }
}

label_enum! {
    /// Unit of a period between records.
    PeriodUnit {
        Minute => "minute",
    }
}

// ============================================================================
// Labels
// ============================================================================

label_enum! {
    /// State of a sensor channel in periodic data.
    SensorStatus {
        Enabled => "enabled",
        Disabled => "disabled",
        NotPresent => "not-present",
        Error => "error",
    }
}

label_enum! {
    /// IziAir air quality index.
    IziairValue {
        Good => "good",
        Average => "average",
        Warning => "warning",
        Error => "error",
        Reserved => "reserved",
    }
}

/// Indexed by the 3-bit IziAir field.
pub const IZIAIR_VALUES: [IziairValue; 8] = [
    IziairValue::Good,
    IziairValue::Reserved,
    IziairValue::Average,
    IziairValue::Reserved,
    IziairValue::Warning,
    IziairValue::Reserved,
    IziairValue::Reserved,
    IziairValue::Error,
];

label_enum! {
    /// Pollutant driving the IziAir index.
    IziairSource {
        None => "none",
        Co2 => "co2",
        Voc => "voc",
        Error => "error",
        Reserved => "reserved",
    }
}

/// Indexed by the 4-bit IziAir source field.
pub const IZIAIR_SOURCES: [IziairSource; 16] = [
    IziairSource::None,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Co2,
    IziairSource::Voc,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Reserved,
    IziairSource::Error,
];

label_enum! {
    /// Supply powering the sensor.
    PowerSource {
        Battery => "battery",
        External5v => "external-5v",
        Reserved => "reserved",
    }
}

/// Indexed by the 2-bit power source field.
pub const POWER_SOURCES: [PowerSource; 4] = [
    PowerSource::Battery,
    PowerSource::External5v,
    PowerSource::Reserved,
    PowerSource::Reserved,
];

label_enum! {
    /// Coarse battery charge.
    BatteryLevel {
        High => "high",
        Average => "average",
        Low => "low",
        Critical => "critical",
        ExternalPowerSource => "external-power-source",
        Reserved => "reserved",
    }
}

/// Indexed by the 3-bit field; raw 7 has no label.
pub const BATTERY_LEVELS: [BatteryLevel; 7] = [
    BatteryLevel::High,
    BatteryLevel::Average,
    BatteryLevel::Low,
    BatteryLevel::Critical,
    BatteryLevel::ExternalPowerSource,
    BatteryLevel::Reserved,
    BatteryLevel::Reserved,
];

label_enum! {
    /// Result of the hardware self test.
    HardwareStatus {
        Ok => "ok",
        HardwareDefect => "hardware-defect",
    }
}

label_enum! {
    /// Health of one sensor in a product status message.
    SensorHealth {
        Ok => "ok",
        Defect => "defect",
        NotPresent => "not-present",
        Disabled => "disabled",
        AtEndOfLife => "at-end-of-life",
    }
}

/// Indexed by a sensor status field; raw 5 and above have no label.
pub const SENSOR_HEALTH: [SensorHealth; 5] = [
    SensorHealth::Ok,
    SensorHealth::Defect,
    SensorHealth::NotPresent,
    SensorHealth::Disabled,
    SensorHealth::AtEndOfLife,
];

label_enum! {
    /// State of the SD card logger.
    SdCardStatus {
        Ok => "ok",
        UnableToMountDrive => "unable-to-mount-drive",
        NotPresent => "not-present",
        Disabled => "disabled",
        AtEndOfLife => "at-end-of-life",
    }
}

/// Indexed by the SD card status field; raw 5 and above have no label.
pub const SD_CARD_STATUSES: [SdCardStatus; 5] = [
    SdCardStatus::Ok,
    SdCardStatus::UnableToMountDrive,
    SdCardStatus::NotPresent,
    SdCardStatus::Disabled,
    SdCardStatus::AtEndOfLife,
];

label_enum! {
    /// Wall dock detection.
    AntiTearStatus {
        DockNotDetected => "dock-not-detected",
        DockDetected => "dock-detected",
        SensorRemovedFromDockJustNow => "sensor-removed-from-dock-just-now",
        SensorInstalledOnDockJustNow => "sensor-installed-on-dock-just-now",
    }
}

/// Indexed by the 2-bit anti-tear field.
pub const ANTI_TEAR_STATUSES: [AntiTearStatus; 4] = [
    AntiTearStatus::DockNotDetected,
    AntiTearStatus::DockDetected,
    AntiTearStatus::SensorRemovedFromDockJustNow,
    AntiTearStatus::SensorInstalledOnDockJustNow,
];

label_enum! {
    /// Where the current configuration came from.
    ConfigurationSource {
        Nfc => "nfc",
        Application => "application",
        Startup => "startup",
        Network => "network",
        Gps => "gps",
        Local => "local",
        Reserved => "reserved",
    }
}

/// Indexed by the 3-bit configuration source field.
pub const CONFIGURATION_SOURCES: [ConfigurationSource; 8] = [
    ConfigurationSource::Nfc,
    ConfigurationSource::Application,
    ConfigurationSource::Startup,
    ConfigurationSource::Network,
    ConfigurationSource::Gps,
    ConfigurationSource::Local,
    ConfigurationSource::Reserved,
    ConfigurationSource::Reserved,
];

label_enum! {
    /// Outcome of the last configuration change.
    ConfigurationState {
        Success => "success",
        PartialSuccess => "partial-success",
        Failure => "failure",
        Reserved => "reserved",
    }
}

/// Indexed by the 2-bit configuration state field.
pub const CONFIGURATION_STATES: [ConfigurationState; 4] = [
    ConfigurationState::Success,
    ConfigurationState::PartialSuccess,
    ConfigurationState::Failure,
    ConfigurationState::Reserved,
];

label_enum! {
    /// Input driving the indicator LED.
    LedSource {
        Co2 => "co2",
        Iziair => "iziair",
        Reserved => "reserved",
    }
}

/// Indexed by the 2-bit LED source field.
pub const LED_SOURCES: [LedSource; 4] = [
    LedSource::Co2,
    LedSource::Iziair,
    LedSource::Reserved,
    LedSource::Reserved,
];

label_enum! {
    /// Radio region the sensor is configured for.
    RadioRegion {
        LrEu868 => "LR-EU868",
        LrUs915 => "LR-US915",
        LrAs923 => "LR-AS923",
        LrAu915 => "LR-AU915",
        LrKr920 => "LR-KR920",
        LrIn865 => "LR-IN865",
        LrRu864 => "LR-RU864",
        SfRc1 => "SF-RC1",
        SfRc6 => "SF-RC6",
        SfRc7 => "SF-RC7",
        Reserved => "reserved",
    }
}

/// Indexed by the 4-bit field; raw 15 has no label.
pub const RADIO_REGIONS: [RadioRegion; 15] = [
    RadioRegion::LrEu868,
    RadioRegion::LrUs915,
    RadioRegion::LrAs923,
    RadioRegion::LrAu915,
    RadioRegion::LrKr920,
    RadioRegion::LrIn865,
    RadioRegion::LrRu864,
    RadioRegion::SfRc1,
    RadioRegion::Reserved,
    RadioRegion::Reserved,
    RadioRegion::Reserved,
    RadioRegion::Reserved,
    RadioRegion::SfRc6,
    RadioRegion::SfRc7,
    RadioRegion::Reserved,
];

label_enum! {
    /// Whether a network join is scheduled.
    NetworkJoinStatus {
        NoJoinRequest => "no-join-request",
        ProgrammedJoinRequest => "programmed-join-request",
    }
}

label_enum! {
    /// Whether the NFC interface answers readers.
    NfcStatus {
        Discoverable => "discoverable",
        NotDiscoverable => "not-discoverable",
    }
}

// ============================================================================
// Values With Sentinels
// ============================================================================

/// A counter that may report an error instead of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measured<T> {
    /// Reported value.
    Value(T),
    /// The counter field was all ones.
    Error,
}

impl<T: Copy> Measured<T> {
    /// The value, if one was reported.
    pub fn value(&self) -> Option<T> {
        match *self {
            Measured::Value(v) => Some(v),
            Measured::Error => None,
        }
    }
}

impl<T: Serialize> Serialize for Measured<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Measured::Value(v) => v.serialize(serializer),
            Measured::Error => serializer.serialize_str("error"),
        }
    }
}

/// A notification threshold that may be switched off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold<T> {
    /// Active threshold.
    Value(T),
    /// The sentinel switching the threshold off.
    Disabled,
}

impl<T: Copy> Threshold<T> {
    /// The threshold, if enabled.
    pub fn value(&self) -> Option<T> {
        match *self {
            Threshold::Value(v) => Some(v),
            Threshold::Disabled => None,
        }
    }
}

impl<T: Serialize> Serialize for Threshold<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Threshold::Value(v) => v.serialize(serializer),
            Threshold::Disabled => serializer.serialize_str("disabled"),
        }
    }
}

/// Battery voltage in mV, or why there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryVoltage {
    /// Measured voltage.
    Millivolts(u32),
    /// Raw 1022: no battery, running on external power.
    ExternalPowerSource,
    /// Raw 1023: the measurement failed.
    Error,
}

impl Serialize for BatteryVoltage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BatteryVoltage::Millivolts(mv) => serializer.serialize_u32(*mv),
            BatteryVoltage::ExternalPowerSource => serializer.serialize_str("external-power-source"),
            BatteryVoltage::Error => serializer.serialize_str("error"),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// One sensor channel of a periodic data message.
///
/// `value` is scaled and `unit` set only when the channel is enabled;
/// otherwise `value` holds the raw sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodicRecord {
    pub status: SensorStatus,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<RecordUnit>,
}

impl PeriodicRecord {
    /// Whether the channel carries a measurement.
    pub fn is_enabled(&self) -> bool {
        self.status == SensorStatus::Enabled
    }
}

/// One entry of a historical data message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HistoricalRecord {
    /// Scaled measurement.
    Value(f64),
    /// The sensor flagged the measurement as invalid.
    Invalid { error: &'static str, value: u32 },
}

impl HistoricalRecord {
    /// The measurement, if valid.
    pub fn value(&self) -> Option<f64> {
        match *self {
            HistoricalRecord::Value(v) => Some(v),
            HistoricalRecord::Invalid { .. } => None,
        }
    }
}

/// Time between two historical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordPeriod {
    pub value: u32,
    pub unit: PeriodUnit,
}

// ============================================================================
// Messages
// ============================================================================

/// CO2, temperature or humidity history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    pub product_type: ProductType,
    pub message_type: MessageType,
    pub number_of_records: u32,
    pub period_between_records: RecordPeriod,
    pub redundancy_of_record: u32,
    pub unit: RecordUnit,
    pub records: Vec<HistoricalRecord>,
}

/// Latest measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodicData {
    pub product_type: ProductType,
    pub message_type: MessageType,
    pub temperature: PeriodicRecord,
    pub humidity: PeriodicRecord,
    pub co2: PeriodicRecord,
    pub covt: PeriodicRecord,
    pub luminosity: PeriodicRecord,
    pub button_pressed: bool,
    pub average_noise: PeriodicRecord,
    #[serde(rename = "pickNoise")]
    pub peak_noise: PeriodicRecord,
    pub occupancy_rate: PeriodicRecord,
    pub iziair_global: IziairValue,
    pub iziair_source: IziairSource,
    pub iziair_co2: IziairValue,
    pub iziair_cov: IziairValue,
}

/// Hardware, firmware and sensor health.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStatus {
    pub product_type: ProductType,
    pub message_type: MessageType,
    pub hardware_version: u32,
    pub software_version: u32,
    pub power_source: PowerSource,
    pub battery_voltage: BatteryVoltage,
    pub battery_level: BatteryLevel,
    pub hardware_status: HardwareStatus,
    pub temperature_sensor_status: SensorHealth,
    pub co2_sensor_status: SensorHealth,
    pub covt_sensor_status: SensorHealth,
    pub pir_sensor_status: SensorHealth,
    pub microphone_sensor_status: SensorHealth,
    pub luminosity_sensor_status: SensorHealth,
    pub sd_status: SdCardStatus,
    pub activation_time: Measured<u32>,
    pub time_since_calibration: Measured<u32>,
    pub anti_tear_sensor_status: AntiTearStatus,
}

/// Echo of the active configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConfiguration {
    pub product_type: ProductType,
    pub message_type: MessageType,
    pub configuration_source: ConfigurationSource,
    pub configuration_state: ConfigurationState,
    pub measurement_period: u32,
    pub co2_sensor_activation: bool,
    pub cov_sensor_activation: bool,
    pub pir_sensor_activation: bool,
    pub microphone_sensor_activation: bool,
    pub local_storage_activation: bool,
    pub automatic_calibration_activation: bool,
    #[serde(rename = "mediumCO2Threshold")]
    pub medium_co2_threshold: u32,
    #[serde(rename = "highCO2Threshold")]
    pub high_co2_threshold: u32,
    pub led_activation: bool,
    #[serde(rename = "orangeLEDActivation")]
    pub orange_led_activation: bool,
    pub buzzer_activation: bool,
    pub buzzer_confirmation_activation: bool,
    pub led_source_activation: LedSource,
    pub button_notification_activation: bool,
    pub lora: RadioRegion,
    pub periodical_data_activation: bool,
    pub data_transmission_period: u32,
    #[serde(rename = "deltaCO2")]
    pub delta_co2: Threshold<u32>,
    pub delta_temperature: Threshold<f64>,
    #[serde(rename = "historicalCO2DataActivation")]
    pub historical_co2_data_activation: bool,
    pub historical_temperature_data_activation: bool,
    pub nb_datalog_records: u32,
    pub nb_datalog_transmission: u32,
    pub historical_measurement_transmission_period: Measured<u32>,
    pub network_join_status: NetworkJoinStatus,
    pub nfc_status: NfcStatus,
    /// `20YY-MM-DD HH:MM`
    pub date: String,
}

/// Any decoded uplink message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UplinkMessage {
    HistoricalData(HistoricalData),
    PeriodicData(PeriodicData),
    ProductStatus(ProductStatus),
    ProductConfiguration(ProductConfiguration),
}

impl UplinkMessage {
    /// Product the message came from.
    pub fn product_type(&self) -> ProductType {
        match self {
            UplinkMessage::HistoricalData(m) => m.product_type,
            UplinkMessage::PeriodicData(m) => m.product_type,
            UplinkMessage::ProductStatus(m) => m.product_type,
            UplinkMessage::ProductConfiguration(m) => m.product_type,
        }
    }

    /// Kind of frame that was decoded.
    pub fn message_type(&self) -> MessageType {
        match self {
            UplinkMessage::HistoricalData(m) => m.message_type,
            UplinkMessage::PeriodicData(m) => m.message_type,
            UplinkMessage::ProductStatus(m) => m.message_type,
            UplinkMessage::ProductConfiguration(m) => m.message_type,
        }
    }
}
