//! Product and message type registry.

use crate::constants::*;
use crate::types::RecordUnit;

label_enum! {
    /// Sensor product family, from the first payload byte.
    ProductType {
        Feel => "feel",
        Rise => "rise",
        Move => "move",
        Sign => "sign",
    }
}

impl ProductType {
    /// Look up a product type by its wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            PRODUCT_FEEL => Some(ProductType::Feel),
            PRODUCT_RISE => Some(ProductType::Rise),
            PRODUCT_MOVE => Some(ProductType::Move),
            PRODUCT_SIGN => Some(ProductType::Sign),
            _ => None,
        }
    }

    /// The wire code.
    pub fn code(&self) -> u8 {
        match self {
            ProductType::Feel => PRODUCT_FEEL,
            ProductType::Rise => PRODUCT_RISE,
            ProductType::Move => PRODUCT_MOVE,
            ProductType::Sign => PRODUCT_SIGN,
        }
    }
}

label_enum! {
    /// Message type, from the second payload byte.
    MessageType {
        PeriodicData => "periodic-data",
        Co2HistoricalData => "co2-historical-data",
        TemperatureHistoricalData => "temperature-historical-data",
        HumidityHistoricalData => "humidity-historical-data",
        ProductStatus => "product-status",
        ProductConfiguration => "product-configuration",
        SigfoxPeriodicData => "sigfox-periodic-data",
        SigfoxProductStatus => "sigfox-product-status",
        SigfoxProductConfigurationN1 => "sigfox-product-configuration-n1",
        SigfoxProductConfigurationN2 => "sigfox-product-configuration-n2",
    }
}

impl MessageType {
    /// Look up a message type by its wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            MSG_PERIODIC_DATA => Some(MessageType::PeriodicData),
            MSG_CO2_HISTORICAL_DATA => Some(MessageType::Co2HistoricalData),
            MSG_TEMPERATURE_HISTORICAL_DATA => Some(MessageType::TemperatureHistoricalData),
            MSG_HUMIDITY_HISTORICAL_DATA => Some(MessageType::HumidityHistoricalData),
            MSG_PRODUCT_STATUS => Some(MessageType::ProductStatus),
            MSG_PRODUCT_CONFIGURATION => Some(MessageType::ProductConfiguration),
            MSG_SIGFOX_PERIODIC_DATA => Some(MessageType::SigfoxPeriodicData),
            MSG_SIGFOX_PRODUCT_STATUS => Some(MessageType::SigfoxProductStatus),
            MSG_SIGFOX_PRODUCT_CONFIGURATION_N1 => Some(MessageType::SigfoxProductConfigurationN1),
            MSG_SIGFOX_PRODUCT_CONFIGURATION_N2 => Some(MessageType::SigfoxProductConfigurationN2),
            _ => None,
        }
    }

    /// The wire code.
    pub fn code(&self) -> u8 {
        match self {
            MessageType::PeriodicData => MSG_PERIODIC_DATA,
            MessageType::Co2HistoricalData => MSG_CO2_HISTORICAL_DATA,
            MessageType::TemperatureHistoricalData => MSG_TEMPERATURE_HISTORICAL_DATA,
            MessageType::HumidityHistoricalData => MSG_HUMIDITY_HISTORICAL_DATA,
            MessageType::ProductStatus => MSG_PRODUCT_STATUS,
            MessageType::ProductConfiguration => MSG_PRODUCT_CONFIGURATION,
            MessageType::SigfoxPeriodicData => MSG_SIGFOX_PERIODIC_DATA,
            MessageType::SigfoxProductStatus => MSG_SIGFOX_PRODUCT_STATUS,
            MessageType::SigfoxProductConfigurationN1 => MSG_SIGFOX_PRODUCT_CONFIGURATION_N1,
            MessageType::SigfoxProductConfigurationN2 => MSG_SIGFOX_PRODUCT_CONFIGURATION_N2,
        }
    }

    /// Unit of the records, for the historical data types.
    pub fn historical_unit(&self) -> Option<RecordUnit> {
        match self {
            MessageType::Co2HistoricalData => Some(RecordUnit::Co2),
            MessageType::TemperatureHistoricalData => Some(RecordUnit::Temperature),
            MessageType::HumidityHistoricalData => Some(RecordUnit::Humidity),
            _ => None,
        }
    }

    /// Whether this crate can decode the message type.
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            MessageType::PeriodicData
                | MessageType::Co2HistoricalData
                | MessageType::TemperatureHistoricalData
                | MessageType::HumidityHistoricalData
                | MessageType::ProductStatus
                | MessageType::ProductConfiguration
        )
    }
}
