//! Downlink command registry.

use crate::constants::*;
use crate::error::DownlinkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ============================================================================
// Command Id
// ============================================================================

/// One-byte command identifier, printed as two lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub u8);

impl CommandId {
    /// Get the raw byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<u8> for CommandId {
    fn from(id: u8) -> Self {
        CommandId(id)
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl FromStr for CommandId {
    type Err = DownlinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DownlinkError::InvalidCommandId(s.to_string()));
        }
        u8::from_str_radix(s, 16)
            .map(CommandId)
            .map_err(|_| DownlinkError::InvalidCommandId(s.to_string()))
    }
}

impl Serialize for CommandId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CommandId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Value Kinds
// ============================================================================

/// Fixed-point scale between a raw integer and its physical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// value = raw * n
    Multiply(u32),
    /// value = raw / n
    Divide(u32),
}

impl Step {
    /// The step as a real-valued factor.
    pub fn factor(&self) -> f64 {
        match *self {
            Step::Multiply(n) => f64::from(n),
            Step::Divide(n) => 1.0 / f64::from(n),
        }
    }

    /// Convert a raw integer to its scaled value.
    pub fn scale(&self, raw: u32) -> f64 {
        match *self {
            Step::Multiply(n) => f64::from(raw) * f64::from(n),
            Step::Divide(n) => f64::from(raw) / f64::from(n),
        }
    }

    /// Convert a scaled value back to raw units, without rounding.
    pub fn unscale(&self, value: f64) -> f64 {
        match *self {
            Step::Multiply(n) => value / f64::from(n),
            Step::Divide(n) => value * f64::from(n),
        }
    }
}

/// How a command's raw value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandKind {
    /// Action with no parameter; the raw value is always 1.
    Trigger,
    /// Raw 0 or 1.
    Boolean,
    /// Fixed-point number; `min` and `max` are in raw units.
    Number {
        /// Scale applied to the raw integer.
        step: Step,
        /// Smallest accepted raw value.
        min: u32,
        /// Largest accepted raw value.
        max: u32,
        /// Unit of the scaled value.
        unit: Option<&'static str>,
    },
    /// Index into a list of labels.
    Enum {
        /// Labels, indexed by raw value.
        choices: &'static [&'static str],
    },
}

impl CommandKind {
    /// Name of the kind, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Trigger => "command",
            CommandKind::Boolean => "boolean",
            CommandKind::Number { .. } => "number",
            CommandKind::Enum { .. } => "enum",
        }
    }
}

// ============================================================================
// Command Definition
// ============================================================================

/// A downlink command known to the firmware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandDef {
    /// Command id.
    pub id: CommandId,
    /// Display name from the product manual.
    pub name: &'static str,
    /// Encoded value width in bytes (0, 1 or 2).
    pub size: usize,
    /// Value interpretation.
    pub kind: CommandKind,
}

impl CommandDef {
    const fn trigger(id: u8, name: &'static str) -> Self {
        CommandDef {
            id: CommandId(id),
            name,
            size: 1,
            kind: CommandKind::Trigger,
        }
    }

    const fn boolean(id: u8, name: &'static str) -> Self {
        CommandDef {
            id: CommandId(id),
            name,
            size: 1,
            kind: CommandKind::Boolean,
        }
    }

    const fn number(
        id: u8,
        name: &'static str,
        size: usize,
        step: Step,
        min: u32,
        max: u32,
        unit: Option<&'static str>,
    ) -> Self {
        CommandDef {
            id: CommandId(id),
            name,
            size,
            kind: CommandKind::Number {
                step,
                min,
                max,
                unit,
            },
        }
    }

    const fn enumeration(id: u8, name: &'static str, choices: &'static [&'static str]) -> Self {
        CommandDef {
            id: CommandId(id),
            name,
            size: 1,
            kind: CommandKind::Enum { choices },
        }
    }

    /// Find a command by id.
    pub fn find(id: CommandId) -> Option<&'static CommandDef> {
        DOWNLINK_COMMANDS.iter().find(|c| c.id == id)
    }

    /// Find a command by id, failing on unknown ids.
    pub fn lookup(id: CommandId) -> Result<&'static CommandDef, DownlinkError> {
        Self::find(id).ok_or(DownlinkError::UnknownCommand(id))
    }

    /// All known commands, in registry order.
    pub fn all() -> &'static [CommandDef] {
        &DOWNLINK_COMMANDS
    }

    /// Unit of the decoded value, if any.
    pub fn unit(&self) -> Option<&'static str> {
        match self.kind {
            CommandKind::Number { unit, .. } => unit,
            _ => None,
        }
    }
}

/// Every downlink command accepted by the firmware.
pub static DOWNLINK_COMMANDS: [CommandDef; 31] = [
    CommandDef::boolean(
        CMD_CO2_LED_ENABLE,
        "Activation / Désactivation de l’indicateur lumineux LED CO2",
    ),
    CommandDef::boolean(
        CMD_BUTTON_PERIODIC_DATA_ENABLE,
        "Activation / Désactivation de l’envoi de données périodiques sur appui bouton",
    ),
    CommandDef::boolean(
        CMD_PERIODIC_DATA_ENABLE,
        "Activation / Désactivation de l’envoi de données périodiques",
    ),
    CommandDef::number(
        CMD_DELTA_TEMPERATURE,
        "Delta température : Évolution de la température amenant à la transmission instantanée d’une mesure, pas de 0.1°C",
        1,
        Step::Divide(10),
        0,
        99,
        Some(UNIT_CELSIUS),
    ),
    CommandDef::boolean(CMD_NFC_ENABLE, "Activation / Désactivation de l’interface NFC"),
    CommandDef::number(
        CMD_DELTA_CO2,
        "Delta CO2 : Évolution du CO2 amenant à la transmission instantanée d’une mesure, pas de 20ppm",
        1,
        Step::Multiply(20),
        0,
        50,
        Some(UNIT_PPM),
    ),
    CommandDef::number(
        CMD_CO2_ORANGE_THRESHOLD,
        "Seuil CO2, niveau « orange » réglage du niveau CO2 par pas de 20 ppm",
        1,
        Step::Multiply(20),
        0,
        250,
        Some(UNIT_PPM),
    ),
    CommandDef::number(
        CMD_CO2_RED_THRESHOLD,
        "Seuil CO2, niveau « rouge »  réglage du niveau CO2 par pas de 20 ppm",
        1,
        Step::Multiply(20),
        0,
        250,
        Some(UNIT_PPM),
    ),
    CommandDef::boolean(
        CMD_CO2_MEASUREMENT_ENABLE,
        "Activation / Désactivation de la mesure de CO2",
    ),
    CommandDef::number(
        CMD_DEFERRED_NETWORK_JOIN,
        "Commande de connexion au réseau différée Configuration du temps avant la connexion en minutes",
        2,
        Step::Multiply(10),
        0,
        1008,
        Some(UNIT_MINUTE),
    ),
    CommandDef::number(
        CMD_CO2_MANUAL_CALIBRATION,
        "Calibration manuelle capteur CO2 selon valeur",
        2,
        Step::Multiply(1),
        0,
        5000,
        Some(UNIT_PPM),
    ),
    CommandDef::boolean(
        CMD_HISTORICAL_TEMPERATURE_ENABLE,
        "Activation / Désactivation de l’envoi de données historisées de température",
    ),
    CommandDef::boolean(
        CMD_HISTORICAL_HUMIDITY_ENABLE,
        "Activation / Désactivation de l’envoi de données historisées d’humidité",
    ),
    CommandDef::enumeration(
        CMD_INDICATOR_SOURCE,
        "Source de l’indicateur sonore et visuel",
        &INDICATOR_SOURCES,
    ),
    CommandDef::boolean(
        CMD_CO2_ORANGE_NOTIFICATION_ENABLE,
        "Activation / Désactivation de la notification du niveau « Orange » LED CO2",
    ),
    CommandDef::number(
        CMD_MEASUREMENT_PERIOD,
        "Période entre deux mesures",
        1,
        Step::Multiply(1),
        5,
        30,
        Some(UNIT_MINUTE),
    ),
    CommandDef::number(
        CMD_PERIODIC_DATA_PERIOD,
        "Période d’envoi des données périodiques",
        1,
        Step::Multiply(1),
        10,
        60,
        Some(UNIT_MINUTE),
    ),
    CommandDef::trigger(CMD_REBOOT, "Commande de redémarrage du produit"),
    CommandDef::trigger(
        CMD_FACTORY_RESET,
        "Commande de restauration en configuration usine",
    ),
    CommandDef::boolean(
        CMD_PIR_ENABLE,
        "Activation / Désactivation du capteur de mouvement (PIR)",
    ),
    CommandDef::boolean(
        CMD_LUMINOSITY_ENABLE,
        "Activation / Désactivation de la mesure de luminosité",
    ),
    CommandDef::boolean(
        CMD_MICROPHONE_ENABLE,
        "Activation / Désactivation de la mesure du niveau sonore (microphone)",
    ),
    CommandDef::boolean(
        CMD_COV_ENABLE,
        "Activation / Désactivation de la mesure de COV",
    ),
    CommandDef::boolean(
        CMD_SD_STORAGE_ENABLE,
        "Activation / Désactivation du stockage local des mesures sur carte SD",
    ),
    CommandDef::boolean(
        CMD_CO2_AUTO_CALIBRATION_ENABLE,
        "Activation / Désactivation de la calibration automatique de la mesure CO2",
    ),
    CommandDef::boolean(
        CMD_BUZZER_LEVEL_CHANGE_ENABLE,
        "Activation / Désactivation de la notification buzzer changement de niveau",
    ),
    CommandDef::boolean(
        CMD_BUZZER_BAD_LEVEL_CONFIRMATION_ENABLE,
        "Activation / Désactivation de la confirmation buzzer niveau mauvais",
    ),
    CommandDef::boolean(
        CMD_HISTORICAL_CO2_ENABLE,
        "Activation / Désactivation de l’envoi de données historisées de CO2",
    ),
    CommandDef::number(
        CMD_DATALOG_RECORD_COUNT,
        "Nombre de nouvelles mesures incluses dans un message datalog",
        1,
        Step::Multiply(1),
        1,
        36,
        None,
    ),
    CommandDef::number(
        CMD_HISTORICAL_TRANSMISSION_PERIOD,
        "Période de transmission des données historisées",
        1,
        Step::Multiply(10),
        3,
        144,
        Some(UNIT_MINUTE),
    ),
    CommandDef::number(
        CMD_TRANSMISSION_REPEAT_COUNT,
        "Nombre de transmission d’une même mesure",
        1,
        Step::Multiply(1),
        1,
        24,
        None,
    ),
];
