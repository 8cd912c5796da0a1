//! Board variant schema
//!
//! A [`BoardVariant`] is the complete, immutable hardware description of one
//! product SKU: which peripheral subsystems exist, where they are wired and
//! which protocol timing defaults the board ships with. Variants are `const`
//! data, validated at compile time by the board definitions themselves and
//! again at boot by the [`registry`].

pub mod capability;
pub mod controller;
pub mod error;
pub mod fingerprint;
pub mod pins;
pub mod protocol;
pub mod registry;
pub mod validate;

pub use capability::{
    AdcChannel, AdcUnit, BaudRate, Capabilities, Capability, CapabilityDetails, CapabilitySet,
    DisplayKind, GpsDetail, RadioFamily, SerialPort,
};
pub use controller::ControllerFamily;
pub use error::{ConfigError, Field, RegistryError};
pub use pins::{GpioPin, PinAssignment, PinAttrs, PinTable, Signal};
pub use protocol::{ProtocolDefault, ProtocolDefaults};
pub use registry::{RegistryState, VariantRegistry};

/// Hardware model identifiers, as reported to the mesh
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardwareModel {
    /// LilyGO T-Beam family (T22 PCB)
    TBeam = 4,
    /// LilyGO T-Echo
    TEcho = 7,
    /// Heltec WiFi LoRa 32 V2.1
    HeltecV21 = 10,
    /// Heltec WiFi LoRa 32 V3
    HeltecV3 = 43,
    /// Seeed XIAO ESP32S3 with Wio-SX1262
    SeeedXiaoS3 = 81,
}

impl HardwareModel {
    pub const ALL: [HardwareModel; 5] = [
        Self::TBeam,
        Self::TEcho,
        Self::HeltecV21,
        Self::HeltecV3,
        Self::SeeedXiaoS3,
    ];

    /// Numeric hardware model id
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Conventional upper-case name used as the build parameter
    pub const fn name(self) -> &'static str {
        match self {
            Self::TBeam => "TBEAM",
            Self::TEcho => "T_ECHO",
            Self::HeltecV21 => "HELTEC_V2_1",
            Self::HeltecV3 => "HELTEC_V3",
            Self::SeeedXiaoS3 => "SEEED_XIAO_S3",
        }
    }

    /// Parse a hardware model name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.name().eq_ignore_ascii_case(name))
    }
}

/// Deployment role a variant is tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceRole {
    /// User endpoint
    Client,
    /// Relays mesh traffic, favours long broadcast intervals
    Router,
}

/// Complete hardware description of one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardVariant {
    pub hardware: HardwareModel,
    /// Human-readable product name
    pub name: &'static str,
    pub controller: ControllerFamily,
    pub role: DeviceRole,
    pub capabilities: Capabilities,
    pub pins: PinTable,
    pub protocol: ProtocolDefaults,
}

impl BoardVariant {
    /// Run every consistency check over this variant
    pub const fn validate(&self) -> Result<(), ConfigError> {
        validate::validate(self)
    }

    /// Resolve a signal to its pin, failing if the board does not wire it
    pub fn lookup(&self, signal: Signal) -> Result<GpioPin, ConfigError> {
        self.pins.lookup(signal)
    }

    /// Presence test for a capability
    pub const fn has(&self, capability: Capability) -> bool {
        self.capabilities.has(capability)
    }

    /// CRC-16 over the canonical encoding of this variant
    pub fn fingerprint(&self) -> u16 {
        fingerprint::fingerprint(self)
    }

    /// Resolve a conventional board-definition name to its integer value
    ///
    /// Accepts signal names (`GPS_RX`, `LORA_CS`, optionally suffixed with
    /// `_PIN`), capability flags (`HAS_GPS`), GPS and battery details
    /// (`GPS_BAUDRATE`, `GPS_SERIAL_NUM`, `VBAT_MESURE_ADC_UNIT`,
    /// `VBAT_MESURE_ADC_CHANNEL`) and protocol defaults.
    pub fn value(&self, name: &str) -> Result<u32, ConfigError> {
        if let Some(signal) = Signal::from_name(name) {
            return self.pins.lookup(signal).map(|pin| u32::from(pin.number()));
        }
        if let Some(default) = ProtocolDefault::from_name(name) {
            return Ok(self.protocol.get(default));
        }
        if let Some(capability) = Capability::from_name(name) {
            return Ok(u32::from(self.has(capability)));
        }

        match name {
            "GPS_BAUDRATE" => self.capabilities.gps().map(|gps| gps.baud.get()),
            "GPS_SERIAL_NUM" => self
                .capabilities
                .gps()
                .map(|gps| u32::from(gps.serial.index())),
            "VBAT_MESURE_ADC_UNIT" => self
                .capabilities
                .battery_adc()
                .map(|adc| u32::from(adc.unit.number())),
            "VBAT_MESURE_ADC_CHANNEL" | "ADC_CHANNEL" => self
                .capabilities
                .battery_adc()
                .map(|adc| u32::from(adc.channel)),
            _ => Err(ConfigError::UnknownSetting),
        }
    }
}
