//! Capability flags and their detail values
//!
//! A capability is either present or absent on a board. Present capabilities
//! carry detail values (radio chip family, GPS serial port, ...) that
//! consumers may only read after testing presence.

use crate::variant::error::{ConfigError, Field};

bitflags::bitflags! {
    /// Set of peripheral subsystems present on a board
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CapabilitySet: u16 {
        const RADIO = 1 << 0;
        const GPS = 1 << 1;
        const WIFI = 1 << 2;
        const BLUETOOTH = 1 << 3;
        const SCREEN = 1 << 4;
        const BATTERY_SENSE = 1 << 5;
        const BUTTON = 1 << 6;
        const LED = 1 << 7;
        const I2C = 1 << 8;
        const PERIPHERAL_POWER = 1 << 9;
    }
}

/// A single peripheral subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Radio,
    Gps,
    Wifi,
    Bluetooth,
    Screen,
    BatterySense,
    Button,
    Led,
    I2c,
    /// Switched rail powering external peripherals (Vext)
    PeripheralPower,
}

impl Capability {
    pub const ALL: [Capability; 10] = [
        Self::Radio,
        Self::Gps,
        Self::Wifi,
        Self::Bluetooth,
        Self::Screen,
        Self::BatterySense,
        Self::Button,
        Self::Led,
        Self::I2c,
        Self::PeripheralPower,
    ];

    /// Flag bit for this capability
    pub const fn flag(self) -> CapabilitySet {
        match self {
            Self::Radio => CapabilitySet::RADIO,
            Self::Gps => CapabilitySet::GPS,
            Self::Wifi => CapabilitySet::WIFI,
            Self::Bluetooth => CapabilitySet::BLUETOOTH,
            Self::Screen => CapabilitySet::SCREEN,
            Self::BatterySense => CapabilitySet::BATTERY_SENSE,
            Self::Button => CapabilitySet::BUTTON,
            Self::Led => CapabilitySet::LED,
            Self::I2c => CapabilitySet::I2C,
            Self::PeripheralPower => CapabilitySet::PERIPHERAL_POWER,
        }
    }

    /// Conventional flag name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Radio => "HAS_RADIO",
            Self::Gps => "HAS_GPS",
            Self::Wifi => "HAS_WIFI",
            Self::Bluetooth => "HAS_BLUETOOTH",
            Self::Screen => "HAS_SCREEN",
            Self::BatterySense => "HAS_BATTERY_SENSE",
            Self::Button => "HAS_BUTTON",
            Self::Led => "HAS_LED",
            Self::I2c => "HAS_I2C",
            Self::PeripheralPower => "HAS_VEXT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|cap| cap.name() == name)
    }
}

/// LoRa transceiver chip family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadioFamily {
    /// SX1276/SX1278 (RF95 compatible), DIO0 interrupt
    Sx127x,
    /// SX1262/SX1268, BUSY line and DIO1 interrupt
    Sx126x,
}

impl RadioFamily {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sx127x => "SX127x",
            Self::Sx126x => "SX126x",
        }
    }
}

/// Display hardware and the bus it hangs off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    /// SSD1306-style OLED on the I2C bus
    OledI2c,
    /// E-ink panel on a write-only SPI bus
    EInkSpi,
}

/// Hardware UART index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerialPort(u8);

impl SerialPort {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Serial line rate in bits per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaudRate(u32);

impl BaudRate {
    pub const fn new(bps: u32) -> Self {
        Self(bps)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// ADC peripheral instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdcUnit {
    Adc1,
    Adc2,
}

impl AdcUnit {
    /// 1-based unit number
    pub const fn number(self) -> u8 {
        match self {
            Self::Adc1 => 1,
            Self::Adc2 => 2,
        }
    }
}

/// ADC unit and input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdcChannel {
    pub unit: AdcUnit,
    pub channel: u8,
}

impl AdcChannel {
    pub const fn new(unit: AdcUnit, channel: u8) -> Self {
        Self { unit, channel }
    }

    /// Equality usable in const context
    pub const fn same_as(self, other: AdcChannel) -> bool {
        self.unit as u8 == other.unit as u8 && self.channel == other.channel
    }
}

/// GPS serial settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsDetail {
    pub serial: SerialPort,
    pub baud: BaudRate,
}

/// Detail values attached to capabilities
///
/// Every field is optional so that a variant which sets a flag but forgets
/// its detail can be represented, and rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityDetails {
    pub radio: Option<RadioFamily>,
    pub gps_serial: Option<SerialPort>,
    pub gps_baud: Option<BaudRate>,
    pub screen: Option<DisplayKind>,
    pub battery_adc: Option<AdcChannel>,
}

impl CapabilityDetails {
    /// No details defined
    pub const NONE: Self = Self {
        radio: None,
        gps_serial: None,
        gps_baud: None,
        screen: None,
        battery_adc: None,
    };
}

/// Capability flags with their details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub flags: CapabilitySet,
    pub details: CapabilityDetails,
}

impl Capabilities {
    pub const fn has(&self, capability: Capability) -> bool {
        self.flags.bits() & capability.flag().bits() != 0
    }

    fn require<T>(
        &self,
        capability: Capability,
        field: Field,
        value: Option<T>,
    ) -> Result<T, ConfigError> {
        if !self.has(capability) {
            return Err(ConfigError::CapabilityAbsent(capability));
        }
        value.ok_or(ConfigError::MissingCapabilityField { capability, field })
    }

    /// Radio chip family
    pub fn radio(&self) -> Result<RadioFamily, ConfigError> {
        self.require(Capability::Radio, Field::RadioFamily, self.details.radio)
    }

    /// GPS serial port and baud rate
    pub fn gps(&self) -> Result<GpsDetail, ConfigError> {
        let serial = self.require(Capability::Gps, Field::GpsSerialPort, self.details.gps_serial)?;
        let baud = self.require(Capability::Gps, Field::GpsBaudRate, self.details.gps_baud)?;
        Ok(GpsDetail { serial, baud })
    }

    /// Display kind
    pub fn screen(&self) -> Result<DisplayKind, ConfigError> {
        self.require(Capability::Screen, Field::DisplayKind, self.details.screen)
    }

    /// ADC unit and channel of the battery sense input
    pub fn battery_adc(&self) -> Result<AdcChannel, ConfigError> {
        self.require(
            Capability::BatterySense,
            Field::BatteryAdc,
            self.details.battery_adc,
        )
    }
}
