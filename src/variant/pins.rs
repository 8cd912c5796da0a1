//! Pin assignment table
//!
//! Maps logical peripheral signals to physical controller pins. A signal the
//! board does not wire is absent from the table; [`PinTable::lookup`] reports
//! that as [`ConfigError::UnassignedSignal`] rather than handing out a
//! placeholder pin number.

use crate::variant::capability::Capability;
use crate::variant::error::ConfigError;

/// Physical GPIO number on the board's controller
///
/// nRF52 pins are numbered `port * 32 + pin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpioPin(u8);

impl GpioPin {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

/// Signal direction as seen from the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
    /// Open-drain bus line, needs an output driver
    Bidirectional,
}

/// Shared bus line roles
///
/// Two signals with the same role share a physical bus and may use the same
/// pin. Chip selects are never bus lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusLine {
    SpiSck,
    SpiMiso,
    SpiMosi,
    I2cSda,
    I2cScl,
}

/// How a signal may share its pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sharing {
    /// Must own its pin outright
    Exclusive,
    /// May alias signals with the same bus line role
    Bus(BusLine),
}

/// Logical peripheral signal
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    LoraSck,
    LoraMiso,
    LoraMosi,
    LoraCs,
    LoraReset,
    LoraDio0,
    LoraDio1,
    LoraDio2,
    LoraBusy,
    LoraRxEn,
    LoraTxEn,
    GpsRx,
    GpsTx,
    I2cSda,
    I2cScl,
    ScreenCs,
    ScreenDc,
    ScreenReset,
    ScreenBusy,
    ScreenSck,
    ScreenMosi,
    Battery,
    Button,
    Led,
    Vext,
}

impl Signal {
    pub const ALL: [Signal; 25] = [
        Self::LoraSck,
        Self::LoraMiso,
        Self::LoraMosi,
        Self::LoraCs,
        Self::LoraReset,
        Self::LoraDio0,
        Self::LoraDio1,
        Self::LoraDio2,
        Self::LoraBusy,
        Self::LoraRxEn,
        Self::LoraTxEn,
        Self::GpsRx,
        Self::GpsTx,
        Self::I2cSda,
        Self::I2cScl,
        Self::ScreenCs,
        Self::ScreenDc,
        Self::ScreenReset,
        Self::ScreenBusy,
        Self::ScreenSck,
        Self::ScreenMosi,
        Self::Battery,
        Self::Button,
        Self::Led,
        Self::Vext,
    ];

    /// Conventional upper-case signal name
    pub const fn name(self) -> &'static str {
        match self {
            Self::LoraSck => "LORA_SCK",
            Self::LoraMiso => "LORA_MISO",
            Self::LoraMosi => "LORA_MOSI",
            Self::LoraCs => "LORA_CS",
            Self::LoraReset => "LORA_RESET",
            Self::LoraDio0 => "LORA_DIO0",
            Self::LoraDio1 => "LORA_DIO1",
            Self::LoraDio2 => "LORA_DIO2",
            Self::LoraBusy => "LORA_BUSY",
            Self::LoraRxEn => "LORA_RXEN",
            Self::LoraTxEn => "LORA_TXEN",
            Self::GpsRx => "GPS_RX",
            Self::GpsTx => "GPS_TX",
            Self::I2cSda => "I2C_SDA",
            Self::I2cScl => "I2C_SCL",
            Self::ScreenCs => "SCREEN_CS",
            Self::ScreenDc => "SCREEN_DC",
            Self::ScreenReset => "SCREEN_RESET",
            Self::ScreenBusy => "SCREEN_BUSY",
            Self::ScreenSck => "SCREEN_SCK",
            Self::ScreenMosi => "SCREEN_MOSI",
            Self::Battery => "BATTERY",
            Self::Button => "BUTTON",
            Self::Led => "LED",
            Self::Vext => "VEXT",
        }
    }

    /// Parse a signal name, with or without a trailing `_PIN`
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_suffix("_PIN").unwrap_or(name);
        Self::ALL.iter().copied().find(|signal| signal.name() == name)
    }

    /// Capability whose presence makes this signal meaningful
    pub const fn owner(self) -> Capability {
        match self {
            Self::LoraSck
            | Self::LoraMiso
            | Self::LoraMosi
            | Self::LoraCs
            | Self::LoraReset
            | Self::LoraDio0
            | Self::LoraDio1
            | Self::LoraDio2
            | Self::LoraBusy
            | Self::LoraRxEn
            | Self::LoraTxEn => Capability::Radio,
            Self::GpsRx | Self::GpsTx => Capability::Gps,
            Self::I2cSda | Self::I2cScl => Capability::I2c,
            Self::ScreenCs
            | Self::ScreenDc
            | Self::ScreenReset
            | Self::ScreenBusy
            | Self::ScreenSck
            | Self::ScreenMosi => Capability::Screen,
            Self::Battery => Capability::BatterySense,
            Self::Button => Capability::Button,
            Self::Led => Capability::Led,
            Self::Vext => Capability::PeripheralPower,
        }
    }

    pub const fn sharing(self) -> Sharing {
        match self {
            Self::LoraSck | Self::ScreenSck => Sharing::Bus(BusLine::SpiSck),
            Self::LoraMiso => Sharing::Bus(BusLine::SpiMiso),
            Self::LoraMosi | Self::ScreenMosi => Sharing::Bus(BusLine::SpiMosi),
            Self::I2cSda => Sharing::Bus(BusLine::I2cSda),
            Self::I2cScl => Sharing::Bus(BusLine::I2cScl),
            _ => Sharing::Exclusive,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::LoraMiso
            | Self::LoraDio0
            | Self::LoraDio1
            | Self::LoraDio2
            | Self::LoraBusy
            | Self::GpsRx
            | Self::ScreenBusy
            | Self::Battery
            | Self::Button => Direction::Input,
            Self::I2cSda | Self::I2cScl => Direction::Bidirectional,
            _ => Direction::Output,
        }
    }

    /// Whether `self` and `other` may legitimately use the same pin
    pub const fn may_share(self, other: Signal) -> bool {
        match (self.sharing(), other.sharing()) {
            (Sharing::Bus(a), Sharing::Bus(b)) => a as u8 == b as u8,
            _ => false,
        }
    }
}

/// Electrical modifiers of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinAttrs {
    /// Input needs the pull-up enabled
    pub pull_up: bool,
    /// Output is asserted by driving it low
    pub active_low: bool,
}

impl PinAttrs {
    pub const NONE: Self = Self {
        pull_up: false,
        active_low: false,
    };

    /// Compact encoding, bit 0 pull-up, bit 1 active-low
    pub const fn bits(self) -> u8 {
        (self.pull_up as u8) | ((self.active_low as u8) << 1)
    }
}

/// One row of the pin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinAssignment {
    pub signal: Signal,
    pub pin: GpioPin,
    pub attrs: PinAttrs,
}

impl PinAssignment {
    pub const fn new(signal: Signal, pin: u8) -> Self {
        Self {
            signal,
            pin: GpioPin::new(pin),
            attrs: PinAttrs::NONE,
        }
    }

    pub const fn pull_up(mut self) -> Self {
        self.attrs.pull_up = true;
        self
    }

    pub const fn active_low(mut self) -> Self {
        self.attrs.active_low = true;
        self
    }
}

/// Pin assignments of one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinTable {
    assignments: &'static [PinAssignment],
}

impl PinTable {
    pub const fn new(assignments: &'static [PinAssignment]) -> Self {
        Self { assignments }
    }

    pub const fn as_slice(&self) -> &'static [PinAssignment] {
        self.assignments
    }

    pub const fn len(&self) -> usize {
        self.assignments.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// First assignment for `signal`, if any
    pub const fn find(&self, signal: Signal) -> Option<&'static PinAssignment> {
        let assignments = self.assignments;
        let mut i = 0;
        while i < assignments.len() {
            if assignments[i].signal as u8 == signal as u8 {
                return Some(&assignments[i]);
            }
            i += 1;
        }
        None
    }

    pub const fn contains(&self, signal: Signal) -> bool {
        self.find(signal).is_some()
    }

    /// Full assignment for `signal`
    pub fn assignment(&self, signal: Signal) -> Result<&'static PinAssignment, ConfigError> {
        self.find(signal)
            .ok_or(ConfigError::UnassignedSignal(signal))
    }

    /// Pin wired to `signal`
    pub fn lookup(&self, signal: Signal) -> Result<GpioPin, ConfigError> {
        self.assignment(signal).map(|assignment| assignment.pin)
    }

    /// Electrical modifiers of `signal`
    pub fn attrs(&self, signal: Signal) -> Result<PinAttrs, ConfigError> {
        self.assignment(signal).map(|assignment| assignment.attrs)
    }

    /// Pin wired to `signal` when the board treats it as optional
    pub fn optional(&self, signal: Signal) -> Option<GpioPin> {
        self.find(signal).map(|assignment| assignment.pin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PinAssignment> {
        self.assignments.iter()
    }
}
