//! Configuration error taxonomy
//!
//! Every error here is a build-time or boot-time fault. None of them is
//! expected in a correctly assembled release build, and none is recoverable:
//! the firmware refuses to drive hardware from a description that fails.

use core::fmt;

use crate::variant::capability::{AdcChannel, BaudRate, Capability, SerialPort};
use crate::variant::pins::{GpioPin, Signal};
use crate::variant::protocol::ProtocolDefault;
use crate::variant::HardwareModel;

/// Companion field of a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Signal(Signal),
    /// Another capability the first one depends on
    Flag(Capability),
    RadioFamily,
    GpsSerialPort,
    GpsBaudRate,
    DisplayKind,
    BatteryAdc,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Signal(signal) => f.write_str(signal.name()),
            Field::Flag(capability) => f.write_str(capability.name()),
            Field::RadioFamily => f.write_str("radio chip family"),
            Field::GpsSerialPort => f.write_str("GPS_SERIAL_NUM"),
            Field::GpsBaudRate => f.write_str("GPS_BAUDRATE"),
            Field::DisplayKind => f.write_str("display kind"),
            Field::BatteryAdc => f.write_str("battery ADC channel"),
        }
    }
}

/// Errors in a single board variant, or in a consumer's use of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Capability present but a required companion field is not defined
    MissingCapabilityField { capability: Capability, field: Field },
    /// Detail of an absent capability was requested
    CapabilityAbsent(Capability),
    /// Two electrically exclusive signals share a pin
    PinAliasConflict {
        first: Signal,
        second: Signal,
        pin: GpioPin,
    },
    /// Signal assigned more than once
    DuplicateSignal(Signal),
    /// Signal not wired on this board
    UnassignedSignal(Signal),
    /// Companion field defined for a capability the board does not have
    OrphanField { capability: Capability, field: Field },
    /// Pin does not exist on the controller
    PinOutOfRange { signal: Signal, pin: GpioPin },
    /// Output signal placed on an input-only pin
    InputOnlyPin { signal: Signal, pin: GpioPin },
    /// Declared ADC channel does not sample the battery pin
    AdcChannelMismatch { pin: GpioPin, declared: AdcChannel },
    /// ADC unit cannot be used alongside WiFi on this controller
    AdcUnavailable(AdcChannel),
    /// GPS serial port index beyond the controller's UARTs
    SerialPortOutOfRange(SerialPort),
    /// GPS baud rate of zero
    BaudRateOutOfRange(BaudRate),
    /// Protocol default is not a positive number of seconds
    InvalidProtocolDefault(ProtocolDefault),
    /// More pin assignments than the schema allows
    TooManyAssignments,
    /// Name does not refer to any board setting
    UnknownSetting,
}

impl ConfigError {
    /// Static description, usable from const panics
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingCapabilityField { .. } => "capability is missing a required field",
            Self::CapabilityAbsent(_) => "capability is not present on this board",
            Self::PinAliasConflict { .. } => "two exclusive signals share a pin",
            Self::DuplicateSignal(_) => "signal is assigned more than once",
            Self::UnassignedSignal(_) => "signal is not assigned on this board",
            Self::OrphanField { .. } => "field defined for an absent capability",
            Self::PinOutOfRange { .. } => "pin does not exist on this controller",
            Self::InputOnlyPin { .. } => "output signal on an input-only pin",
            Self::AdcChannelMismatch { .. } => "ADC channel does not match the battery pin",
            Self::AdcUnavailable(_) => "ADC unit is unusable while WiFi is enabled",
            Self::SerialPortOutOfRange(_) => "serial port index out of range",
            Self::BaudRateOutOfRange(_) => "baud rate must be positive",
            Self::InvalidProtocolDefault(_) => "protocol default must be positive",
            Self::TooManyAssignments => "too many pin assignments",
            Self::UnknownSetting => "unknown board setting",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCapabilityField { capability, field } => {
                write!(f, "{} requires {}", capability.name(), field)
            }
            Self::CapabilityAbsent(capability) => write!(f, "{} is 0", capability.name()),
            Self::PinAliasConflict { first, second, pin } => write!(
                f,
                "{} and {} both use pin {}",
                first.name(),
                second.name(),
                pin.number()
            ),
            Self::DuplicateSignal(signal) => write!(f, "{} assigned twice", signal.name()),
            Self::UnassignedSignal(signal) => write!(f, "{} is not assigned", signal.name()),
            Self::OrphanField { capability, field } => {
                write!(f, "{} defined but {} is 0", field, capability.name())
            }
            Self::PinOutOfRange { signal, pin } => {
                write!(f, "{} uses nonexistent pin {}", signal.name(), pin.number())
            }
            Self::InputOnlyPin { signal, pin } => {
                write!(f, "{} drives input-only pin {}", signal.name(), pin.number())
            }
            Self::AdcChannelMismatch { pin, declared } => write!(
                f,
                "pin {} is not ADC{} channel {}",
                pin.number(),
                declared.unit.number(),
                declared.channel
            ),
            Self::AdcUnavailable(adc) => {
                write!(f, "ADC{} is unavailable with WiFi enabled", adc.unit.number())
            }
            Self::SerialPortOutOfRange(port) => {
                write!(f, "serial port {} does not exist", port.index())
            }
            Self::BaudRateOutOfRange(baud) => write!(f, "GPS_BAUDRATE {} is invalid", baud.get()),
            Self::InvalidProtocolDefault(default) => {
                write!(f, "{} must be positive", default.name())
            }
            _ => f.write_str(self.message()),
        }
    }
}

/// Errors of the variant registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Active variant read before selection
    RegistryNotSelected,
    /// The build enables no `board-*` feature
    NoBuildSelection,
    /// A variant was already selected
    AlreadySelected(HardwareModel),
    /// No variant registered for this hardware model
    UnknownHardware(HardwareModel),
    /// Two registered variants share a hardware model
    DuplicateHardwareId(HardwareModel),
    /// A registered variant failed validation
    InvalidVariant {
        hardware: HardwareModel,
        error: ConfigError,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistryNotSelected => f.write_str("no board variant selected"),
            Self::NoBuildSelection => f.write_str("build selects no board variant"),
            Self::AlreadySelected(hardware) => {
                write!(f, "board variant {} already selected", hardware.name())
            }
            Self::UnknownHardware(hardware) => {
                write!(f, "no board variant for {}", hardware.name())
            }
            Self::DuplicateHardwareId(hardware) => {
                write!(f, "{} registered more than once", hardware.name())
            }
            Self::InvalidVariant { hardware, error } => write!(f, "{}: {}", hardware.name(), error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_alias_conflict() {
        let error = ConfigError::PinAliasConflict {
            first: Signal::LoraCs,
            second: Signal::ScreenCs,
            pin: GpioPin::new(18),
        };
        assert_eq!(error.to_string(), "LORA_CS and SCREEN_CS both use pin 18");
    }

    #[test]
    fn test_display_missing_field() {
        let error = ConfigError::MissingCapabilityField {
            capability: Capability::Gps,
            field: Field::GpsBaudRate,
        };
        assert_eq!(error.to_string(), "HAS_GPS requires GPS_BAUDRATE");

        let error = ConfigError::MissingCapabilityField {
            capability: Capability::Screen,
            field: Field::Flag(Capability::I2c),
        };
        assert_eq!(error.to_string(), "HAS_SCREEN requires HAS_I2C");
    }

    #[test]
    fn test_display_zero_baud_rate() {
        let error = ConfigError::BaudRateOutOfRange(BaudRate::new(0));
        assert_eq!(error.to_string(), "GPS_BAUDRATE 0 is invalid");
    }

    #[test]
    fn test_display_registry_error() {
        let error = RegistryError::InvalidVariant {
            hardware: HardwareModel::TBeam,
            error: ConfigError::UnassignedSignal(Signal::LoraCs),
        };
        assert_eq!(error.to_string(), "TBEAM: LORA_CS is not assigned");
    }
}
