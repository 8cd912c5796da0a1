//! Variant consistency checks
//!
//! All checks are `const fn` so a board definition can reject itself at
//! compile time with [`assert_valid`]. The registry runs the same checks
//! again at boot over every registered variant.

use heapless::Vec;

use crate::config::{broadcast, schema::MAX_PIN_ASSIGNMENTS};
use crate::variant::capability::{Capabilities, Capability, DisplayKind, RadioFamily};
use crate::variant::controller::ControllerFamily;
use crate::variant::error::{ConfigError, Field};
use crate::variant::pins::{Direction, PinTable, Signal};
use crate::variant::protocol::{ProtocolDefault, ProtocolDefaults};
use crate::variant::{BoardVariant, DeviceRole};

/// `?` for const fn
macro_rules! const_try {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(error) => return Err(error),
        }
    };
}

/// Run every check, returning the first failure
pub const fn validate(variant: &BoardVariant) -> Result<(), ConfigError> {
    const_try!(check_table_size(&variant.pins));
    const_try!(check_pin_ranges(&variant.pins, variant.controller));
    const_try!(check_duplicates(&variant.pins));
    const_try!(check_aliases(&variant.pins));
    const_try!(check_capability_fields(&variant.capabilities, &variant.pins));
    const_try!(check_orphans(&variant.capabilities, &variant.pins));
    const_try!(check_adc(variant));
    const_try!(check_serial(&variant.capabilities, variant.controller));
    const_try!(check_protocol(&variant.protocol));
    Ok(())
}

/// Compile-time gate for board definitions
///
/// ```ignore
/// const _: () = assert_valid(&VARIANT);
/// ```
pub const fn assert_valid(variant: &BoardVariant) {
    if let Err(error) = validate(variant) {
        panic!("{}", error.message());
    }
}

const fn check_table_size(pins: &PinTable) -> Result<(), ConfigError> {
    if pins.len() > MAX_PIN_ASSIGNMENTS {
        return Err(ConfigError::TooManyAssignments);
    }
    Ok(())
}

/// Every pin exists, and output signals have an output driver
const fn check_pin_ranges(pins: &PinTable, controller: ControllerFamily) -> Result<(), ConfigError> {
    let table = pins.as_slice();
    let mut i = 0;
    while i < table.len() {
        let assignment = table[i];
        if !controller.is_valid_gpio(assignment.pin) {
            return Err(ConfigError::PinOutOfRange {
                signal: assignment.signal,
                pin: assignment.pin,
            });
        }
        let needs_output = !matches!(assignment.signal.direction(), Direction::Input);
        if needs_output && controller.is_input_only(assignment.pin) {
            return Err(ConfigError::InputOnlyPin {
                signal: assignment.signal,
                pin: assignment.pin,
            });
        }
        i += 1;
    }
    Ok(())
}

const fn check_duplicates(pins: &PinTable) -> Result<(), ConfigError> {
    let table = pins.as_slice();
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].signal as u8 == table[j].signal as u8 {
                return Err(ConfigError::DuplicateSignal(table[i].signal));
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

/// All-pairs comparison; tables hold a few dozen rows at most
const fn check_aliases(pins: &PinTable) -> Result<(), ConfigError> {
    let table = pins.as_slice();
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            let (a, b) = (table[i], table[j]);
            if a.pin.number() == b.pin.number() && !a.signal.may_share(b.signal) {
                return Err(ConfigError::PinAliasConflict {
                    first: a.signal,
                    second: b.signal,
                    pin: a.pin,
                });
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

const fn require_signals(
    pins: &PinTable,
    capability: Capability,
    signals: &[Signal],
) -> Result<(), ConfigError> {
    let mut i = 0;
    while i < signals.len() {
        if !pins.contains(signals[i]) {
            return Err(ConfigError::MissingCapabilityField {
                capability,
                field: Field::Signal(signals[i]),
            });
        }
        i += 1;
    }
    Ok(())
}

const fn missing(capability: Capability, field: Field) -> Result<(), ConfigError> {
    Err(ConfigError::MissingCapabilityField { capability, field })
}

const RADIO_SPI: [Signal; 5] = [
    Signal::LoraSck,
    Signal::LoraMiso,
    Signal::LoraMosi,
    Signal::LoraCs,
    Signal::LoraReset,
];
const SX127X_CONTROL: [Signal; 1] = [Signal::LoraDio0];
const SX126X_CONTROL: [Signal; 2] = [Signal::LoraBusy, Signal::LoraDio1];
const GPS_UART: [Signal; 2] = [Signal::GpsRx, Signal::GpsTx];
const I2C_BUS: [Signal; 2] = [Signal::I2cSda, Signal::I2cScl];
const EINK_SPI: [Signal; 5] = [
    Signal::ScreenCs,
    Signal::ScreenDc,
    Signal::ScreenBusy,
    Signal::ScreenSck,
    Signal::ScreenMosi,
];

/// A present capability has all of its companion fields
const fn check_capability_fields(caps: &Capabilities, pins: &PinTable) -> Result<(), ConfigError> {
    let details = &caps.details;

    if caps.has(Capability::Radio) {
        match details.radio {
            Some(family) => {
                const_try!(require_signals(pins, Capability::Radio, &RADIO_SPI));
                let control: &[Signal] = match family {
                    RadioFamily::Sx127x => &SX127X_CONTROL,
                    RadioFamily::Sx126x => &SX126X_CONTROL,
                };
                const_try!(require_signals(pins, Capability::Radio, control));
            }
            None => return missing(Capability::Radio, Field::RadioFamily),
        }
    }

    if caps.has(Capability::Gps) {
        const_try!(require_signals(pins, Capability::Gps, &GPS_UART));
        if details.gps_serial.is_none() {
            return missing(Capability::Gps, Field::GpsSerialPort);
        }
        if details.gps_baud.is_none() {
            return missing(Capability::Gps, Field::GpsBaudRate);
        }
    }

    if caps.has(Capability::Screen) {
        match details.screen {
            Some(DisplayKind::OledI2c) => {
                if !caps.has(Capability::I2c) {
                    return missing(Capability::Screen, Field::Flag(Capability::I2c));
                }
                const_try!(require_signals(pins, Capability::Screen, &I2C_BUS))
            }
            Some(DisplayKind::EInkSpi) => {
                const_try!(require_signals(pins, Capability::Screen, &EINK_SPI))
            }
            None => return missing(Capability::Screen, Field::DisplayKind),
        }
    }

    if caps.has(Capability::BatterySense) {
        const_try!(require_signals(pins, Capability::BatterySense, &[Signal::Battery]));
        if details.battery_adc.is_none() {
            return missing(Capability::BatterySense, Field::BatteryAdc);
        }
    }

    if caps.has(Capability::Button) {
        const_try!(require_signals(pins, Capability::Button, &[Signal::Button]));
    }
    if caps.has(Capability::Led) {
        const_try!(require_signals(pins, Capability::Led, &[Signal::Led]));
    }
    if caps.has(Capability::I2c) {
        const_try!(require_signals(pins, Capability::I2c, &I2C_BUS));
    }
    if caps.has(Capability::PeripheralPower) {
        const_try!(require_signals(pins, Capability::PeripheralPower, &[Signal::Vext]));
    }

    Ok(())
}

const fn orphan(capability: Capability, field: Field) -> Result<(), ConfigError> {
    Err(ConfigError::OrphanField { capability, field })
}

/// An absent capability defines none of its companion fields
const fn check_orphans(caps: &Capabilities, pins: &PinTable) -> Result<(), ConfigError> {
    let table = pins.as_slice();
    let mut i = 0;
    while i < table.len() {
        let signal = table[i].signal;
        if !caps.has(signal.owner()) {
            return orphan(signal.owner(), Field::Signal(signal));
        }
        i += 1;
    }

    let details = &caps.details;
    if details.radio.is_some() && !caps.has(Capability::Radio) {
        return orphan(Capability::Radio, Field::RadioFamily);
    }
    if details.gps_serial.is_some() && !caps.has(Capability::Gps) {
        return orphan(Capability::Gps, Field::GpsSerialPort);
    }
    if details.gps_baud.is_some() && !caps.has(Capability::Gps) {
        return orphan(Capability::Gps, Field::GpsBaudRate);
    }
    if details.screen.is_some() && !caps.has(Capability::Screen) {
        return orphan(Capability::Screen, Field::DisplayKind);
    }
    if details.battery_adc.is_some() && !caps.has(Capability::BatterySense) {
        return orphan(Capability::BatterySense, Field::BatteryAdc);
    }
    Ok(())
}

/// Battery ADC channel matches the controller's map and is usable with WiFi
const fn check_adc(variant: &BoardVariant) -> Result<(), ConfigError> {
    let (Some(declared), Some(battery)) = (
        variant.capabilities.details.battery_adc,
        variant.pins.find(Signal::Battery),
    ) else {
        return Ok(());
    };

    match variant.controller.adc_channel(battery.pin) {
        Some(actual) if actual.same_as(declared) => {}
        _ => {
            return Err(ConfigError::AdcChannelMismatch {
                pin: battery.pin,
                declared,
            })
        }
    }

    if variant.capabilities.has(Capability::Wifi)
        && variant.controller.adc_blocked_by_wifi(declared.unit)
    {
        return Err(ConfigError::AdcUnavailable(declared));
    }
    Ok(())
}

/// GPS UART exists and runs at a usable rate
const fn check_serial(caps: &Capabilities, controller: ControllerFamily) -> Result<(), ConfigError> {
    if let Some(port) = caps.details.gps_serial {
        if port.index() >= controller.uart_count() {
            return Err(ConfigError::SerialPortOutOfRange(port));
        }
    }
    if let Some(baud) = caps.details.gps_baud {
        if baud.get() == 0 {
            return Err(ConfigError::BaudRateOutOfRange(baud));
        }
    }
    Ok(())
}

const fn check_protocol(defaults: &ProtocolDefaults) -> Result<(), ConfigError> {
    let mut i = 0;
    while i < ProtocolDefault::ALL.len() {
        let default = ProtocolDefault::ALL[i];
        if defaults.get(default) == 0 {
            return Err(ConfigError::InvalidProtocolDefault(default));
        }
        i += 1;
    }
    Ok(())
}

/// Router intervals shorter than the stock client intervals
///
/// Routers are expected, not required, to broadcast less often than
/// clients; the registry logs these as warnings.
pub fn router_advisories(variant: &BoardVariant) -> Vec<ProtocolDefault, 2> {
    let mut advisories = Vec::new();
    if variant.role != DeviceRole::Router {
        return advisories;
    }

    for default in ProtocolDefault::ALL {
        let stock = match default {
            ProtocolDefault::NodeInfoBroadcast => broadcast::NODE_INFO_SECS,
            ProtocolDefault::PositionBroadcast => broadcast::POSITION_SECS,
        };
        if variant.protocol.get(default) < stock {
            // capacity covers every default
            advisories.push(default).ok();
        }
    }
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::{self, ttgo_t22_v1_1};
    use crate::config::schema::MAX_PIN_ASSIGNMENTS;
    use crate::variant::capability::{AdcChannel, AdcUnit, BaudRate, CapabilitySet, SerialPort};
    use crate::variant::pins::{GpioPin, PinAssignment};

    const BASE: BoardVariant = ttgo_t22_v1_1::VARIANT;

    static GPS_TX_ONLY: [PinAssignment; 1] = [PinAssignment::new(Signal::GpsTx, 15)];
    static LED_ON_36: [PinAssignment; 1] = [PinAssignment::new(Signal::Led, 36)];
    static LED_ON_45: [PinAssignment; 1] = [PinAssignment::new(Signal::Led, 45)];
    static BATTERY_ON_13: [PinAssignment; 1] = [PinAssignment::new(Signal::Battery, 13)];
    static LED_TWICE: [PinAssignment; 2] = [
        PinAssignment::new(Signal::Led, 4),
        PinAssignment::new(Signal::Led, 25),
    ];
    static OLED_PINS: [PinAssignment; 2] = [
        PinAssignment::new(Signal::I2cSda, 21),
        PinAssignment::new(Signal::I2cScl, 22),
    ];
    static OVERSIZED: [PinAssignment; MAX_PIN_ASSIGNMENTS + 1] =
        [PinAssignment::new(Signal::Led, 4); MAX_PIN_ASSIGNMENTS + 1];

    #[test]
    fn test_all_boards_valid() {
        for variant in boards::ALL {
            assert_eq!(variant.validate(), Ok(()), "{}", variant.name);
        }
    }

    #[test]
    fn test_chip_select_alias_conflict() {
        const ALIASED: BoardVariant = BoardVariant {
            capabilities: Capabilities {
                flags: CapabilitySet::RADIO.union(CapabilitySet::SCREEN),
                details: crate::variant::CapabilityDetails {
                    radio: Some(RadioFamily::Sx127x),
                    screen: Some(DisplayKind::EInkSpi),
                    ..crate::variant::CapabilityDetails::NONE
                },
            },
            pins: PinTable::new(&[
                PinAssignment::new(Signal::LoraSck, 5),
                PinAssignment::new(Signal::LoraMiso, 19),
                PinAssignment::new(Signal::LoraMosi, 27),
                PinAssignment::new(Signal::LoraCs, 18),
                PinAssignment::new(Signal::LoraReset, 23),
                PinAssignment::new(Signal::LoraDio0, 26),
                PinAssignment::new(Signal::ScreenCs, 18),
                PinAssignment::new(Signal::ScreenDc, 2),
                PinAssignment::new(Signal::ScreenBusy, 4),
                PinAssignment::new(Signal::ScreenSck, 5),
                PinAssignment::new(Signal::ScreenMosi, 27),
            ]),
            ..BASE
        };

        assert_eq!(
            validate(&ALIASED),
            Err(ConfigError::PinAliasConflict {
                first: Signal::LoraCs,
                second: Signal::ScreenCs,
                pin: GpioPin::new(18),
            })
        );
    }

    #[test]
    fn test_shared_spi_bus_is_allowed() {
        const SHARED: PinTable = PinTable::new(&[
            PinAssignment::new(Signal::LoraSck, 5),
            PinAssignment::new(Signal::ScreenSck, 5),
            PinAssignment::new(Signal::LoraMosi, 27),
            PinAssignment::new(Signal::ScreenMosi, 27),
        ]);
        assert_eq!(check_aliases(&SHARED), Ok(()));
    }

    #[test]
    fn test_gps_without_baud_rate() {
        let mut variant = BASE;
        variant.capabilities.details.gps_baud = None;

        assert_eq!(
            validate(&variant),
            Err(ConfigError::MissingCapabilityField {
                capability: Capability::Gps,
                field: Field::GpsBaudRate,
            })
        );
    }

    #[test]
    fn test_gps_without_rx_pin() {
        let mut variant = BASE;
        variant.pins = PinTable::new(&GPS_TX_ONLY);
        variant.capabilities.flags = CapabilitySet::GPS;
        variant.capabilities.details = crate::variant::CapabilityDetails {
            gps_serial: Some(SerialPort::new(1)),
            gps_baud: Some(crate::variant::BaudRate::new(9600)),
            ..crate::variant::CapabilityDetails::NONE
        };

        assert_eq!(
            validate(&variant),
            Err(ConfigError::MissingCapabilityField {
                capability: Capability::Gps,
                field: Field::Signal(Signal::GpsRx),
            })
        );
    }

    #[test]
    fn test_sx126x_requires_busy() {
        let mut variant = BASE;
        variant.capabilities.details.radio = Some(RadioFamily::Sx126x);

        assert_eq!(
            validate(&variant),
            Err(ConfigError::MissingCapabilityField {
                capability: Capability::Radio,
                field: Field::Signal(Signal::LoraBusy),
            })
        );
    }

    #[test]
    fn test_orphan_signal() {
        let mut variant = BASE;
        variant.capabilities.flags.remove(CapabilitySet::LED);

        assert_eq!(
            validate(&variant),
            Err(ConfigError::OrphanField {
                capability: Capability::Led,
                field: Field::Signal(Signal::Led),
            })
        );
    }

    #[test]
    fn test_input_only_output() {
        let mut variant = BASE;
        variant.pins = PinTable::new(&LED_ON_36);
        variant.capabilities.flags = CapabilitySet::LED;
        variant.capabilities.details = crate::variant::CapabilityDetails::NONE;

        assert_eq!(
            validate(&variant),
            Err(ConfigError::InputOnlyPin {
                signal: Signal::Led,
                pin: GpioPin::new(36),
            })
        );
    }

    #[test]
    fn test_pin_out_of_range() {
        let mut variant = BASE;
        variant.pins = PinTable::new(&LED_ON_45);
        variant.capabilities.flags = CapabilitySet::LED;
        variant.capabilities.details = crate::variant::CapabilityDetails::NONE;

        assert_eq!(
            validate(&variant),
            Err(ConfigError::PinOutOfRange {
                signal: Signal::Led,
                pin: GpioPin::new(45),
            })
        );
    }

    #[test]
    fn test_adc_channel_mismatch() {
        let mut variant = BASE;
        variant.capabilities.details.battery_adc = Some(AdcChannel::new(AdcUnit::Adc1, 6));

        assert_eq!(
            validate(&variant),
            Err(ConfigError::AdcChannelMismatch {
                pin: GpioPin::new(35),
                declared: AdcChannel::new(AdcUnit::Adc1, 6),
            })
        );
    }

    #[test]
    fn test_adc2_with_wifi() {
        let mut variant = BASE;
        variant.pins = PinTable::new(&BATTERY_ON_13);
        variant.capabilities.flags = CapabilitySet::BATTERY_SENSE.union(CapabilitySet::WIFI);
        variant.capabilities.details = crate::variant::CapabilityDetails {
            battery_adc: Some(AdcChannel::new(AdcUnit::Adc2, 4)),
            ..crate::variant::CapabilityDetails::NONE
        };

        assert_eq!(
            validate(&variant),
            Err(ConfigError::AdcUnavailable(AdcChannel::new(AdcUnit::Adc2, 4)))
        );

        variant.capabilities.flags.remove(CapabilitySet::WIFI);
        assert_eq!(validate(&variant), Ok(()));
    }

    #[test]
    fn test_serial_port_out_of_range() {
        let mut variant = BASE;
        variant.capabilities.details.gps_serial = Some(SerialPort::new(3));

        assert_eq!(
            validate(&variant),
            Err(ConfigError::SerialPortOutOfRange(SerialPort::new(3)))
        );
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut variant = BASE;
        variant.protocol.position_broadcast_secs = 0;

        assert_eq!(
            validate(&variant),
            Err(ConfigError::InvalidProtocolDefault(
                ProtocolDefault::PositionBroadcast
            ))
        );
    }

    #[test]
    fn test_duplicate_signal() {
        let mut variant = BASE;
        variant.pins = PinTable::new(&LED_TWICE);
        variant.capabilities.flags = CapabilitySet::LED;
        variant.capabilities.details = crate::variant::CapabilityDetails::NONE;

        assert_eq!(
            validate(&variant),
            Err(ConfigError::DuplicateSignal(Signal::Led))
        );
    }

    #[test]
    fn test_zero_baud_rate() {
        let mut variant = BASE;
        variant.capabilities.details.gps_baud = Some(BaudRate::new(0));

        assert_eq!(
            validate(&variant),
            Err(ConfigError::BaudRateOutOfRange(BaudRate::new(0)))
        );
    }

    #[test]
    fn test_orphan_details() {
        let mut variant = BASE;
        variant.capabilities.details.screen = Some(DisplayKind::OledI2c);
        assert_eq!(
            validate(&variant),
            Err(ConfigError::OrphanField {
                capability: Capability::Screen,
                field: Field::DisplayKind,
            })
        );

        let mut variant = BASE;
        variant.capabilities.flags = CapabilitySet::LED;
        variant.capabilities.details = crate::variant::CapabilityDetails {
            radio: Some(RadioFamily::Sx126x),
            ..crate::variant::CapabilityDetails::NONE
        };
        variant.pins = PinTable::new(&LED_TWICE[..1]);
        assert_eq!(
            validate(&variant),
            Err(ConfigError::OrphanField {
                capability: Capability::Radio,
                field: Field::RadioFamily,
            })
        );

        variant.capabilities.details = crate::variant::CapabilityDetails {
            gps_serial: Some(SerialPort::new(1)),
            ..crate::variant::CapabilityDetails::NONE
        };
        assert_eq!(
            validate(&variant),
            Err(ConfigError::OrphanField {
                capability: Capability::Gps,
                field: Field::GpsSerialPort,
            })
        );

        variant.capabilities.details = crate::variant::CapabilityDetails {
            gps_baud: Some(BaudRate::new(9600)),
            ..crate::variant::CapabilityDetails::NONE
        };
        assert_eq!(
            validate(&variant),
            Err(ConfigError::OrphanField {
                capability: Capability::Gps,
                field: Field::GpsBaudRate,
            })
        );

        variant.capabilities.details = crate::variant::CapabilityDetails {
            battery_adc: Some(AdcChannel::new(AdcUnit::Adc1, 7)),
            ..crate::variant::CapabilityDetails::NONE
        };
        assert_eq!(
            validate(&variant),
            Err(ConfigError::OrphanField {
                capability: Capability::BatterySense,
                field: Field::BatteryAdc,
            })
        );
    }

    #[test]
    fn test_too_many_assignments() {
        let mut variant = BASE;
        variant.pins = PinTable::new(&OVERSIZED);

        assert_eq!(validate(&variant), Err(ConfigError::TooManyAssignments));
    }

    #[test]
    fn test_oled_requires_i2c_flag() {
        let mut variant = BASE;
        variant.pins = PinTable::new(&OLED_PINS);
        variant.capabilities.flags = CapabilitySet::SCREEN;
        variant.capabilities.details = crate::variant::CapabilityDetails {
            screen: Some(DisplayKind::OledI2c),
            ..crate::variant::CapabilityDetails::NONE
        };
        assert_eq!(
            validate(&variant),
            Err(ConfigError::MissingCapabilityField {
                capability: Capability::Screen,
                field: Field::Flag(Capability::I2c),
            })
        );

        variant.capabilities.flags.insert(CapabilitySet::I2C);
        assert_eq!(validate(&variant), Ok(()));
    }

    #[test]
    fn test_router_advisories() {
        assert!(router_advisories(&BASE).is_empty());

        let mut chatty = BASE;
        chatty.protocol.node_info_broadcast_secs = 60;
        assert_eq!(
            router_advisories(&chatty).as_slice(),
            &[ProtocolDefault::NodeInfoBroadcast]
        );

        chatty.role = DeviceRole::Client;
        assert!(router_advisories(&chatty).is_empty());
    }

    #[test]
    fn test_every_interval_positive() {
        for variant in boards::ALL {
            for default in ProtocolDefault::ALL {
                assert!(variant.protocol.get(default) > 0, "{}", variant.name);
            }
        }
    }

    #[test]
    fn test_no_exclusive_aliases_on_any_board() {
        for variant in boards::ALL {
            for (i, a) in variant.pins.iter().enumerate() {
                for b in variant.pins.iter().skip(i + 1) {
                    if a.pin == b.pin {
                        assert!(a.signal.may_share(b.signal), "{}", variant.name);
                    }
                }
            }
        }
    }
}
