//! TTGO T22 v1.1 (T-Beam) configured as a headless router
//!
//! GPS + WiFi, no display.
//!
//! GPIO |     Function    |      Notes
//! -----+-----------------+----------------------------------
//!  4   | LED             |
//!  5   | LoRa SCK        |
//! 12   | GPS RX          | UART1
//! 15   | GPS TX          | UART1
//! 18   | LoRa CS         |
//! 19   | LoRa MISO       |
//! 21   | I2C SDA         | Power management IC
//! 22   | I2C SCL         |
//! 23   | LoRa RESET      |
//! 26   | LoRa DIO0       |
//! 27   | LoRa MOSI       |
//! 32   | LoRa DIO2       |
//! 33   | LoRa DIO1       |
//! 35   | Battery sense   | ADC1 channel 7, input-only
//! 38   | Button          | Input-only, needs pull-up

use crate::variant::validate::assert_valid;
use crate::variant::{
    AdcChannel, AdcUnit, BaudRate, BoardVariant, Capabilities, CapabilityDetails, CapabilitySet,
    ControllerFamily, DeviceRole, HardwareModel, PinAssignment, PinTable, ProtocolDefaults,
    RadioFamily, SerialPort, Signal,
};

pub const VARIANT: BoardVariant = BoardVariant {
    hardware: HardwareModel::TBeam,
    name: "TTGO T22 v1.1 router",
    controller: ControllerFamily::Esp32,
    role: DeviceRole::Router,
    capabilities: Capabilities {
        flags: CapabilitySet::RADIO
            .union(CapabilitySet::GPS)
            .union(CapabilitySet::WIFI)
            .union(CapabilitySet::BLUETOOTH)
            .union(CapabilitySet::BATTERY_SENSE)
            .union(CapabilitySet::BUTTON)
            .union(CapabilitySet::LED)
            .union(CapabilitySet::I2C),
        details: CapabilityDetails {
            radio: Some(RadioFamily::Sx127x),
            gps_serial: Some(SerialPort::new(1)),
            gps_baud: Some(BaudRate::new(9600)),
            screen: None,
            battery_adc: Some(AdcChannel::new(AdcUnit::Adc1, 7)),
        },
    },
    pins: PinTable::new(&[
        PinAssignment::new(Signal::Button, 38).pull_up(),
        PinAssignment::new(Signal::GpsRx, 12),
        PinAssignment::new(Signal::GpsTx, 15),
        PinAssignment::new(Signal::LoraDio0, 26),
        PinAssignment::new(Signal::LoraReset, 23),
        PinAssignment::new(Signal::LoraDio1, 33),
        PinAssignment::new(Signal::LoraDio2, 32),
        PinAssignment::new(Signal::LoraSck, 5),
        PinAssignment::new(Signal::LoraMiso, 19),
        PinAssignment::new(Signal::LoraMosi, 27),
        PinAssignment::new(Signal::LoraCs, 18),
        PinAssignment::new(Signal::I2cSda, 21),
        PinAssignment::new(Signal::I2cScl, 22),
        PinAssignment::new(Signal::Led, 4),
        PinAssignment::new(Signal::Battery, 35),
    ]),
    // Router: 30 minute node info, 15 minute position
    protocol: ProtocolDefaults::from_minutes(30, 15),
};

const _: () = assert_valid(&VARIANT);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Capability, ConfigError, GpioPin, ProtocolDefault};

    #[test]
    fn test_gps_wiring() {
        assert_eq!(VARIANT.lookup(Signal::GpsRx), Ok(GpioPin::new(12)));
        assert_eq!(VARIANT.lookup(Signal::GpsTx), Ok(GpioPin::new(15)));

        let gps = VARIANT.capabilities.gps().unwrap();
        assert_eq!(gps.baud.get(), 9600);
        assert_eq!(gps.serial.index(), 1);
    }

    #[test]
    fn test_headless() {
        assert!(!VARIANT.has(Capability::Screen));
        for signal in [
            Signal::ScreenCs,
            Signal::ScreenDc,
            Signal::ScreenReset,
            Signal::ScreenBusy,
            Signal::ScreenSck,
            Signal::ScreenMosi,
        ] {
            assert_eq!(VARIANT.lookup(signal), Err(ConfigError::UnassignedSignal(signal)));
        }
    }

    #[test]
    fn test_router_intervals() {
        assert_eq!(VARIANT.protocol.get(ProtocolDefault::NodeInfoBroadcast), 1800);
        assert_eq!(VARIANT.protocol.get(ProtocolDefault::PositionBroadcast), 900);
    }

    #[test]
    fn test_button_needs_pullup() {
        assert!(VARIANT.pins.attrs(Signal::Button).unwrap().pull_up);
    }
}
