//! LilyGO T-Echo
//!
//! nRF52840 with SX1262, GNSS and an e-ink panel on its own SPI bus.
//! Pins are numbered `port * 32 + pin`, so P1.09 is 41.

use crate::variant::validate::assert_valid;
use crate::variant::{
    AdcChannel, AdcUnit, BaudRate, BoardVariant, Capabilities, CapabilityDetails, CapabilitySet,
    ControllerFamily, DeviceRole, DisplayKind, HardwareModel, PinAssignment, PinTable,
    ProtocolDefaults, RadioFamily, SerialPort, Signal,
};

/// nRF52 port 1 offset
const P1: u8 = 32;

pub const VARIANT: BoardVariant = BoardVariant {
    hardware: HardwareModel::TEcho,
    name: "LilyGO T-Echo",
    controller: ControllerFamily::Nrf52840,
    role: DeviceRole::Client,
    capabilities: Capabilities {
        flags: CapabilitySet::RADIO
            .union(CapabilitySet::GPS)
            .union(CapabilitySet::BLUETOOTH)
            .union(CapabilitySet::SCREEN)
            .union(CapabilitySet::BATTERY_SENSE)
            .union(CapabilitySet::BUTTON)
            .union(CapabilitySet::LED)
            .union(CapabilitySet::I2C),
        details: CapabilityDetails {
            radio: Some(RadioFamily::Sx126x),
            gps_serial: Some(SerialPort::new(1)),
            gps_baud: Some(BaudRate::new(9600)),
            screen: Some(DisplayKind::EInkSpi),
            battery_adc: Some(AdcChannel::new(AdcUnit::Adc1, 2)),
        },
    },
    pins: PinTable::new(&[
        PinAssignment::new(Signal::LoraSck, 19),
        PinAssignment::new(Signal::LoraMiso, 23),
        PinAssignment::new(Signal::LoraMosi, 22),
        PinAssignment::new(Signal::LoraCs, 24),
        PinAssignment::new(Signal::LoraReset, 25),
        PinAssignment::new(Signal::LoraBusy, 17),
        PinAssignment::new(Signal::LoraDio1, 20),
        PinAssignment::new(Signal::GpsRx, P1 + 9),
        PinAssignment::new(Signal::GpsTx, P1 + 8),
        PinAssignment::new(Signal::ScreenCs, 30),
        PinAssignment::new(Signal::ScreenDc, 28),
        PinAssignment::new(Signal::ScreenBusy, 3),
        PinAssignment::new(Signal::ScreenReset, 2),
        PinAssignment::new(Signal::ScreenSck, 31),
        PinAssignment::new(Signal::ScreenMosi, 29),
        PinAssignment::new(Signal::I2cSda, 26),
        PinAssignment::new(Signal::I2cScl, 27),
        PinAssignment::new(Signal::Battery, 4),
        PinAssignment::new(Signal::Button, P1 + 10).pull_up(),
        PinAssignment::new(Signal::Led, P1 + 1).active_low(),
    ]),
    protocol: ProtocolDefaults::from_minutes(15, 15),
};

const _: () = assert_valid(&VARIANT);
