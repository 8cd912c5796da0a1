//! Heltec WiFi LoRa 32 V2.1
//!
//! SX1276 radio, SSD1306 OLED on I2C, Vext switched rail, no GPS.

use crate::variant::validate::assert_valid;
use crate::variant::{
    AdcChannel, AdcUnit, BoardVariant, Capabilities, CapabilityDetails, CapabilitySet,
    ControllerFamily, DeviceRole, DisplayKind, HardwareModel, PinAssignment, PinTable,
    ProtocolDefaults, RadioFamily, Signal,
};

pub const VARIANT: BoardVariant = BoardVariant {
    hardware: HardwareModel::HeltecV21,
    name: "Heltec WiFi LoRa 32 V2.1",
    controller: ControllerFamily::Esp32,
    role: DeviceRole::Client,
    capabilities: Capabilities {
        flags: CapabilitySet::RADIO
            .union(CapabilitySet::WIFI)
            .union(CapabilitySet::BLUETOOTH)
            .union(CapabilitySet::SCREEN)
            .union(CapabilitySet::BATTERY_SENSE)
            .union(CapabilitySet::BUTTON)
            .union(CapabilitySet::LED)
            .union(CapabilitySet::I2C)
            .union(CapabilitySet::PERIPHERAL_POWER),
        details: CapabilityDetails {
            radio: Some(RadioFamily::Sx127x),
            screen: Some(DisplayKind::OledI2c),
            battery_adc: Some(AdcChannel::new(AdcUnit::Adc1, 1)),
            ..CapabilityDetails::NONE
        },
    },
    pins: PinTable::new(&[
        PinAssignment::new(Signal::LoraSck, 5),
        PinAssignment::new(Signal::LoraMiso, 19),
        PinAssignment::new(Signal::LoraMosi, 27),
        PinAssignment::new(Signal::LoraCs, 18),
        PinAssignment::new(Signal::LoraReset, 14),
        PinAssignment::new(Signal::LoraDio0, 26),
        PinAssignment::new(Signal::LoraDio1, 35),
        PinAssignment::new(Signal::LoraDio2, 34),
        PinAssignment::new(Signal::I2cSda, 4),
        PinAssignment::new(Signal::I2cScl, 15),
        PinAssignment::new(Signal::ScreenReset, 16),
        PinAssignment::new(Signal::Vext, 21).active_low(),
        PinAssignment::new(Signal::Battery, 37),
        PinAssignment::new(Signal::Button, 0).pull_up(),
        PinAssignment::new(Signal::Led, 25),
    ]),
    protocol: ProtocolDefaults::from_minutes(15, 15),
};

const _: () = assert_valid(&VARIANT);
