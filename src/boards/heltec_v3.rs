//! Heltec WiFi LoRa 32 V3
//!
//! ESP32-S3 with SX1262, SSD1306 OLED on I2C and a Vext rail that also
//! powers the display.

use crate::variant::validate::assert_valid;
use crate::variant::{
    AdcChannel, AdcUnit, BoardVariant, Capabilities, CapabilityDetails, CapabilitySet,
    ControllerFamily, DeviceRole, DisplayKind, HardwareModel, PinAssignment, PinTable,
    ProtocolDefaults, RadioFamily, Signal,
};

pub const VARIANT: BoardVariant = BoardVariant {
    hardware: HardwareModel::HeltecV3,
    name: "Heltec WiFi LoRa 32 V3",
    controller: ControllerFamily::Esp32S3,
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
            radio: Some(RadioFamily::Sx126x),
            screen: Some(DisplayKind::OledI2c),
            battery_adc: Some(AdcChannel::new(AdcUnit::Adc1, 0)),
            ..CapabilityDetails::NONE
        },
    },
    pins: PinTable::new(&[
        PinAssignment::new(Signal::LoraSck, 9),
        PinAssignment::new(Signal::LoraMiso, 11),
        PinAssignment::new(Signal::LoraMosi, 10),
        PinAssignment::new(Signal::LoraCs, 8),
        PinAssignment::new(Signal::LoraReset, 12),
        PinAssignment::new(Signal::LoraBusy, 13),
        PinAssignment::new(Signal::LoraDio1, 14),
        PinAssignment::new(Signal::I2cSda, 17),
        PinAssignment::new(Signal::I2cScl, 18),
        PinAssignment::new(Signal::ScreenReset, 21),
        PinAssignment::new(Signal::Vext, 36).active_low(),
        PinAssignment::new(Signal::Battery, 1),
        PinAssignment::new(Signal::Button, 0).pull_up(),
        PinAssignment::new(Signal::Led, 35),
    ]),
    protocol: ProtocolDefaults::from_minutes(15, 15),
};

const _: () = assert_valid(&VARIANT);
