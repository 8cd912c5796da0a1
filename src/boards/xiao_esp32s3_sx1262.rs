//! Seeed XIAO ESP32S3 with Wio-SX1262
//!
//! Headless, no GPS. The SX1262 uses a TCXO on DIO3 and an RX enable line
//! for its antenna switch.

use crate::variant::validate::assert_valid;
use crate::variant::{
    BoardVariant, Capabilities, CapabilityDetails, CapabilitySet, ControllerFamily, DeviceRole,
    HardwareModel, PinAssignment, PinTable, ProtocolDefaults, RadioFamily, Signal,
};

pub const VARIANT: BoardVariant = BoardVariant {
    hardware: HardwareModel::SeeedXiaoS3,
    name: "Seeed XIAO ESP32S3 + Wio-SX1262",
    controller: ControllerFamily::Esp32S3,
    role: DeviceRole::Client,
    capabilities: Capabilities {
        flags: CapabilitySet::RADIO
            .union(CapabilitySet::WIFI)
            .union(CapabilitySet::BLUETOOTH)
            .union(CapabilitySet::LED),
        details: CapabilityDetails {
            radio: Some(RadioFamily::Sx126x),
            ..CapabilityDetails::NONE
        },
    },
    pins: PinTable::new(&[
        PinAssignment::new(Signal::LoraSck, 7),
        PinAssignment::new(Signal::LoraMiso, 8),
        PinAssignment::new(Signal::LoraMosi, 9),
        PinAssignment::new(Signal::LoraCs, 41),
        PinAssignment::new(Signal::LoraReset, 42),
        PinAssignment::new(Signal::LoraBusy, 40),
        PinAssignment::new(Signal::LoraDio1, 39),
        PinAssignment::new(Signal::LoraRxEn, 38),
        PinAssignment::new(Signal::Led, 48).active_low(),
    ]),
    protocol: ProtocolDefaults::from_minutes(15, 15),
};

const _: () = assert_valid(&VARIANT);
