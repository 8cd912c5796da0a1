//! Variant fingerprints
//!
//! A variant is encoded into a canonical byte layout and checksummed with
//! CRC-16-XMODEM. Firmware logs the fingerprint of its active variant at
//! boot; the host tool prints the same value so a deployed device can be
//! matched to the board definition it was built from.
//!
//! Layout (all integers little-endian):
//! ```text
//! [version][hw_model: u16][controller][role][flags: u16]
//! [radio][gps_serial][gps_baud: u32][screen][adc_unit][adc_channel]
//! [pin_count] ([signal][pin][attrs]) * pin_count
//! [node_info_secs: u32][position_secs: u32]
//! ```
//! Absent details encode as `0xFF` (`0` for the baud rate).

use crc::{Crc, CRC_16_XMODEM};
use heapless::Vec;

use crate::config::schema::{ENCODING_VERSION, MAX_ENCODED_VARIANT, MAX_PIN_ASSIGNMENTS};
use crate::variant::BoardVariant;

const CRC: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

const ABSENT: u8 = 0xFF;

/// Canonical encoding of `variant`
///
/// Validated variants always fit. An oversized table is cut to the first
/// `MAX_PIN_ASSIGNMENTS` rows and `pin_count` records the rows encoded, so
/// every push below stays within capacity.
pub fn encode(variant: &BoardVariant) -> Vec<u8, MAX_ENCODED_VARIANT> {
    let mut buf = Vec::new();
    let details = &variant.capabilities.details;

    let _ = buf.push(ENCODING_VERSION);
    let _ = buf.extend_from_slice(&variant.hardware.id().to_le_bytes());
    let _ = buf.push(variant.controller as u8);
    let _ = buf.push(variant.role as u8);
    let _ = buf.extend_from_slice(&variant.capabilities.flags.bits().to_le_bytes());

    let _ = buf.push(details.radio.map_or(ABSENT, |family| family as u8));
    let _ = buf.push(details.gps_serial.map_or(ABSENT, |port| port.index()));
    let _ = buf.extend_from_slice(&details.gps_baud.map_or(0, |baud| baud.get()).to_le_bytes());
    let _ = buf.push(details.screen.map_or(ABSENT, |kind| kind as u8));
    let _ = buf.push(details.battery_adc.map_or(ABSENT, |adc| adc.unit.number()));
    let _ = buf.push(details.battery_adc.map_or(ABSENT, |adc| adc.channel));

    let table = variant.pins.as_slice();
    let encoded = &table[..table.len().min(MAX_PIN_ASSIGNMENTS)];
    let _ = buf.push(encoded.len() as u8);
    for assignment in encoded {
        let _ = buf.push(assignment.signal as u8);
        let _ = buf.push(assignment.pin.number());
        let _ = buf.push(assignment.attrs.bits());
    }

    let _ = buf.extend_from_slice(&variant.protocol.node_info_broadcast_secs.to_le_bytes());
    let _ = buf.extend_from_slice(&variant.protocol.position_broadcast_secs.to_le_bytes());
    buf
}

/// CRC-16-XMODEM of the canonical encoding
pub fn fingerprint(variant: &BoardVariant) -> u16 {
    CRC.checksum(&encode(variant))
}
