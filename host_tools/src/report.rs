//! Human-readable board descriptions.

use std::fmt::Write;

use mesh_board_variants::variant::{Capability, DeviceRole, PinAssignment, ProtocolDefault};
use mesh_board_variants::BoardVariant;

/// One-line registry entry: id, model name, board name, fingerprint
pub fn summary_line(variant: &BoardVariant) -> String {
    format!(
        "{:>3}  {:<14} {:<34} {:04x}",
        variant.hardware.id(),
        variant.hardware.name(),
        variant.name,
        variant.fingerprint()
    )
}

/// Pin table rows ordered by pin number, then signal name
fn sorted_pins(variant: &BoardVariant) -> Vec<&'static PinAssignment> {
    let mut rows: Vec<_> = variant.pins.iter().collect();
    rows.sort_by_key(|row| (row.pin.number(), row.signal.name()));
    rows
}

fn attr_notes(row: &PinAssignment) -> String {
    let mut notes = Vec::new();
    if row.attrs.pull_up {
        notes.push("pull-up");
    }
    if row.attrs.active_low {
        notes.push("active-low");
    }
    notes.join(", ")
}

/// Full multi-line description of a variant
pub fn describe(variant: &BoardVariant) -> String {
    let mut out = String::new();

    let role = match variant.role {
        DeviceRole::Client => "client",
        DeviceRole::Router => "router",
    };
    let _ = writeln!(out, "{} ({})", variant.name, variant.hardware.name());
    let _ = writeln!(out, "  hardware id : {}", variant.hardware.id());
    let _ = writeln!(out, "  controller  : {}", variant.controller.name());
    let _ = writeln!(out, "  role        : {}", role);
    let _ = writeln!(out, "  fingerprint : {:04x}", variant.fingerprint());

    let _ = writeln!(out, "\nCapabilities");
    for capability in Capability::ALL {
        let flag = if variant.has(capability) { 1 } else { 0 };
        let _ = writeln!(out, "  {:<18} {}", capability.name(), flag);
    }
    if let Ok(radio) = variant.capabilities.radio() {
        let _ = writeln!(out, "  radio family       {}", radio.name());
    }
    if let Ok(gps) = variant.capabilities.gps() {
        let _ = writeln!(out, "  GPS_SERIAL_NUM     {}", gps.serial.index());
        let _ = writeln!(out, "  GPS_BAUDRATE       {}", gps.baud.get());
    }
    if let Ok(adc) = variant.capabilities.battery_adc() {
        let _ = writeln!(
            out,
            "  battery ADC        unit {} channel {}",
            adc.unit.number(),
            adc.channel
        );
    }

    let _ = writeln!(out, "\nPins");
    for row in sorted_pins(variant) {
        let notes = attr_notes(row);
        if notes.is_empty() {
            let _ = writeln!(out, "  {:>3}  {}", row.pin.number(), row.signal.name());
        } else {
            let _ = writeln!(
                out,
                "  {:>3}  {:<14} ({})",
                row.pin.number(),
                row.signal.name(),
                notes
            );
        }
    }

    let _ = writeln!(out, "\nProtocol defaults");
    for default in ProtocolDefault::ALL {
        let _ = writeln!(
            out,
            "  {:<32} {}",
            default.name(),
            variant.protocol.get(default)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_board_variants::boards;

    #[test]
    fn test_summary_line() {
        let line = summary_line(&boards::heltec_v3::VARIANT);
        assert!(line.starts_with(" 43  HELTEC_V3"));
        assert!(line.contains("Heltec WiFi LoRa 32 V3"));
    }

    #[test]
    fn test_describe_t22() {
        let text = describe(&boards::ttgo_t22_v1_1::VARIANT);

        assert!(text.contains("role        : router"));
        assert!(text.contains("HAS_GPS            1"));
        assert!(text.contains("HAS_SCREEN         0"));
        assert!(text.contains("GPS_BAUDRATE       9600"));
        assert!(text.contains("   12  GPS_RX"));
        assert!(text.contains("   15  GPS_TX"));
        assert!(text.contains("   38  BUTTON         (pull-up)"));
        assert!(text.contains("DEFAULT_NODE_INFO_BROADCAST_SECS 1800"));
        assert!(text.contains("DEFAULT_POSITION_BROADCAST_SECS  900"));
    }

    #[test]
    fn test_pins_sorted_by_number() {
        let rows = sorted_pins(&boards::heltec_v2_1::VARIANT);
        assert!(rows
            .windows(2)
            .all(|pair| pair[0].pin.number() <= pair[1].pin.number()));
    }
}
