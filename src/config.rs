//! Firmware-wide constants shared by every board variant
//!
//! Per-board wiring lives in [`crate::boards`]; this module only holds
//! values that are the same whichever board is compiled in.

/// Board variant schema limits
pub mod schema {
    /// Maximum number of pin assignments a single variant may declare
    pub const MAX_PIN_ASSIGNMENTS: usize = 32;

    /// Size of the canonical variant encoding used for fingerprints
    ///
    /// 17 bytes of header and details, 3 bytes per pin, 8 bytes of protocol defaults.
    pub const MAX_ENCODED_VARIANT: usize = 17 + MAX_PIN_ASSIGNMENTS * 3 + 8;

    /// Encoding version (increment when the canonical layout changes)
    pub const ENCODING_VERSION: u8 = 1;
}

/// Stock broadcast intervals of a client-role node
///
/// Router-role variants are expected to use intervals at least this long.
pub mod broadcast {
    /// Node-info broadcast interval in seconds
    pub const NODE_INFO_SECS: u32 = 15 * 60;

    /// Position broadcast interval in seconds
    pub const POSITION_SECS: u32 = 15 * 60;
}

/// Boot-time behaviour of the firmware binary
pub mod boot {
    /// LED flash length when a broadcast timer fires
    pub const LED_FLASH_MS: u64 = 50;

    /// Button poll period
    pub const BUTTON_POLL_MS: u64 = 20;

    /// Consecutive stable samples before a button press is accepted
    pub const BUTTON_DEBOUNCE_SAMPLES: u8 = 3;
}

/// Firmware version
pub mod version {
    pub const MAJOR: u8 = 0;
    pub const MINOR: u8 = 1;
    pub const PATCH: u8 = 0;
}
