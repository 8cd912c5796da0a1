//! Supported board variants
//!
//! Each board module defines one `const VARIANT` and rejects itself at
//! compile time if it is inconsistent. The build selects the active board
//! through exactly one `board-*` Cargo feature.

use crate::variant::{BoardVariant, HardwareModel};

pub mod heltec_v2_1;
pub mod heltec_v3;
pub mod t_echo;
pub mod ttgo_t22_v1_1;
pub mod xiao_esp32s3_sx1262;

/// Every board known to the firmware
pub const ALL: &[&BoardVariant] = &[
    &ttgo_t22_v1_1::VARIANT,
    &heltec_v2_1::VARIANT,
    &heltec_v3::VARIANT,
    &xiao_esp32s3_sx1262::VARIANT,
    &t_echo::VARIANT,
];

const SELECTED_BOARDS: usize = cfg!(feature = "board-ttgo-t22-v1-1") as usize
    + cfg!(feature = "board-heltec-v2-1") as usize
    + cfg!(feature = "board-heltec-v3") as usize
    + cfg!(feature = "board-xiao-esp32s3-sx1262") as usize
    + cfg!(feature = "board-t-echo") as usize;

const _: () = assert!(SELECTED_BOARDS <= 1, "enable at most one board-* feature");

/// Variant chosen by the build, if any
pub const BUILD_VARIANT: Option<&BoardVariant> = if cfg!(feature = "board-ttgo-t22-v1-1") {
    Some(&ttgo_t22_v1_1::VARIANT)
} else if cfg!(feature = "board-heltec-v2-1") {
    Some(&heltec_v2_1::VARIANT)
} else if cfg!(feature = "board-heltec-v3") {
    Some(&heltec_v3::VARIANT)
} else if cfg!(feature = "board-xiao-esp32s3-sx1262") {
    Some(&xiao_esp32s3_sx1262::VARIANT)
} else if cfg!(feature = "board-t-echo") {
    Some(&t_echo::VARIANT)
} else {
    None
};

/// Hardware model chosen by the build, if any
pub const BUILD_SELECTION: Option<HardwareModel> = match BUILD_VARIANT {
    Some(variant) => Some(variant.hardware),
    None => None,
};
