#![cfg_attr(not(test), no_std)]

pub mod boards;
pub mod config;
pub mod hal;
pub mod variant;

// These modules depend on embassy/async features only available with embedded feature
#[cfg(feature = "embedded")]
pub mod tasks;

pub use variant::registry::{active_variant, select_build_variant, REGISTRY};
pub use variant::{BoardVariant, ConfigError, HardwareModel, RegistryError};
