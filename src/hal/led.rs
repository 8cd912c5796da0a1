//! Status LED view

use crate::variant::{BoardVariant, Capability, ConfigError, GpioPin, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedWiring {
    pub pin: GpioPin,
    pub active_low: bool,
}

impl LedWiring {
    pub fn from_variant(variant: &BoardVariant) -> Result<Option<Self>, ConfigError> {
        if !variant.has(Capability::Led) {
            return Ok(None);
        }

        let assignment = variant.pins.assignment(Signal::Led)?;
        Ok(Some(Self {
            pin: assignment.pin,
            active_low: assignment.attrs.active_low,
        }))
    }

    /// Pin level for the given LED state
    pub fn level_high(&self, lit: bool) -> bool {
        lit != self.active_low
    }
}
