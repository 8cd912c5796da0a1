//! Button handler view

use crate::variant::{BoardVariant, Capability, ConfigError, GpioPin, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonWiring {
    pub pin: GpioPin,
    /// Enable the pull-up; the button pulls the line low when pressed
    pub needs_pull_up: bool,
}

impl ButtonWiring {
    pub fn from_variant(variant: &BoardVariant) -> Result<Option<Self>, ConfigError> {
        if !variant.has(Capability::Button) {
            return Ok(None);
        }

        let assignment = variant.pins.assignment(Signal::Button)?;
        Ok(Some(Self {
            pin: assignment.pin,
            needs_pull_up: assignment.attrs.pull_up,
        }))
    }
}
