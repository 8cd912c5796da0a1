//! Power monitor and peripheral rail views

use crate::variant::{AdcChannel, BoardVariant, Capability, ConfigError, GpioPin, Signal};

/// Battery voltage sense input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryMonitor {
    pub pin: GpioPin,
    pub adc: AdcChannel,
}

impl BatteryMonitor {
    pub fn from_variant(variant: &BoardVariant) -> Result<Option<Self>, ConfigError> {
        if !variant.has(Capability::BatterySense) {
            return Ok(None);
        }

        Ok(Some(Self {
            pin: variant.lookup(Signal::Battery)?,
            adc: variant.capabilities.battery_adc()?,
        }))
    }
}

/// Switched rail powering external peripherals (Vext)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeripheralPower {
    pub pin: GpioPin,
    /// Rail is on when the pin is driven low
    pub active_low: bool,
}

impl PeripheralPower {
    pub fn from_variant(variant: &BoardVariant) -> Result<Option<Self>, ConfigError> {
        if !variant.has(Capability::PeripheralPower) {
            return Ok(None);
        }

        let assignment = variant.pins.assignment(Signal::Vext)?;
        Ok(Some(Self {
            pin: assignment.pin,
            active_low: assignment.attrs.active_low,
        }))
    }

    /// Pin level that switches the rail on
    pub fn on_level_high(&self) -> bool {
        !self.active_low
    }
}
