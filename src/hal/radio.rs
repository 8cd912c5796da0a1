//! Radio driver view
//!
//! The LoRa driver needs the SPI pin set plus the control lines of its chip
//! family. SX127x chips signal through DIO0; SX126x chips have a BUSY line
//! and raise interrupts on DIO1.

use crate::variant::{BoardVariant, Capability, ConfigError, GpioPin, RadioFamily, Signal};

/// SPI lines of the radio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiPins {
    pub sck: GpioPin,
    pub miso: GpioPin,
    pub mosi: GpioPin,
    pub cs: GpioPin,
}

/// Family-specific control lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioControl {
    Sx127x {
        reset: GpioPin,
        dio0: GpioPin,
        dio1: Option<GpioPin>,
        dio2: Option<GpioPin>,
    },
    Sx126x {
        reset: GpioPin,
        busy: GpioPin,
        dio1: GpioPin,
        /// Antenna switch receive enable
        rx_enable: Option<GpioPin>,
        /// Antenna switch transmit enable
        tx_enable: Option<GpioPin>,
    },
}

/// Everything the radio driver needs to bring up the transceiver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioWiring {
    pub family: RadioFamily,
    pub spi: SpiPins,
    pub control: RadioControl,
}

impl RadioWiring {
    pub fn from_variant(variant: &BoardVariant) -> Result<Option<Self>, ConfigError> {
        if !variant.has(Capability::Radio) {
            return Ok(None);
        }

        let family = variant.capabilities.radio()?;
        let pins = &variant.pins;
        let spi = SpiPins {
            sck: pins.lookup(Signal::LoraSck)?,
            miso: pins.lookup(Signal::LoraMiso)?,
            mosi: pins.lookup(Signal::LoraMosi)?,
            cs: pins.lookup(Signal::LoraCs)?,
        };
        let reset = pins.lookup(Signal::LoraReset)?;

        let control = match family {
            RadioFamily::Sx127x => RadioControl::Sx127x {
                reset,
                dio0: pins.lookup(Signal::LoraDio0)?,
                dio1: pins.optional(Signal::LoraDio1),
                dio2: pins.optional(Signal::LoraDio2),
            },
            RadioFamily::Sx126x => RadioControl::Sx126x {
                reset,
                busy: pins.lookup(Signal::LoraBusy)?,
                dio1: pins.lookup(Signal::LoraDio1)?,
                rx_enable: pins.optional(Signal::LoraRxEn),
                tx_enable: pins.optional(Signal::LoraTxEn),
            },
        };

        Ok(Some(Self {
            family,
            spi,
            control,
        }))
    }

    pub fn reset(&self) -> GpioPin {
        match self.control {
            RadioControl::Sx127x { reset, .. } | RadioControl::Sx126x { reset, .. } => reset,
        }
    }
}
