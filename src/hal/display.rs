//! Display driver view

use crate::variant::{BoardVariant, Capability, ConfigError, DisplayKind, GpioPin, Signal};

/// Bus and control lines of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayWiring {
    OledI2c {
        sda: GpioPin,
        scl: GpioPin,
        reset: Option<GpioPin>,
    },
    EInkSpi {
        cs: GpioPin,
        dc: GpioPin,
        busy: GpioPin,
        sck: GpioPin,
        mosi: GpioPin,
        reset: Option<GpioPin>,
    },
}

impl DisplayWiring {
    pub fn from_variant(variant: &BoardVariant) -> Result<Option<Self>, ConfigError> {
        if !variant.has(Capability::Screen) {
            return Ok(None);
        }

        let pins = &variant.pins;
        let reset = pins.optional(Signal::ScreenReset);
        let wiring = match variant.capabilities.screen()? {
            DisplayKind::OledI2c => Self::OledI2c {
                sda: pins.lookup(Signal::I2cSda)?,
                scl: pins.lookup(Signal::I2cScl)?,
                reset,
            },
            DisplayKind::EInkSpi => Self::EInkSpi {
                cs: pins.lookup(Signal::ScreenCs)?,
                dc: pins.lookup(Signal::ScreenDc)?,
                busy: pins.lookup(Signal::ScreenBusy)?,
                sck: pins.lookup(Signal::ScreenSck)?,
                mosi: pins.lookup(Signal::ScreenMosi)?,
                reset,
            },
        };
        Ok(Some(wiring))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::{heltec_v2_1, t_echo, ttgo_t22_v1_1};

    #[test]
    fn test_headless_board() {
        assert_eq!(DisplayWiring::from_variant(&ttgo_t22_v1_1::VARIANT), Ok(None));
    }

    #[test]
    fn test_oled() {
        assert_eq!(
            DisplayWiring::from_variant(&heltec_v2_1::VARIANT),
            Ok(Some(DisplayWiring::OledI2c {
                sda: GpioPin::new(4),
                scl: GpioPin::new(15),
                reset: Some(GpioPin::new(16)),
            }))
        );
    }

    #[test]
    fn test_eink() {
        let wiring = DisplayWiring::from_variant(&t_echo::VARIANT).unwrap().unwrap();
        match wiring {
            DisplayWiring::EInkSpi { cs, busy, .. } => {
                assert_eq!(cs, GpioPin::new(30));
                assert_eq!(busy, GpioPin::new(3));
            }
            DisplayWiring::OledI2c { .. } => panic!("Expected e-ink"),
        }
    }
}
