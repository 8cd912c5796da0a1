//! Controller family hardware limits
//!
//! Pin ranges, input-only pins and ADC channel maps differ between
//! controller families, so every range check in validation is parameterised
//! by the variant's [`ControllerFamily`].

use crate::variant::capability::{AdcChannel, AdcUnit};
use crate::variant::pins::GpioPin;

/// Microcontroller family a board is built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerFamily {
    Esp32,
    Esp32S3,
    Nrf52840,
}

/// ESP32 ADC1 inputs, indexed by channel
const ESP32_ADC1: [u8; 8] = [36, 37, 38, 39, 32, 33, 34, 35];

/// ESP32 ADC2 inputs, indexed by channel
const ESP32_ADC2: [u8; 10] = [4, 0, 2, 15, 13, 12, 14, 27, 25, 26];

/// nRF52840 SAADC inputs AIN0..AIN7
const NRF52840_AIN: [u8; 8] = [2, 3, 4, 5, 28, 29, 30, 31];

/// Channel whose input is `pin` in `map`
const fn channel_of(map: &[u8], pin: u8) -> Option<u8> {
    let mut channel = 0;
    while channel < map.len() {
        if map[channel] == pin {
            return Some(channel as u8);
        }
        channel += 1;
    }
    None
}

impl ControllerFamily {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Esp32 => "ESP32",
            Self::Esp32S3 => "ESP32-S3",
            Self::Nrf52840 => "nRF52840",
        }
    }

    /// Highest GPIO number the family can address
    pub const fn max_gpio(self) -> u8 {
        match self {
            Self::Esp32 => 39,
            Self::Esp32S3 => 48,
            Self::Nrf52840 => 47,
        }
    }

    /// Whether `pin` exists on this family
    pub const fn is_valid_gpio(self, pin: GpioPin) -> bool {
        let n = pin.number();
        match self {
            Self::Esp32 => n <= 39 && n != 20 && n != 24 && !(n >= 28 && n <= 31),
            Self::Esp32S3 => n <= 21 || (n >= 26 && n <= 48),
            Self::Nrf52840 => n <= 47,
        }
    }

    /// Whether `pin` lacks an output driver
    pub const fn is_input_only(self, pin: GpioPin) -> bool {
        match self {
            Self::Esp32 => pin.number() >= 34 && pin.number() <= 39,
            Self::Esp32S3 | Self::Nrf52840 => false,
        }
    }

    /// ADC unit and channel sampling `pin`, if it is an analog input
    pub const fn adc_channel(self, pin: GpioPin) -> Option<AdcChannel> {
        let n = pin.number();
        match self {
            Self::Esp32 => {
                if let Some(channel) = channel_of(&ESP32_ADC1, n) {
                    Some(AdcChannel::new(AdcUnit::Adc1, channel))
                } else if let Some(channel) = channel_of(&ESP32_ADC2, n) {
                    Some(AdcChannel::new(AdcUnit::Adc2, channel))
                } else {
                    None
                }
            }
            Self::Esp32S3 => {
                if n >= 1 && n <= 10 {
                    Some(AdcChannel::new(AdcUnit::Adc1, n - 1))
                } else if n >= 11 && n <= 20 {
                    Some(AdcChannel::new(AdcUnit::Adc2, n - 11))
                } else {
                    None
                }
            }
            Self::Nrf52840 => match channel_of(&NRF52840_AIN, n) {
                Some(channel) => Some(AdcChannel::new(AdcUnit::Adc1, channel)),
                None => None,
            },
        }
    }

    /// Number of hardware UARTs
    pub const fn uart_count(self) -> u8 {
        match self {
            Self::Esp32 | Self::Esp32S3 => 3,
            Self::Nrf52840 => 2,
        }
    }

    /// ADC units that cannot be sampled while WiFi is running
    pub const fn adc_blocked_by_wifi(self, unit: AdcUnit) -> bool {
        matches!((self, unit), (Self::Esp32, AdcUnit::Adc2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esp32_adc_map() {
        let family = ControllerFamily::Esp32;
        assert_eq!(
            family.adc_channel(GpioPin::new(35)),
            Some(AdcChannel::new(AdcUnit::Adc1, 7))
        );
        assert_eq!(
            family.adc_channel(GpioPin::new(37)),
            Some(AdcChannel::new(AdcUnit::Adc1, 1))
        );
        assert_eq!(
            family.adc_channel(GpioPin::new(13)),
            Some(AdcChannel::new(AdcUnit::Adc2, 4))
        );
        assert_eq!(family.adc_channel(GpioPin::new(5)), None);
    }

    #[test]
    fn test_esp32s3_adc_map() {
        let family = ControllerFamily::Esp32S3;
        assert_eq!(
            family.adc_channel(GpioPin::new(1)),
            Some(AdcChannel::new(AdcUnit::Adc1, 0))
        );
        assert_eq!(
            family.adc_channel(GpioPin::new(20)),
            Some(AdcChannel::new(AdcUnit::Adc2, 9))
        );
        assert_eq!(family.adc_channel(GpioPin::new(21)), None);
    }

    #[test]
    fn test_nrf52840_adc_map() {
        assert_eq!(
            ControllerFamily::Nrf52840.adc_channel(GpioPin::new(4)),
            Some(AdcChannel::new(AdcUnit::Adc1, 2))
        );
    }

    #[test]
    fn test_gpio_ranges() {
        assert!(ControllerFamily::Esp32.is_valid_gpio(GpioPin::new(39)));
        assert!(!ControllerFamily::Esp32.is_valid_gpio(GpioPin::new(40)));
        assert!(!ControllerFamily::Esp32.is_valid_gpio(GpioPin::new(24)));
        assert!(ControllerFamily::Esp32S3.is_valid_gpio(GpioPin::new(48)));
        assert!(!ControllerFamily::Esp32S3.is_valid_gpio(GpioPin::new(23)));
        assert!(ControllerFamily::Nrf52840.is_valid_gpio(GpioPin::new(47)));
        assert!(!ControllerFamily::Nrf52840.is_valid_gpio(GpioPin::new(48)));
    }

    #[test]
    fn test_input_only() {
        assert!(ControllerFamily::Esp32.is_input_only(GpioPin::new(38)));
        assert!(!ControllerFamily::Esp32.is_input_only(GpioPin::new(33)));
        assert!(!ControllerFamily::Esp32S3.is_input_only(GpioPin::new(38)));
    }

    #[test]
    fn test_wifi_blocks_esp32_adc2_only() {
        assert!(ControllerFamily::Esp32.adc_blocked_by_wifi(AdcUnit::Adc2));
        assert!(!ControllerFamily::Esp32.adc_blocked_by_wifi(AdcUnit::Adc1));
        assert!(!ControllerFamily::Esp32S3.adc_blocked_by_wifi(AdcUnit::Adc2));
    }
}
