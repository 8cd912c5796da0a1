//! GPS driver view

use crate::variant::{BaudRate, BoardVariant, Capability, ConfigError, GpioPin, SerialPort, Signal};

/// UART wiring of the GPS receiver
///
/// `rx` and `tx` are from the controller's side: the controller receives
/// NMEA on `rx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsWiring {
    pub rx: GpioPin,
    pub tx: GpioPin,
    pub serial: SerialPort,
    pub baud: BaudRate,
}

impl GpsWiring {
    pub fn from_variant(variant: &BoardVariant) -> Result<Option<Self>, ConfigError> {
        if !variant.has(Capability::Gps) {
            return Ok(None);
        }

        let detail = variant.capabilities.gps()?;
        Ok(Some(Self {
            rx: variant.lookup(Signal::GpsRx)?,
            tx: variant.lookup(Signal::GpsTx)?,
            serial: detail.serial,
            baud: detail.baud,
        }))
    }
}
