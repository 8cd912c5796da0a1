//! LED task for non-blocking LED control
//!
//! Flashes the status LED without blocking other tasks. Polarity comes from
//! the active variant's [`LedWiring`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Level, Output};

use crate::config::boot::LED_FLASH_MS;
use crate::hal::LedWiring;

/// LED flash duration configuration
#[derive(Clone, Copy)]
pub enum LedFlashDuration {
    /// Use the default flash duration
    Default,
    /// Use a custom flash duration in milliseconds
    Ms(u64),
}

/// Type alias for the LED flash channel sender
pub type LedSender = Sender<'static, CriticalSectionRawMutex, LedFlashDuration, 4>;

/// Type alias for the LED flash channel receiver
pub type LedReceiver = Receiver<'static, CriticalSectionRawMutex, LedFlashDuration, 4>;

/// Channel for LED flash signals
pub static LED_CHANNEL: Channel<CriticalSectionRawMutex, LedFlashDuration, 4> = Channel::new();

/// Task that handles LED flashing without blocking other operations
///
/// The LED idles off and is lit for the requested duration.
pub async fn led_task(mut led: Output<'static>, wiring: LedWiring, receiver: LedReceiver) {
    led.set_level(Level::from(wiring.level_high(false)));

    loop {
        let duration_ms = match receiver.receive().await {
            LedFlashDuration::Default => LED_FLASH_MS,
            LedFlashDuration::Ms(ms) => ms,
        };

        led.set_level(Level::from(wiring.level_high(true)));
        Timer::after(Duration::from_millis(duration_ms)).await;
        led.set_level(Level::from(wiring.level_high(false)));
    }
}
