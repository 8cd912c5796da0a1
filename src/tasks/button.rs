//! Button task
//!
//! Polls the user button and acknowledges presses on the LED.

use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;
use log::info;

use crate::config::boot::{BUTTON_DEBOUNCE_SAMPLES, BUTTON_POLL_MS};
use crate::tasks::led::{LedFlashDuration, LedSender};

/// Acknowledgement flash for a button press
const PRESS_FLASH_MS: u64 = 200;

/// Task that debounces the button and reports presses
///
/// The button pulls its line low when pressed.
pub async fn button_task(button: Input<'static>, led_sender: Option<LedSender>) {
    let mut stable_low: u8 = 0;
    let mut pressed = false;

    loop {
        Timer::after(Duration::from_millis(BUTTON_POLL_MS)).await;

        if button.is_low() {
            stable_low = stable_low.saturating_add(1);
        } else {
            stable_low = 0;
            pressed = false;
        }

        if !pressed && stable_low >= BUTTON_DEBOUNCE_SAMPLES {
            pressed = true;
            info!("button pressed");
            if let Some(sender) = &led_sender {
                let _ = sender.try_send(LedFlashDuration::Ms(PRESS_FLASH_MS));
            }
        }
    }
}
