//! Embassy tasks module
//!
//! Contains the async tasks that consume the active board variant.

pub mod button;
pub mod led;
pub mod scheduler;

pub use button::button_task;
pub use led::{led_task, LedFlashDuration, LedReceiver, LedSender, LED_CHANNEL};
pub use scheduler::{scheduler_task, BroadcastDue, BROADCAST_CHANNEL};
