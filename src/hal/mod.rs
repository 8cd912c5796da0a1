//! Consumer views of the active variant
//!
//! Each HAL consumer reads only the slice of the board description its
//! subsystem needs. Views are built with `from_variant`, which returns
//! `Ok(None)` when the owning capability is absent and never touches the
//! pins of an absent capability.

pub mod button;
pub mod display;
pub mod gps;
pub mod led;
pub mod power;
pub mod radio;
pub mod scheduler;

pub use button::ButtonWiring;
pub use display::DisplayWiring;
pub use gps::GpsWiring;
pub use led::LedWiring;
pub use power::{BatteryMonitor, PeripheralPower};
pub use radio::{RadioControl, RadioWiring, SpiPins};
pub use scheduler::SchedulerSeed;
