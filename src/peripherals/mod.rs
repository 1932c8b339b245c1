//! Contracts with the device the faces run on

pub mod battery;
pub mod vibration;

pub use battery::BatteryInfo;
pub use vibration::{Haptics, CHIME_PULSE_MS};
