//! Progress watchfaces for a 144×168 1-bit display
//!
//! The host owns the event loop, the panel and the resource table. This
//! crate turns time and battery events into frames: radial rings, an
//! hour-long border trace, big digits, labels and a month calendar, composed
//! by declarative layouts.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod peripherals;
pub mod resources;
pub mod system;
pub mod ui;

pub use config::{TickUnit, WatchConfig};
pub use display::Framebuffer;
pub use error::Error;
pub use peripherals::{BatteryInfo, Haptics, CHIME_PULSE_MS};
pub use resources::{Bitmap, ResourceId, ResourceTable, Resources};
pub use system::WatchApp;
pub use ui::{Face, FaceLayout, WatchFace, WatchFaceState};
