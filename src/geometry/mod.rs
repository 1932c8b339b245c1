//! Pure progress geometry
//!
//! Nothing in here touches a draw target. The widgets feed these results to
//! `embedded-graphics` primitives.

pub mod arc;
pub mod perimeter;

pub use arc::{clamp_progress, ArcSpan, Direction};
pub use perimeter::{PerimeterSchedule, Segment, Trace, TIME_BUDGET};
