//! Reusable widgets
//!
//! Each widget owns a rectangle of the screen, keeps its own state and knows
//! whether it needs to be redrawn.

mod big_digit;
mod border;
mod calendar;
mod label;
mod radial;

pub use big_digit::BigDigitWidget;
pub use border::BorderWidget;
pub use calendar::{month_grid, CalendarGrid, CalendarWidget, WeekStart};
pub use label::LabelWidget;
pub use radial::RadialWidget;

use embedded_graphics::{geometry::Point, primitives::Rectangle};

/// Rectangle with the widget's size at the origin.
pub(crate) fn local_area(bounds: &Rectangle) -> Rectangle {
    Rectangle::new(Point::zero(), bounds.size)
}
