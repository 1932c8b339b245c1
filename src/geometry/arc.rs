//! Start/end angles for radial progress rings

use embedded_graphics::{
    geometry::Angle,
    primitives::{Arc, Circle, Rectangle},
};

/// Sweep direction of a radial ring
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Counter-clockwise rings always end one degree short of a full turn.
pub const COUNTER_CLOCKWISE_END: f32 = 359.0;

/// Angular span of a ring in degrees.
///
/// Angles are measured clockwise from 12 o'clock, so `0.0` is the top of the
/// ring and `90.0` is 3 o'clock.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f32,
    pub end: f32,
}

impl ArcSpan {
    /// Span covered by `progress` (clamped to 0–1) in the given direction.
    pub fn for_progress(progress: f32, direction: Direction) -> Self {
        let progress = clamp_progress(progress);
        match direction {
            Direction::Clockwise => Self {
                start: 0.0,
                end: 360.0 * progress,
            },
            Direction::CounterClockwise => Self {
                start: 360.0 * (1.0 - progress),
                end: COUNTER_CLOCKWISE_END,
            },
        }
    }

    /// Signed sweep from start to end.
    pub fn sweep(&self) -> f32 {
        self.end - self.start
    }

    /// True when there is nothing to fill.
    pub fn is_empty(&self) -> bool {
        self.sweep() <= 0.0
    }

    /// The span as an arc on the largest circle that fits into `bounds`.
    ///
    /// Returns `None` for empty spans and boxes without area.
    pub fn to_arc(&self, bounds: &Rectangle) -> Option<Arc> {
        if self.is_empty() {
            return None;
        }
        let circle = inscribed_circle(bounds)?;
        // embedded-graphics counts from 3 o'clock
        Some(Arc::from_circle(
            circle,
            Angle::from_degrees(self.start - 90.0),
            Angle::from_degrees(self.sweep()),
        ))
    }
}

/// Clamp a progress fraction into 0–1. NaN counts as no progress.
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Largest circle centered in `bounds`.
pub fn inscribed_circle(bounds: &Rectangle) -> Option<Circle> {
    let diameter = bounds.size.width.min(bounds.size.height);
    if diameter == 0 {
        return None;
    }
    Some(Circle::with_center(bounds.center(), diameter))
}
