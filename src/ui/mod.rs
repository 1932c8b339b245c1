//! UI definitions module

use chrono::NaiveDateTime;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use crate::resources::Resources;

pub mod face;
pub mod layouts;
pub mod text;
pub mod widgets;

pub use face::{Face, FaceLayout};

pub trait WatchFace {
    /// Push new state into the face. Only changed values cause a redraw.
    fn update(&mut self, state: &WatchFaceState);

    /// Redraw the face if anything changed since the last draw.
    ///
    /// Returns whether the target was touched.
    fn draw<D>(&mut self, target: &mut D, resources: &Resources) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>;
}

/// State for the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
    pub percent: u8,
    pub charging: bool,
}

/// A drawable element of a face.
///
/// Widgets draw in coordinates relative to their own bounds.
pub trait Widget {
    /// Area of the screen the widget owns
    fn bounds(&self) -> Rectangle;

    fn is_dirty(&self) -> bool;

    fn mark_clean(&mut self);

    /// Draw into a target whose origin is the top left corner of `bounds()`.
    fn draw_local<D>(&self, target: &mut D, resources: &Resources) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>;

    /// Draw at the widget's place on screen, clipped to its bounds.
    fn draw<D>(&self, target: &mut D, resources: &Resources) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.draw_local(&mut target.cropped(&self.bounds()), resources)
    }
}
