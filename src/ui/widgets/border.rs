//! Border that traces the box perimeter once per budget cycle

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use super::local_area;
use crate::{
    error::Error,
    geometry::{clamp_progress, PerimeterSchedule, Trace, TIME_BUDGET},
    resources::Resources,
    ui::Widget,
};

pub struct BorderWidget {
    bounds: Rectangle,
    schedule: PerimeterSchedule,
    /// Budget units elapsed, 0 to [`TIME_BUDGET`]
    elapsed: u32,
    dirty: bool,
}

impl BorderWidget {
    pub fn new(bounds: Rectangle, thickness: u32) -> Result<Self, Error> {
        Ok(Self {
            bounds,
            schedule: PerimeterSchedule::new(bounds.size, thickness)?,
            elapsed: 0,
            dirty: true,
        })
    }

    /// Set elapsed units (minutes of the hour on the stock faces).
    pub fn set_elapsed(&mut self, elapsed: u32) -> bool {
        let elapsed = elapsed.min(TIME_BUDGET);
        if elapsed == self.elapsed {
            return false;
        }
        self.elapsed = elapsed;
        self.dirty = true;
        true
    }

    /// Set elapsed units from a fraction of the whole cycle.
    pub fn set_progress(&mut self, progress: f32) -> bool {
        let units = libm::floorf(clamp_progress(progress) * TIME_BUDGET as f32);
        self.set_elapsed(units as u32)
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn schedule(&self) -> &PerimeterSchedule {
        &self.schedule
    }

    pub fn trace(&self) -> Trace {
        self.schedule.trace(self.elapsed)
    }
}

impl Widget for BorderWidget {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn draw_local<D>(&self, target: &mut D, _resources: &Resources) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("border: elapsed {} units", self.elapsed);

        target.fill_solid(&local_area(&self.bounds), BinaryColor::Off)?;
        for rect in self.trace().rects() {
            target.fill_solid(&rect, BinaryColor::On)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Framebuffer;

    fn screen_border() -> BorderWidget {
        BorderWidget::new(Framebuffer::screen(), 2).unwrap()
    }

    #[test]
    fn starts_empty() {
        let mut fb = Framebuffer::new();
        fb.clear(BinaryColor::On).unwrap();
        let widget = screen_border();
        widget.draw(&mut fb, &Resources::new()).unwrap();
        assert_eq!(fb.count(&Framebuffer::screen(), BinaryColor::On), 0);
    }

    #[test]
    fn same_value_does_not_dirty() {
        let mut widget = screen_border();
        widget.mark_clean();
        assert!(widget.set_elapsed(15));
        widget.mark_clean();
        assert!(!widget.set_elapsed(15));
        assert!(!widget.is_dirty());
        assert!(!widget.set_progress(0.25));
    }

    #[test]
    fn progress_maps_to_units() {
        let mut widget = screen_border();
        widget.set_progress(0.999);
        assert_eq!(widget.elapsed(), 59);
        widget.set_progress(2.0);
        assert_eq!(widget.elapsed(), TIME_BUDGET);
        widget.set_elapsed(1000);
        assert_eq!(widget.elapsed(), TIME_BUDGET);
    }

    #[test]
    fn draws_the_trace_at_its_offset() {
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(40, 30));
        let mut widget = BorderWidget::new(bounds, 2).unwrap();
        widget.set_elapsed(TIME_BUDGET);

        let mut fb = Framebuffer::new();
        widget.draw(&mut fb, &Resources::new()).unwrap();

        // a closed two pixel frame
        assert_eq!(fb.count(&bounds, BinaryColor::On), 40 * 30 - 36 * 26);
        assert_eq!(fb.pixel(Point::new(10, 10)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(49, 39)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(9, 10)), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(Point::new(30, 25)), Some(BinaryColor::Off));
    }

    #[test]
    fn quarter_hour_on_the_right_edge() {
        let mut widget = screen_border();
        widget.set_elapsed(15);
        let mut fb = Framebuffer::new();
        widget.draw(&mut fb, &Resources::new()).unwrap();

        // top right half complete, right edge 8 of 16 units down
        assert_eq!(fb.pixel(Point::new(72, 0)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(71, 0)), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(Point::new(143, 84)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(143, 90)), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(Point::new(0, 167)), Some(BinaryColor::Off));
    }
}
