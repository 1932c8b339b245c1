//! Single big digit drawn from a bitmap

use embedded_graphics::{image::Image, pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use crate::{
    error::Error,
    resources::{Resources, DIGIT_HEIGHT, DIGIT_WIDTH},
    ui::Widget,
};

pub struct BigDigitWidget {
    origin: Point,
    number: u8,
    dirty: bool,
}

impl BigDigitWidget {
    pub fn new(origin: Point, number: i32) -> Result<Self, Error> {
        Ok(Self {
            origin,
            number: Self::check(number)?,
            dirty: true,
        })
    }

    /// Show another digit. Values outside 0–9 are rejected and the current
    /// digit stays. Returns whether the digit changed.
    pub fn set(&mut self, number: i32) -> Result<bool, Error> {
        let number = Self::check(number)?;
        if number == self.number {
            return Ok(false);
        }
        self.number = number;
        self.dirty = true;
        Ok(true)
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    fn check(number: i32) -> Result<u8, Error> {
        match number {
            0..=9 => Ok(number as u8),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("big digit: rejected {}", number);
                Err(Error::DigitOutOfRange(number))
            }
        }
    }
}

impl Widget for BigDigitWidget {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new(DIGIT_WIDTH, DIGIT_HEIGHT))
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn draw_local<D>(&self, target: &mut D, resources: &Resources) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if let Some(bitmap) = resources.digit(self.number) {
            Image::new(bitmap, Point::zero()).draw(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{display::Framebuffer, resources::tests::CountingTable};

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            BigDigitWidget::new(Point::zero(), 10).err(),
            Some(Error::DigitOutOfRange(10))
        );
        assert!(BigDigitWidget::new(Point::zero(), -1).is_err());

        let mut widget = BigDigitWidget::new(Point::zero(), 7).unwrap();
        widget.mark_clean();
        assert_eq!(widget.set(12), Err(Error::DigitOutOfRange(12)));
        assert_eq!(widget.set(-3), Err(Error::DigitOutOfRange(-3)));
        assert_eq!(widget.number(), 7);
        assert!(!widget.is_dirty());
    }

    #[test]
    fn same_digit_is_not_redrawn() {
        let mut widget = BigDigitWidget::new(Point::zero(), 3).unwrap();
        widget.mark_clean();
        assert_eq!(widget.set(3), Ok(false));
        assert!(!widget.is_dirty());
        assert_eq!(widget.set(4), Ok(true));
        assert!(widget.is_dirty());
    }

    #[test]
    fn blits_the_loaded_bitmap() {
        let mut table = CountingTable::default();
        let mut resources = Resources::new();
        let widget = BigDigitWidget::new(Point::new(75, 99), 5).unwrap();

        // nothing to draw before loading
        let mut fb = Framebuffer::new();
        widget.draw(&mut fb, &resources).unwrap();
        assert_eq!(fb.count(&Framebuffer::screen(), BinaryColor::On), 0);

        resources.load(&mut table).unwrap();
        widget.draw(&mut fb, &resources).unwrap();
        assert_eq!(
            fb.count(&Framebuffer::screen(), BinaryColor::On),
            (DIGIT_WIDTH * DIGIT_HEIGHT) as usize
        );
        assert_eq!(fb.pixel(Point::new(75, 99)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(74, 99)), Some(BinaryColor::Off));
    }
}
