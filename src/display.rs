//! 1-bit framebuffer for the watch display

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    Pixel,
};

/// Display width in pixels
pub const LCD_W: u32 = 144;
/// Display height in pixels
pub const LCD_H: u32 = 168;

const BYTES: usize = (LCD_W * LCD_H / 8) as usize;

/// Packed 1-bit frame, row major, least significant bit first.
///
/// Faces draw into this and the host copies [`Framebuffer::as_bytes`] out to
/// the panel.
#[derive(Clone)]
pub struct Framebuffer {
    buf: [u8; BYTES],
}

impl Framebuffer {
    pub const fn new() -> Self {
        Self { buf: [0; BYTES] }
    }

    /// Whole screen
    pub const fn screen() -> Rectangle {
        Rectangle::new(Point::new(0, 0), Size::new(LCD_W, LCD_H))
    }

    /// Raw frame data
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Colour of a pixel, `None` outside the screen.
    pub fn pixel(&self, point: Point) -> Option<BinaryColor> {
        let (i, mask) = Self::locate(point)?;
        Some(if self.buf[i] & mask != 0 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        })
    }

    /// Count pixels of `colour` inside `area`.
    pub fn count(&self, area: &Rectangle, colour: BinaryColor) -> usize {
        area.points()
            .filter(|p| self.pixel(*p) == Some(colour))
            .count()
    }

    fn locate(Point { x, y }: Point) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= LCD_W as i32 || y >= LCD_H as i32 {
            return None;
        }
        let bit_index = y as usize * LCD_W as usize + x as usize;
        Some((bit_index >> 3, 1 << (bit_index & 0x07)))
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(LCD_W, LCD_H)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, colour) in pixels {
            let Some((i, mask)) = Self::locate(point) else {
                continue;
            };
            match colour {
                BinaryColor::Off => self.buf[i] &= !mask,
                BinaryColor::On => self.buf[i] |= mask,
            }
        }

        Ok(())
    }

    fn clear(&mut self, colour: Self::Color) -> Result<(), Self::Error> {
        let fill = match colour {
            BinaryColor::Off => 0,
            BinaryColor::On => u8::MAX,
        };
        self.buf.fill(fill);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn draws_and_reads_back() {
        let mut fb = Framebuffer::new();
        Rectangle::new(Point::new(10, 20), Size::new(3, 2))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(Point::new(10, 20)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(12, 21)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(13, 21)), Some(BinaryColor::Off));
        assert_eq!(fb.count(&Framebuffer::screen(), BinaryColor::On), 6);
    }

    #[test]
    fn ignores_pixels_off_screen() {
        let mut fb = Framebuffer::new();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(144, 0), BinaryColor::On),
            Pixel(Point::new(0, 168), BinaryColor::On),
        ])
        .unwrap();
        assert_eq!(fb.count(&Framebuffer::screen(), BinaryColor::On), 0);
        assert_eq!(fb.pixel(Point::new(0, 168)), None);
    }

    #[test]
    fn clear_fills_everything() {
        let mut fb = Framebuffer::new();
        fb.clear(BinaryColor::On).unwrap();
        assert_eq!(fb.count(&Framebuffer::screen(), BinaryColor::Off), 0);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xff));
    }
}
