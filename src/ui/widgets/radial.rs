//! Radial progress ring with a centered label

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::local_area;
use crate::{
    error::Error,
    geometry::{clamp_progress, ArcSpan, Direction},
    resources::{FontId, Resources},
    ui::{text::TextBuffer, Widget},
};

pub struct RadialWidget {
    bounds: Rectangle,
    // Colour theme
    bg_color: BinaryColor,
    fg_color: BinaryColor,
    // Ring
    line_thickness: u32,
    direction: Direction,
    progress: f32,
    // Label
    text: TextBuffer,
    font: FontId,
    line_height: u32,
    dirty: bool,
}

impl RadialWidget {
    /// Create a ring inscribed in `bounds`.
    ///
    /// The label is centered horizontally, its top edge sits at
    /// `(height - line_height) / 2`.
    pub fn new(
        bounds: Rectangle,
        bg_color: BinaryColor,
        fg_color: BinaryColor,
        line_thickness: u32,
        direction: Direction,
        font: FontId,
        line_height: u32,
    ) -> Result<Self, Error> {
        let diameter = bounds.size.width.min(bounds.size.height);
        if diameter == 0 {
            return Err(Error::DegenerateBounds);
        }
        // stroke must stay below half the diameter
        let limit = (diameter - 1) / 2;
        if line_thickness == 0 || line_thickness > limit {
            return Err(Error::InvalidThickness {
                thickness: line_thickness,
                limit,
            });
        }

        Ok(Self {
            bounds,
            bg_color,
            fg_color,
            line_thickness,
            direction,
            progress: 0.0,
            text: TextBuffer::new(),
            font,
            line_height,
            dirty: true,
        })
    }

    /// Set label and progress. Returns whether anything changed.
    pub fn set(&mut self, text: &str, progress: f32) -> bool {
        let progress = clamp_progress(progress);
        if self.text.as_str() == text && self.progress == progress {
            return false;
        }
        self.text = TextBuffer::from_str(text);
        self.progress = progress;
        self.dirty = true;
        true
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Angles the ring currently covers.
    pub fn span(&self) -> ArcSpan {
        ArcSpan::for_progress(self.progress, self.direction)
    }
}

impl Widget for RadialWidget {
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
        let area = local_area(&self.bounds);
        target.fill_solid(&area, self.bg_color)?;

        if let Some(arc) = self.span().to_arc(&area) {
            let style = PrimitiveStyleBuilder::new()
                .stroke_color(self.fg_color)
                .stroke_width(self.line_thickness)
                .stroke_alignment(StrokeAlignment::Inside)
                .build();
            arc.into_styled(style).draw(target)?;
        }

        if !self.text.as_str().is_empty() {
            let text_top = (area.size.height as i32 - self.line_height as i32) / 2;
            let text_style = TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Top)
                .build();
            Text::with_text_style(
                self.text.as_str(),
                Point::new(area.size.width as i32 / 2, text_top),
                MonoTextStyle::new(self.font.font(), self.fg_color),
                text_style,
            )
            .draw(target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Framebuffer;

    fn ring(direction: Direction) -> RadialWidget {
        RadialWidget::new(
            Rectangle::new(Point::new(20, 30), Size::new(40, 40)),
            BinaryColor::Off,
            BinaryColor::On,
            4,
            direction,
            FontId::Small,
            FontId::Small.line_height(),
        )
        .unwrap()
    }

    #[test]
    fn setter_dirties_only_on_change() {
        let mut widget = ring(Direction::Clockwise);
        widget.mark_clean();

        assert!(widget.set("42", 0.7));
        assert!(widget.is_dirty());
        widget.mark_clean();

        assert!(!widget.set("42", 0.7));
        assert!(!widget.is_dirty());
        assert!(widget.set("43", 0.7));
    }

    #[test]
    fn progress_is_clamped() {
        let mut widget = ring(Direction::CounterClockwise);
        widget.set("", 3.0);
        assert_eq!(widget.progress(), 1.0);
        assert_eq!(widget.span().start, 0.0);
        widget.set("", -1.0);
        assert_eq!(widget.progress(), 0.0);
    }

    #[test]
    fn rejects_impossible_rings() {
        let bounds = Rectangle::new(Point::zero(), Size::new(10, 10));
        let make = |bounds, thickness| {
            RadialWidget::new(
                bounds,
                BinaryColor::Off,
                BinaryColor::On,
                thickness,
                Direction::Clockwise,
                FontId::Small,
                10,
            )
        };
        assert_eq!(
            make(bounds, 5).err(),
            Some(Error::InvalidThickness {
                thickness: 5,
                limit: 4
            })
        );
        assert!(make(bounds, 4).is_ok());
        assert!(make(bounds, 0).is_err());
        assert_eq!(
            make(Rectangle::new(Point::zero(), Size::zero()), 1).err(),
            Some(Error::DegenerateBounds)
        );
    }

    #[test]
    fn empty_ring_only_paints_background() {
        let mut fb = Framebuffer::new();
        fb.clear(BinaryColor::On).unwrap();
        let widget = ring(Direction::Clockwise);
        widget.draw(&mut fb, &Resources::new()).unwrap();

        assert_eq!(fb.count(&widget.bounds(), BinaryColor::On), 0);
        // nothing outside the widget is touched
        assert_eq!(fb.pixel(Point::new(19, 30)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(60, 70)), Some(BinaryColor::On));
    }

    #[test]
    fn full_ring_covers_all_sides() {
        let mut fb = Framebuffer::new();
        let mut widget = ring(Direction::Clockwise);
        widget.set("", 1.0);
        widget.draw(&mut fb, &Resources::new()).unwrap();

        let center = widget.bounds().center();
        for point in [
            Point::new(center.x, 31),
            Point::new(center.x, 68),
            Point::new(21, center.y),
            Point::new(58, center.y),
        ] {
            assert_eq!(fb.pixel(point), Some(BinaryColor::On), "{point:?}");
        }
        assert_eq!(fb.pixel(center), Some(BinaryColor::Off));
    }

    #[test]
    fn three_quarters_reach_the_bottom() {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            let mut fb = Framebuffer::new();
            let mut widget = ring(direction);
            widget.set("", 0.75);
            widget.draw(&mut fb, &Resources::new()).unwrap();

            let center = widget.bounds().center();
            assert_eq!(fb.pixel(Point::new(center.x, 68)), Some(BinaryColor::On));
        }
    }

    #[test]
    fn label_is_drawn_in_the_middle() {
        let mut fb = Framebuffer::new();
        let mut widget = ring(Direction::Clockwise);
        widget.set("8", 0.0);
        widget.draw(&mut fb, &Resources::new()).unwrap();

        let middle = Rectangle::with_center(widget.bounds().center(), Size::new(20, 20));
        assert!(fb.count(&middle, BinaryColor::On) > 0);
    }
}
