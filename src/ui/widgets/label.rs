//! Single line text label

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::local_area;
use crate::{
    resources::{FontId, Resources},
    ui::{text::TextBuffer, Widget},
};

pub struct LabelWidget {
    bounds: Rectangle,
    font: FontId,
    color: BinaryColor,
    /// `None` leaves whatever is underneath visible
    background: Option<BinaryColor>,
    alignment: Alignment,
    text: TextBuffer,
    dirty: bool,
}

impl LabelWidget {
    pub fn new(
        bounds: Rectangle,
        font: FontId,
        color: BinaryColor,
        background: Option<BinaryColor>,
        alignment: Alignment,
    ) -> Self {
        Self {
            bounds,
            font,
            color,
            background,
            alignment,
            text: TextBuffer::new(),
            dirty: true,
        }
    }

    /// Replace the text. Returns whether it changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text.as_str() == text {
            return false;
        }
        self.text = TextBuffer::from_str(text);
        self.dirty = true;
        true
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}

impl Widget for LabelWidget {
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
        if let Some(background) = self.background {
            target.fill_solid(&area, background)?;
        }

        let width = area.size.width as i32;
        let x = match self.alignment {
            Alignment::Left => 0,
            Alignment::Center => width / 2,
            Alignment::Right => width - 1,
        };
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(
            self.text.as_str(),
            Point::new(x, 0),
            MonoTextStyle::new(self.font.font(), self.color),
            text_style,
        )
        .draw(target)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Framebuffer;

    fn label(alignment: Alignment) -> LabelWidget {
        LabelWidget::new(
            Rectangle::new(Point::new(0, 50), Size::new(69, 14)),
            FontId::Small,
            BinaryColor::On,
            None,
            alignment,
        )
    }

    #[test]
    fn only_new_text_dirties() {
        let mut widget = label(Alignment::Center);
        widget.mark_clean();
        assert!(!widget.set_text(""));
        assert!(!widget.is_dirty());
        assert!(widget.set_text("100%"));
        assert_eq!(widget.text(), "100%");
        assert!(!widget.set_text("100%"));
        assert!(widget.is_dirty());
    }

    #[test]
    fn text_stays_inside_bounds() {
        let mut fb = Framebuffer::new();
        let mut widget = label(Alignment::Right);
        widget.set_text("a label wider than its box");
        widget.draw(&mut fb, &Resources::new()).unwrap();

        let lit = fb.count(&Framebuffer::screen(), BinaryColor::On);
        assert!(lit > 0);
        assert_eq!(fb.count(&widget.bounds(), BinaryColor::On), lit);
    }

    #[test]
    fn alignment_moves_the_text() {
        let left_half = Rectangle::new(Point::new(0, 50), Size::new(34, 14));
        for (alignment, expect_left) in [(Alignment::Left, true), (Alignment::Right, false)] {
            let mut fb = Framebuffer::new();
            let mut widget = label(alignment);
            widget.set_text("1");
            widget.draw(&mut fb, &Resources::new()).unwrap();
            assert_eq!(fb.count(&left_half, BinaryColor::On) > 0, expect_left);
        }
    }
}
