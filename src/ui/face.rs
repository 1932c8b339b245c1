//! Faces built from declarative layouts
//!
//! A [`FaceLayout`] lists widgets together with the piece of watch state that
//! feeds them. [`Face`] instantiates the widgets once and keeps them in sync
//! with every [`WatchFaceState`] it is given.

use chrono::Timelike;
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::Alignment,
};
use heapless::Vec;

use super::{
    text::{format_date, TextBuffer},
    widgets::{BigDigitWidget, BorderWidget, CalendarWidget, LabelWidget, RadialWidget, WeekStart},
    WatchFace, WatchFaceState, Widget,
};
use crate::{
    config::TickUnit,
    error::Error,
    geometry::{Direction, TIME_BUDGET},
    resources::{FontId, Resources},
};

/// Most widgets a single face can hold
pub const MAX_ELEMENTS: usize = 12;

/// Cyclic value that drives rings and borders
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Seconds of the minute
    Second,
    /// Minutes of the hour
    Minute,
    /// Hours on a 12 hour dial, labelled 1 to 12
    Hour,
    /// Battery charge
    Battery,
}

impl Source {
    /// Current value and the value of a full cycle.
    fn reading(self, state: &WatchFaceState) -> (u32, u32) {
        match self {
            Source::Second => (state.time.second(), 60),
            Source::Minute => (state.time.minute(), 60),
            Source::Hour => (state.time.hour() % 12, 12),
            Source::Battery => (u32::from(state.percent.min(100)), 100),
        }
    }

    /// Fraction of the cycle, 0–1.
    pub fn progress(self, state: &WatchFaceState) -> f32 {
        let (value, full) = self.reading(state);
        value as f32 / full as f32
    }

    /// Position in the cycle scaled to [`TIME_BUDGET`] units.
    ///
    /// For [`Source::Minute`] this is exactly the minute of the hour.
    pub fn budget_units(self, state: &WatchFaceState) -> u32 {
        let (value, full) = self.reading(state);
        value * TIME_BUDGET / full
    }

    fn label(self, state: &WatchFaceState, text: &mut TextBuffer) -> Result<(), Error> {
        match self {
            Source::Second => text.format(format_args!("{:02}", state.time.second())),
            Source::Minute => text.format(format_args!("{:02}", state.time.minute())),
            Source::Hour => text.format(format_args!("{:02}", state.time.hour12().1)),
            Source::Battery => text.format(format_args!("{}%", state.percent.min(100))),
        }
    }
}

/// Which digit of `hh:mm` a big digit shows
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitSource {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
}

impl DigitSource {
    pub fn value(self, state: &WatchFaceState) -> i32 {
        let (hour, minute) = (state.time.hour() as i32, state.time.minute() as i32);
        match self {
            DigitSource::HourTens => hour / 10,
            DigitSource::HourOnes => hour % 10,
            DigitSource::MinuteTens => minute / 10,
            DigitSource::MinuteOnes => minute % 10,
        }
    }
}

/// What a label shows
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelContent {
    /// `hh:mm`
    Time,
    /// e.g. `Sat 14 Jun`
    Date,
    /// e.g. `87%`
    Battery,
    Static(&'static str),
}

impl LabelContent {
    fn format(self, state: &WatchFaceState, text: &mut TextBuffer) -> Result<(), Error> {
        match self {
            LabelContent::Time => text.format(format_args!(
                "{:02}:{:02}",
                state.time.hour(),
                state.time.minute()
            )),
            LabelContent::Date => format_date(text, state.time.date()),
            LabelContent::Battery => text.format(format_args!("{}%", state.percent.min(100))),
            LabelContent::Static(static_text) => {
                *text = TextBuffer::from_str(static_text);
                Ok(())
            }
        }
    }
}

/// One widget of a layout and what feeds it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementSpec {
    Radial {
        bounds: Rectangle,
        thickness: u32,
        direction: Direction,
        source: Source,
        font: FontId,
        bg_color: BinaryColor,
        fg_color: BinaryColor,
    },
    Border {
        bounds: Rectangle,
        thickness: u32,
        source: Source,
    },
    BigDigit {
        origin: Point,
        source: DigitSource,
    },
    Label {
        bounds: Rectangle,
        font: FontId,
        color: BinaryColor,
        background: Option<BinaryColor>,
        alignment: Alignment,
        content: LabelContent,
    },
    Calendar {
        bounds: Rectangle,
        font: FontId,
        fg_color: BinaryColor,
        bg_color: BinaryColor,
        week_start: WeekStart,
    },
}

impl ElementSpec {
    /// Cyclic source feeding this element, if any.
    pub const fn source(&self) -> Option<Source> {
        match self {
            ElementSpec::Radial { source, .. } | ElementSpec::Border { source, .. } => {
                Some(*source)
            }
            _ => None,
        }
    }
}

/// Declarative description of a watchface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    pub name: &'static str,
    pub background: BinaryColor,
    /// Drawn in order, later elements on top
    pub elements: &'static [ElementSpec],
}

impl FaceLayout {
    /// Tick rate the layout needs to stay current.
    pub const fn tick_unit(&self) -> TickUnit {
        let mut i = 0;
        while i < self.elements.len() {
            if matches!(self.elements[i].source(), Some(Source::Second)) {
                return TickUnit::Second;
            }
            i += 1;
        }
        TickUnit::Minute
    }

    /// Whether any element draws big digit bitmaps.
    pub fn needs_digits(&self) -> bool {
        self.elements
            .iter()
            .any(|element| matches!(element, ElementSpec::BigDigit { .. }))
    }
}

enum Element {
    Radial(RadialWidget, Source),
    Border(BorderWidget, Source),
    BigDigit(BigDigitWidget, DigitSource),
    Label(LabelWidget, LabelContent),
    Calendar(CalendarWidget),
}

macro_rules! with_widget {
    ($element:expr, $widget:ident => $body:expr) => {
        match $element {
            Element::Radial($widget, _) => $body,
            Element::Border($widget, _) => $body,
            Element::BigDigit($widget, _) => $body,
            Element::Label($widget, _) => $body,
            Element::Calendar($widget) => $body,
        }
    };
}

impl Element {
    fn build(spec: &ElementSpec) -> Result<Self, Error> {
        Ok(match *spec {
            ElementSpec::Radial {
                bounds,
                thickness,
                direction,
                source,
                font,
                bg_color,
                fg_color,
            } => Element::Radial(
                RadialWidget::new(
                    bounds,
                    bg_color,
                    fg_color,
                    thickness,
                    direction,
                    font,
                    font.line_height(),
                )?,
                source,
            ),
            ElementSpec::Border {
                bounds,
                thickness,
                source,
            } => Element::Border(BorderWidget::new(bounds, thickness)?, source),
            ElementSpec::BigDigit { origin, source } => {
                Element::BigDigit(BigDigitWidget::new(origin, 0)?, source)
            }
            ElementSpec::Label {
                bounds,
                font,
                color,
                background,
                alignment,
                content,
            } => {
                let mut label = LabelWidget::new(bounds, font, color, background, alignment);
                if let LabelContent::Static(text) = content {
                    label.set_text(text);
                }
                Element::Label(label, content)
            }
            ElementSpec::Calendar {
                bounds,
                font,
                fg_color,
                bg_color,
                week_start,
            } => Element::Calendar(CalendarWidget::new(bounds, font, fg_color, bg_color, week_start)),
        })
    }

    fn update(&mut self, state: &WatchFaceState) -> Result<(), Error> {
        match self {
            Element::Radial(widget, source) => {
                let mut text = TextBuffer::new();
                source.label(state, &mut text)?;
                widget.set(text.as_str(), source.progress(state));
            }
            Element::Border(widget, source) => {
                widget.set_elapsed(source.budget_units(state));
            }
            Element::BigDigit(widget, source) => {
                widget.set(source.value(state))?;
            }
            Element::Label(widget, content) => {
                let mut text = TextBuffer::new();
                content.format(state, &mut text)?;
                widget.set_text(text.as_str());
            }
            Element::Calendar(widget) => {
                widget.set_date(state.time.date());
            }
        }
        Ok(())
    }

    fn is_dirty(&self) -> bool {
        with_widget!(self, widget => widget.is_dirty())
    }

    fn mark_clean(&mut self) {
        with_widget!(self, widget => widget.mark_clean())
    }

    fn draw<D>(&self, target: &mut D, resources: &Resources) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        with_widget!(self, widget => widget.draw(target, resources))
    }
}

/// A watchface instantiated from a layout
pub struct Face {
    layout: &'static FaceLayout,
    elements: Vec<Element, MAX_ELEMENTS>,
}

impl Face {
    pub fn new(layout: &'static FaceLayout) -> Result<Self, Error> {
        let mut elements = Vec::new();
        for spec in layout.elements {
            elements
                .push(Element::build(spec)?)
                .map_err(|_| Error::TooManyElements)?;
        }
        Ok(Self { layout, elements })
    }

    pub fn layout(&self) -> &'static FaceLayout {
        self.layout
    }

    /// Whether the next draw will touch the target.
    pub fn is_dirty(&self) -> bool {
        self.elements.iter().any(Element::is_dirty)
    }
}

impl WatchFace for Face {
    fn update(&mut self, state: &WatchFaceState) {
        for element in self.elements.iter_mut() {
            if let Err(_error) = element.update(state) {
                #[cfg(feature = "defmt")]
                defmt::warn!("{}: element update failed: {}", self.layout.name, _error);
            }
        }
    }

    fn draw<D>(&mut self, target: &mut D, resources: &Resources) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if !self.is_dirty() {
            return Ok(false);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: redraw", self.layout.name);

        // Widgets may overlap, so everything is repainted in z-order
        let screen = target.bounding_box();
        target.fill_solid(&screen, self.layout.background)?;
        for element in self.elements.iter_mut() {
            element.draw(target, resources)?;
            element.mark_clean();
        }
        Ok(true)
    }
}
