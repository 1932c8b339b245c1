//! Hour-long perimeter trace for border widgets
//!
//! The stroke starts at the middle of the top edge and runs clockwise around
//! the box in five segments: the right half of the top edge, the right edge,
//! the bottom edge, the left edge and finally the left half of the top edge.
//! A budget of [`TIME_BUDGET`] units (minutes of an hour on the stock faces)
//! is shared between the segments in proportion to their pixel lengths.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::error::Error;

/// Units needed to trace the whole perimeter once.
pub const TIME_BUDGET: u32 = 60;

/// Path segments in tracing order
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    TopRight,
    Right,
    Bottom,
    Left,
    TopLeft,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::TopRight,
        Segment::Right,
        Segment::Bottom,
        Segment::Left,
        Segment::TopLeft,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-segment pixel lengths and time budgets for one box.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerimeterSchedule {
    width: u32,
    height: u32,
    thickness: u32,
    lengths: [u32; 5],
    budgets: [u32; 5],
    perimeter: u64,
}

impl PerimeterSchedule {
    /// Build the schedule for a box of `size` stroked `thickness` pixels wide.
    ///
    /// The thickness must be at least one and less than half of the smaller
    /// side of the box. Both sides must fit drawing coordinates (`i32`).
    pub fn new(size: Size, thickness: u32) -> Result<Self, Error> {
        let Size { width, height } = size;
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(Error::DegenerateBounds);
        }
        let limit = (width.min(height) - 1) / 2;
        if thickness == 0 || thickness > limit {
            return Err(Error::InvalidThickness { thickness, limit });
        }

        let half = width / 2;
        let lengths = [
            half,
            height - thickness,
            width - thickness,
            height - thickness,
            half - thickness,
        ];
        let perimeter: u64 = lengths.iter().copied().map(u64::from).sum();
        if perimeter == 0 {
            return Err(Error::DegenerateBounds);
        }

        // Each share is at most TIME_BUDGET, so narrowing back is lossless
        let mut budgets =
            lengths.map(|length| (u64::from(TIME_BUDGET) * u64::from(length) / perimeter) as u32);
        let total: u32 = budgets.iter().sum();
        // Rounding leftovers all go to the last segment
        if total < TIME_BUDGET {
            budgets[Segment::TopLeft.index()] += TIME_BUDGET - total;
        }

        Ok(Self {
            width,
            height,
            thickness,
            lengths,
            budgets,
            perimeter,
        })
    }

    /// Pixel length of a segment.
    pub fn length(&self, segment: Segment) -> u32 {
        self.lengths[segment.index()]
    }

    /// Time units allotted to a segment.
    pub fn budget(&self, segment: Segment) -> u32 {
        self.budgets[segment.index()]
    }

    /// Sum of all segment lengths.
    pub fn perimeter(&self) -> u64 {
        self.perimeter
    }

    /// Which rectangles to fill after `elapsed` units.
    ///
    /// Segments before the active one are filled completely, the active one
    /// in proportion to the units spent in it. From [`TIME_BUDGET`] onwards
    /// every segment is full and none is active.
    pub fn trace(&self, elapsed: u32) -> Trace {
        let mut rects = [None; 5];
        let mut remaining = elapsed;

        for segment in Segment::ALL {
            let index = segment.index();
            let budget = self.budgets[index];
            if remaining < budget {
                let filled =
                    u64::from(self.lengths[index]) * u64::from(remaining) / u64::from(budget);
                let filled = filled as u32;
                rects[index] = Some(self.segment_rect(segment, filled));
                return Trace {
                    active: Some(segment),
                    rects,
                };
            }
            rects[index] = Some(self.segment_rect(segment, self.lengths[index]));
            remaining -= budget;
        }

        Trace {
            active: None,
            rects,
        }
    }

    /// Box-relative rectangle covering the first `filled` pixels of a segment.
    pub fn segment_rect(&self, segment: Segment, filled: u32) -> Rectangle {
        let w = self.width as i32;
        let h = self.height as i32;
        let t = self.thickness as i32;
        let px = filled as i32;
        let thickness = self.thickness;

        match segment {
            Segment::TopRight => {
                Rectangle::new(Point::new(w / 2, 0), Size::new(filled, thickness))
            }
            Segment::Right => Rectangle::new(Point::new(w - t, t), Size::new(thickness, filled)),
            Segment::Bottom => Rectangle::new(
                Point::new(w - px - t, h - t),
                Size::new(filled, thickness),
            ),
            Segment::Left => Rectangle::new(Point::new(0, h - t - px), Size::new(thickness, filled)),
            Segment::TopLeft => Rectangle::new(Point::new(t, 0), Size::new(filled, thickness)),
        }
    }
}

/// Result of [`PerimeterSchedule::trace`]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    /// Segment that is partially filled, if any
    pub active: Option<Segment>,
    rects: [Option<Rectangle>; 5],
}

impl Trace {
    /// Rectangle drawn for a segment, `None` if the trace has not reached it.
    pub fn rect(&self, segment: Segment) -> Option<Rectangle> {
        self.rects[segment.index()]
    }

    /// All rectangles to fill, in tracing order.
    pub fn rects(&self) -> impl Iterator<Item = Rectangle> + '_ {
        self.rects.iter().flatten().copied()
    }
}
