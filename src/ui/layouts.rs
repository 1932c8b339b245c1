//! Stock watchface layouts for the 144×168 display

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    text::Alignment,
};

use super::{
    face::{DigitSource, ElementSpec, FaceLayout, LabelContent, Source},
    widgets::WeekStart,
};
use crate::{
    geometry::Direction,
    resources::{FontId, DIGIT_HEIGHT, DIGIT_WIDTH},
};

const fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
}

const fn label(bounds: Rectangle, font: FontId, content: LabelContent) -> ElementSpec {
    ElementSpec::Label {
        bounds,
        font,
        color: BinaryColor::On,
        background: None,
        alignment: Alignment::Center,
        content,
    }
}

const fn ring(
    bounds: Rectangle,
    thickness: u32,
    direction: Direction,
    source: Source,
    font: FontId,
) -> ElementSpec {
    ElementSpec::Radial {
        bounds,
        thickness,
        direction,
        source,
        font,
        bg_color: BinaryColor::Off,
        fg_color: BinaryColor::On,
    }
}

const RIGHT_COLUMN: i32 = 144 - DIGIT_WIDTH as i32;
const BOTTOM_ROW: i32 = 168 - DIGIT_HEIGHT as i32;

/// Four big digits in the corners, date in between, battery over the first
/// hour digit.
pub static BIG_DIGITS: FaceLayout = FaceLayout {
    name: "big digits",
    background: BinaryColor::Off,
    elements: &[
        ElementSpec::BigDigit {
            origin: Point::new(0, 0),
            source: DigitSource::HourTens,
        },
        ElementSpec::BigDigit {
            origin: Point::new(RIGHT_COLUMN, 0),
            source: DigitSource::HourOnes,
        },
        ElementSpec::BigDigit {
            origin: Point::new(0, BOTTOM_ROW),
            source: DigitSource::MinuteTens,
        },
        ElementSpec::BigDigit {
            origin: Point::new(RIGHT_COLUMN, BOTTOM_ROW),
            source: DigitSource::MinuteOnes,
        },
        ElementSpec::Label {
            bounds: rect(0, 50, DIGIT_WIDTH, 14),
            font: FontId::Small,
            color: BinaryColor::Off,
            background: None,
            alignment: Alignment::Center,
            content: LabelContent::Battery,
        },
        label(
            rect(0, DIGIT_HEIGHT as i32, 144, 30),
            FontId::Large,
            LabelContent::Date,
        ),
    ],
};

/// Hour, minute, second and battery rings in a 2×2 grid with the date across
/// the middle.
pub static RADIAL: FaceLayout = FaceLayout {
    name: "radial",
    background: BinaryColor::Off,
    elements: &[
        ring(rect(4, 4, 66, 66), 6, Direction::Clockwise, Source::Hour, FontId::Huge),
        ring(rect(74, 4, 66, 66), 6, Direction::Clockwise, Source::Minute, FontId::Huge),
        ring(
            rect(4, 98, 66, 66),
            6,
            Direction::Clockwise,
            Source::Second,
            FontId::Huge,
        ),
        ring(
            rect(74, 98, 66, 66),
            6,
            Direction::CounterClockwise,
            Source::Battery,
            FontId::Medium,
        ),
        label(rect(0, 74, 144, 20), FontId::Large, LabelContent::Date),
    ],
};

/// One large battery ring draining counter-clockwise, time underneath.
pub static BATTERY_RING: FaceLayout = FaceLayout {
    name: "battery ring",
    background: BinaryColor::Off,
    elements: &[
        ring(
            rect(12, 4, 120, 120),
            8,
            Direction::CounterClockwise,
            Source::Battery,
            FontId::Huge,
        ),
        label(rect(0, 130, 144, 32), FontId::Huge, LabelContent::Time),
    ],
};

/// Screen edge traced once per hour around time, date and battery.
pub static BORDER: FaceLayout = FaceLayout {
    name: "border",
    background: BinaryColor::Off,
    elements: &[
        ElementSpec::Border {
            bounds: rect(0, 0, 144, 168),
            thickness: 2,
            source: Source::Minute,
        },
        label(rect(4, 56, 136, 32), FontId::Huge, LabelContent::Time),
        label(rect(4, 96, 136, 18), FontId::Medium, LabelContent::Date),
        label(rect(4, 128, 136, 14), FontId::Small, LabelContent::Battery),
    ],
};

/// Month calendar below the time with a small battery ring.
pub static CALENDAR: FaceLayout = FaceLayout {
    name: "calendar",
    background: BinaryColor::Off,
    elements: &[
        label(rect(0, 0, 144, 32), FontId::Huge, LabelContent::Time),
        ElementSpec::Calendar {
            bounds: rect(2, 32, 140, 105),
            font: FontId::Small,
            fg_color: BinaryColor::On,
            bg_color: BinaryColor::Off,
            week_start: WeekStart::Monday,
        },
        ring(
            rect(56, 138, 30, 30),
            3,
            Direction::CounterClockwise,
            Source::Battery,
            FontId::Small,
        ),
    ],
};

pub static ALL: [&FaceLayout; 5] = [&BIG_DIGITS, &RADIAL, &BATTERY_RING, &BORDER, &CALENDAR];
