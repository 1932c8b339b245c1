//! Crate error type

use core::fmt;

use crate::resources::ResourceId;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A big digit was asked to show something other than 0–9.
    DigitOutOfRange(i32),
    /// Stroke thickness is zero or does not fit into the box.
    InvalidThickness { thickness: u32, limit: u32 },
    /// The box has no area to draw into.
    DegenerateBounds,
    /// The host resource table could not provide a bitmap.
    ResourceUnavailable(ResourceId),
    /// A layout lists more elements than a face can hold.
    TooManyElements,
    /// Formatted text does not fit into its buffer.
    TextOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DigitOutOfRange(n) => write!(f, "digit {n} is outside 0-9"),
            Error::InvalidThickness { thickness, limit } => {
                write!(f, "thickness {thickness} must be between 1 and {limit}")
            }
            Error::DegenerateBounds => f.write_str("bounds have no drawable area"),
            Error::ResourceUnavailable(id) => write!(f, "resource {id:?} is unavailable"),
            Error::TooManyElements => f.write_str("layout has too many elements"),
            Error::TextOverflow => f.write_str("text does not fit its buffer"),
        }
    }
}

impl core::error::Error for Error {}
