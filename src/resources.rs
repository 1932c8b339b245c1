//! Bitmap and font resources
//!
//! Bitmaps come from a host resource table and are held by [`Resources`]
//! between `load` and `unload`. Fonts are compiled in.

use embedded_graphics::{image::ImageRaw, mono_font::MonoFont, pixelcolor::BinaryColor};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_24_POINT, PROFONT_9_POINT};

use crate::error::Error;

/// Number of big digit images (0–9)
pub const DIGIT_COUNT: usize = 10;
/// Width of a big digit image
pub const DIGIT_WIDTH: u32 = 69;
/// Height of a big digit image
pub const DIGIT_HEIGHT: u32 = 69;

/// 1-bit image as handed out by the host
pub type Bitmap = ImageRaw<'static, BinaryColor>;

/// Identifier of a host resource
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceId {
    /// Big digit image for 0–9
    Digit(u8),
}

/// Host resource table
pub trait ResourceTable {
    /// Fetch a bitmap, `None` if the host cannot provide it.
    fn load_bitmap(&mut self, id: ResourceId) -> Option<Bitmap>;

    /// Give a bitmap obtained from [`ResourceTable::load_bitmap`] back.
    fn release_bitmap(&mut self, id: ResourceId);
}

/// Bitmaps shared by the widgets of a face
#[derive(Debug, Default)]
pub struct Resources {
    digits: [Option<Bitmap>; DIGIT_COUNT],
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every digit image is present.
    pub fn is_loaded(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// Load all digit images from `table`.
    ///
    /// Slots that are already filled are kept. If any image is missing, the
    /// ones loaded so far are released again.
    pub fn load<T: ResourceTable>(&mut self, table: &mut T) -> Result<(), Error> {
        for (number, slot) in (0u8..).zip(self.digits.iter_mut()) {
            if slot.is_some() {
                continue;
            }
            let id = ResourceId::Digit(number);
            match table.load_bitmap(id) {
                Some(bitmap) => *slot = Some(bitmap),
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("resources: {} unavailable", id);
                    self.unload(table);
                    return Err(Error::ResourceUnavailable(id));
                }
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("resources: digit images loaded");
        Ok(())
    }

    /// Release every loaded image exactly once.
    pub fn unload<T: ResourceTable>(&mut self, table: &mut T) {
        for (number, slot) in (0u8..).zip(self.digits.iter_mut()) {
            if slot.take().is_some() {
                table.release_bitmap(ResourceId::Digit(number));
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("resources: digit images released");
    }

    /// Image for a digit, if loaded.
    pub fn digit(&self, number: u8) -> Option<&Bitmap> {
        self.digits.get(number as usize)?.as_ref()
    }
}

/// Compiled-in fonts
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontId {
    Small,
    Medium,
    Large,
    Huge,
}

impl FontId {
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            FontId::Small => &PROFONT_9_POINT,
            FontId::Medium => &PROFONT_12_POINT,
            FontId::Large => &PROFONT_14_POINT,
            FontId::Huge => &PROFONT_24_POINT,
        }
    }

    /// Height of one line of text.
    pub fn line_height(self) -> u32 {
        self.font().character_size.height
    }
}
