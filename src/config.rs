//! Watch configuration

use crate::ui::{layouts, FaceLayout};

/// How often the host should deliver time ticks
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickUnit {
    Second,
    Minute,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchConfig {
    /// Face to show
    pub layout: &'static FaceLayout,
    /// Tick rate requested from the host
    pub tick_unit: TickUnit,
    /// Double pulse at the top of every hour
    pub hourly_chime: bool,
}

impl WatchConfig {
    /// Configuration for a layout, ticking as often as the layout needs.
    pub const fn new(layout: &'static FaceLayout) -> Self {
        Self {
            layout,
            tick_unit: layout.tick_unit(),
            hourly_chime: true,
        }
    }

    pub const fn with_tick_unit(mut self, tick_unit: TickUnit) -> Self {
        self.tick_unit = tick_unit;
        self
    }

    pub const fn with_hourly_chime(mut self, hourly_chime: bool) -> Self {
        self.hourly_chime = hourly_chime;
        self
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self::new(&layouts::BIG_DIGITS)
    }
}
