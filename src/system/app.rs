//! A watchface wired to host events
//!
//! The host calls [`WatchApp::on_tick`] at the configured [`TickUnit`] and
//! [`WatchApp::on_battery`] whenever the charge state changes, then
//! [`WatchApp::render`] to refresh the screen. Callbacks never run
//! concurrently.

use chrono::NaiveDateTime;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use super::time::hour_started;
use crate::{
    config::{TickUnit, WatchConfig},
    error::Error,
    peripherals::{BatteryInfo, Haptics, CHIME_PULSE_MS},
    resources::{ResourceTable, Resources},
    ui::{Face, WatchFace, WatchFaceState},
};

pub struct WatchApp<T, H>
where
    T: ResourceTable,
    H: Haptics,
{
    config: WatchConfig,
    face: Face,
    resources: Resources,
    table: T,
    haptics: H,
    battery: BatteryInfo,
    /// Time of the last tick, `None` before `init`
    time: Option<NaiveDateTime>,
}

impl<T, H> WatchApp<T, H>
where
    T: ResourceTable,
    H: Haptics,
{
    /// Build the face for `config`. Nothing is loaded yet.
    pub fn new(config: WatchConfig, table: T, haptics: H) -> Result<Self, Error> {
        Ok(Self {
            config,
            face: Face::new(config.layout)?,
            resources: Resources::new(),
            table,
            haptics,
            battery: BatteryInfo::default(),
            time: None,
        })
    }

    /// Load the bitmaps the face needs and show the current state.
    pub fn init(&mut self, now: NaiveDateTime, battery: BatteryInfo) -> Result<(), Error> {
        if self.config.layout.needs_digits() {
            self.resources.load(&mut self.table)?;
        }
        self.battery = battery;
        self.time = Some(now);
        self.refresh();

        #[cfg(feature = "defmt")]
        defmt::info!("{}: initialized", self.config.layout.name);
        Ok(())
    }

    /// Release resources. Also done on drop.
    pub fn deinit(&mut self) {
        self.resources.unload(&mut self.table);
        self.time = None;
    }

    /// Tick rate to subscribe to
    pub fn tick_unit(&self) -> TickUnit {
        self.config.tick_unit
    }

    /// Time tick from the host.
    pub fn on_tick(&mut self, now: NaiveDateTime) {
        let previous = self.time.replace(now);
        self.refresh();

        if self.config.hourly_chime
            && hour_started(previous, now)
            && !self.haptics.quiet_time_active()
        {
            #[cfg(feature = "defmt")]
            defmt::debug!("hourly chime");
            self.haptics.pulse(CHIME_PULSE_MS, 2);
        }
    }

    /// Battery change from the host.
    pub fn on_battery(&mut self, battery: BatteryInfo) {
        if battery == self.battery {
            return;
        }
        self.battery = battery;
        self.refresh();
    }

    /// Draw the face if anything on it changed. Returns whether it drew.
    pub fn render<D>(&mut self, target: &mut D) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.face.draw(target, &self.resources)
    }

    /// Current face state, `None` before `init`.
    pub fn state(&self) -> Option<WatchFaceState> {
        self.time.map(|time| WatchFaceState {
            time,
            percent: self.battery.percent,
            charging: self.battery.charging,
        })
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    fn refresh(&mut self) {
        if let Some(state) = self.state() {
            self.face.update(&state);
        }
    }
}

impl<T, H> Drop for WatchApp<T, H>
where
    T: ResourceTable,
    H: Haptics,
{
    fn drop(&mut self) {
        self.resources.unload(&mut self.table);
    }
}
