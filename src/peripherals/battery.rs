//! Battery status as reported by the host

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryInfo {
    /// Charging state
    pub charging: bool,

    /// Battery percentage (0–100)
    pub percent: u8,
}

impl BatteryInfo {
    /// Battery info with the charge capped at 100 %.
    pub fn new(percent: u8, charging: bool) -> Self {
        Self {
            charging,
            percent: percent.min(100),
        }
    }
}

impl Default for BatteryInfo {
    fn default() -> Self {
        Self::new(100, false)
    }
}
