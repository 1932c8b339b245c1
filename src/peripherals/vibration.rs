//! Vibration motor as provided by the host

/// Length of each hourly chime pulse in milliseconds
pub const CHIME_PULSE_MS: u32 = 200;

/// Haptic feedback provided by the host
pub trait Haptics {
    /// Pulse the motor `times` times, `duration_ms` each.
    fn pulse(&mut self, duration_ms: u32, times: u8);

    /// Whether the user asked for silence right now.
    fn quiet_time_active(&self) -> bool {
        false
    }
}
