//! Time keeping helpers

use chrono::{NaiveDateTime, Timelike};

/// Whether two times fall into the same wall clock minute.
pub fn same_minute(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date() && a.hour() == b.hour() && a.minute() == b.minute()
}

/// Whether `now` is the first tick of a new hour.
///
/// With second ticks the hour boundary is seen sixty times, only the first
/// one counts. Without a previous tick nothing counts.
pub fn hour_started(previous: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    match previous {
        Some(previous) => now.minute() == 0 && !same_minute(previous, now),
        None => false,
    }
}
