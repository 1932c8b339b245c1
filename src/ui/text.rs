//! Fixed-size text storage and date strings

use core::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use heapless::String;

use crate::error::Error;

const BUF_LEN: usize = 24;

/// Text of a label, formatted in place without allocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String<BUF_LEN>,
}

impl TextBuffer {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Buffer holding `text`, cut after the last character that fits.
    pub fn from_str(text: &str) -> Self {
        let mut buffer = Self::new();
        for c in text.chars() {
            if buffer.text.push(c).is_err() {
                break;
            }
        }
        buffer
    }

    /// Replace the contents with formatted text.
    ///
    /// On overflow the previous text is kept.
    pub fn format(&mut self, args: fmt::Arguments) -> Result<(), Error> {
        let mut scratch = [0u8; BUF_LEN];
        let formatted = format_no_std::show(&mut scratch, args).map_err(|_| Error::TextOverflow)?;
        let mut text = String::new();
        text.push_str(formatted).map_err(|_| Error::TextOverflow)?;
        self.text = text;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

/// Three letter weekday name
pub fn weekday_abbr(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Three letter month name
pub fn month_abbr(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        11 => "Dec",
        _ => "",
    }
}

/// Write a date as e.g. `Sat 14 Jun`.
pub fn format_date(buffer: &mut TextBuffer, date: NaiveDate) -> Result<(), Error> {
    buffer.format(format_args!(
        "{} {:02} {}",
        weekday_abbr(date.weekday()),
        date.day(),
        month_abbr(date.month0())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_place() {
        let mut text = TextBuffer::new();
        assert_eq!(text.as_str(), "");
        text.format(format_args!("{}%", 87)).unwrap();
        assert_eq!(text.as_str(), "87%");
    }

    #[test]
    fn overflow_keeps_old_text() {
        let mut text = TextBuffer::from_str("12:34");
        let long = "this is far too long for a label";
        assert_eq!(
            text.format(format_args!("{long}")),
            Err(Error::TextOverflow)
        );
        assert_eq!(text.as_str(), "12:34");
    }

    #[test]
    fn from_str_truncates_on_char_boundary() {
        let text = TextBuffer::from_str("ääääääääääääääää");
        assert_eq!(text.as_str().chars().count(), 12);

        // 23 ASCII bytes leave no room for a two byte character
        let text = TextBuffer::from_str("abcdefghijklmnopqrstuvwä");
        assert_eq!(text.as_str(), "abcdefghijklmnopqrstuvw");
    }

    #[test]
    fn date_string() {
        let mut text = TextBuffer::new();
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        format_date(&mut text, date).unwrap();
        assert_eq!(text.as_str(), "Sat 14 Jun");

        let date = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        format_date(&mut text, date).unwrap();
        assert_eq!(text.as_str(), "Mon 05 Oct");
    }
}
