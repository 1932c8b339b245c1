//! Month calendar grid

use chrono::{Datelike, NaiveDate};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::local_area;
use crate::{
    resources::{FontId, Resources},
    ui::Widget,
};

/// Header row plus up to six weeks
const GRID_ROWS: u32 = 7;
const WEEKS: usize = 6;

/// First column of the grid
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStart {
    Monday,
    Sunday,
}

impl WeekStart {
    fn header(self) -> [&'static str; 7] {
        match self {
            WeekStart::Monday => ["M", "T", "W", "T", "F", "S", "S"],
            WeekStart::Sunday => ["S", "M", "T", "W", "T", "F", "S"],
        }
    }
}

/// Day numbers laid out by week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub days: [[Option<u8>; 7]; WEEKS],
    /// Number of week rows in use
    pub weeks: usize,
    /// Row and column of the given date
    pub today: (usize, usize),
}

/// Lay out the month containing `date`.
pub fn month_grid(date: NaiveDate, week_start: WeekStart) -> CalendarGrid {
    let first = date.with_day(1).unwrap_or(date);
    let offset = match week_start {
        WeekStart::Monday => first.weekday().num_days_from_monday(),
        WeekStart::Sunday => first.weekday().num_days_from_sunday(),
    } as usize;
    let length = days_in_month(date) as usize;

    let mut days = [[None; 7]; WEEKS];
    for day in 1..=length {
        let cell = offset + day - 1;
        days[cell / 7][cell % 7] = Some(day as u8);
    }
    let today = offset + date.day() as usize - 1;

    CalendarGrid {
        days,
        weeks: (offset + length).div_ceil(7),
        today: (today / 7, today % 7),
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = match date.month() {
        12 => (date.year() + 1, 1),
        month => (date.year(), month + 1),
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

pub struct CalendarWidget {
    bounds: Rectangle,
    font: FontId,
    fg_color: BinaryColor,
    bg_color: BinaryColor,
    week_start: WeekStart,
    date: Option<NaiveDate>,
    dirty: bool,
}

impl CalendarWidget {
    pub fn new(
        bounds: Rectangle,
        font: FontId,
        fg_color: BinaryColor,
        bg_color: BinaryColor,
        week_start: WeekStart,
    ) -> Self {
        Self {
            bounds,
            font,
            fg_color,
            bg_color,
            week_start,
            date: None,
            dirty: true,
        }
    }

    /// Returns whether the shown date changed.
    pub fn set_date(&mut self, date: NaiveDate) -> bool {
        if self.date == Some(date) {
            return false;
        }
        self.date = Some(date);
        self.dirty = true;
        true
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn cell(&self, row: usize, column: usize) -> Rectangle {
        let width = self.bounds.size.width / 7;
        let height = self.bounds.size.height / GRID_ROWS;
        Rectangle::new(
            Point::new((column as u32 * width) as i32, (row as u32 * height) as i32),
            Size::new(width, height),
        )
    }

    fn draw_centered<D>(
        &self,
        target: &mut D,
        text: &str,
        cell: &Rectangle,
        color: BinaryColor,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            text,
            cell.center(),
            MonoTextStyle::new(self.font.font(), color),
            text_style,
        )
        .draw(target)?;
        Ok(())
    }
}

impl Widget for CalendarWidget {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn draw_local<D>(&self, target: &mut D, _resources: &Resources) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.fill_solid(&local_area(&self.bounds), self.bg_color)?;
        let Some(date) = self.date else {
            return Ok(());
        };

        for (column, initial) in self.week_start.header().iter().enumerate() {
            self.draw_centered(target, initial, &self.cell(0, column), self.fg_color)?;
        }

        let grid = month_grid(date, self.week_start);
        for (week, row) in grid.days.iter().enumerate().take(grid.weeks) {
            for (column, day) in row.iter().enumerate() {
                let Some(day) = day else {
                    continue;
                };
                let cell = self.cell(week + 1, column);
                let color = if (week, column) == grid.today {
                    target.fill_solid(&cell, self.fg_color)?;
                    self.bg_color
                } else {
                    self.fg_color
                };

                let mut buf = [0u8; 2];
                if let Ok(text) = format_no_std::show(&mut buf, format_args!("{}", day)) {
                    self.draw_centered(target, text, &cell, color)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Framebuffer;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn october_2026_starts_on_thursday() {
        let grid = month_grid(date(2026, 10, 19), WeekStart::Monday);
        assert_eq!(grid.days[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(grid.weeks, 5);
        assert_eq!(grid.today, (3, 0));
        assert_eq!(grid.days[4][5], Some(31));
        assert_eq!(grid.days[4][6], None);
    }

    #[test]
    fn sunday_start_shifts_columns() {
        let grid = month_grid(date(2026, 10, 19), WeekStart::Sunday);
        assert_eq!(grid.days[0][4], Some(1));
        assert_eq!(grid.today, (3, 1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2025, 2, 10)), 28);
        assert_eq!(days_in_month(date(2025, 12, 31)), 31);
        assert_eq!(days_in_month(date(2025, 4, 1)), 30);
    }

    #[test]
    fn six_week_month() {
        // March 2025 starts on a Saturday and has 31 days
        let grid = month_grid(date(2025, 3, 31), WeekStart::Monday);
        assert_eq!(grid.weeks, 6);
        assert_eq!(grid.days[5][0], Some(31));
        assert_eq!(grid.today, (5, 0));
    }

    #[test]
    fn today_is_highlighted() {
        let bounds = Rectangle::new(Point::new(2, 24), Size::new(140, 105));
        let mut widget = CalendarWidget::new(
            bounds,
            FontId::Small,
            BinaryColor::On,
            BinaryColor::Off,
            WeekStart::Monday,
        );
        widget.mark_clean();
        assert!(widget.set_date(date(2026, 10, 19)));
        assert!(!widget.set_date(date(2026, 10, 19)));

        let mut fb = Framebuffer::new();
        widget.draw(&mut fb, &Resources::new()).unwrap();

        // 19th: week 3, Monday, i.e. grid row 4 column 0 of 20×15 cells
        let today = Rectangle::new(Point::new(2, 24 + 4 * 15), Size::new(20, 15));
        let lit = fb.count(&today, BinaryColor::On);
        assert!(lit > 20 * 15 / 2, "only {lit} lit");

        let yesterday = Rectangle::new(Point::new(2 + 6 * 20, 24 + 3 * 15), Size::new(20, 15));
        let lit = fb.count(&yesterday, BinaryColor::On);
        assert!(lit > 0 && lit < 20 * 15 / 2);
    }
}
