//! Month-grid layout math.
//!
//! Lays a month out in a Sunday-first 7-column grid: leading blank cells up
//! to the weekday of day 1, then one cell per day, padded with trailing
//! blanks to a whole number of weeks. Blanks are `None`; day cells carry
//! their date.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::month::YearMonth;

/// Weekday header labels for a Sunday-first grid.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of columns in the grid.
pub const COLUMNS: usize = 7;

/// Precomputed cell layout for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    leading_blanks: u32,
    days: u32,
}

impl MonthGrid {
    pub fn new(month: YearMonth) -> MonthGrid {
        MonthGrid {
            month,
            leading_blanks: month.first_weekday_offset(),
            days: month.days_in_month(),
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Count of blank cells before day 1.
    pub fn leading_blanks(&self) -> u32 {
        self.leading_blanks
    }

    /// All cells in row-major order, length a multiple of 7.
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        let mut cells: Vec<Option<NaiveDate>> =
            Vec::with_capacity((self.leading_blanks + self.days) as usize + COLUMNS);
        cells.resize(self.leading_blanks as usize, None);
        for day in 1..=self.days {
            cells.push(self.month.day(day));
        }
        while cells.len() % COLUMNS != 0 {
            cells.push(None);
        }
        cells
    }

    /// The same cells grouped into week rows.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        self.cells()
            .chunks(COLUMNS)
            .map(|week| {
                let mut row = [None; COLUMNS];
                row.copy_from_slice(week);
                row
            })
            .collect()
    }

    /// Saturday or Sunday.
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
