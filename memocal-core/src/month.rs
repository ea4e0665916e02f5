//! Year-month value type and calendar math.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{MemocalError, MemocalResult};

/// A calendar month identified by year and month number, no day component.
///
/// Ordering is lexicographic on (year, month). Month length, weekday and
/// month arithmetic are computed directly from proleptic Gregorian rules,
/// so they stay total over the full i32 year range; only the day-level
/// accessors go through chrono, whose dates cover a narrower span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Unvalidated mirror for serde: deserialization routes through
/// [`YearMonth::new`] so the month-range check cannot be bypassed.
#[derive(Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = MemocalError;

    fn try_from(raw: RawYearMonth) -> Result<YearMonth, MemocalError> {
        YearMonth::new(raw.year, raw.month)
    }
}

impl YearMonth {
    /// Create a year-month, rejecting month values outside 1-12.
    pub fn new(year: i32, month: u32) -> MemocalResult<YearMonth> {
        if !(1..=12).contains(&month) {
            return Err(MemocalError::InvalidMonth(month));
        }
        Ok(YearMonth { year, month })
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month, when the year falls within chrono's
    /// representable range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.day(1)
    }

    /// Number of days in the month (28-31), including leap February.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
            _ => 31,
        }
    }

    /// Weekday index of day 1, 0 = Sunday .. 6 = Saturday.
    ///
    /// This is the count of leading blank cells when the month is laid out
    /// in a Sunday-first 7-column grid.
    pub fn first_weekday_offset(&self) -> u32 {
        weekday(self.year, self.month, 1)
    }

    /// Add a signed number of months, carrying year overflow/underflow.
    pub fn add_months(&self, delta: i32) -> YearMonth {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + delta as i64;
        YearMonth {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Whether the given date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The date at the given day of this month, if valid.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day of week for a proleptic Gregorian date, 0 = Sunday (Zeller's
/// formula). Euclidean division keeps it correct for negative years.
fn weekday(year: i32, month: u32, day: u32) -> u32 {
    let y: i64 = if month < 3 { year as i64 - 1 } else { year as i64 };
    let m: i64 = if month < 3 { month as i64 + 12 } else { month as i64 };

    let dow = day as i64 + (13 * (m + 1)) / 5 + y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400);
    // Zeller counts from Saturday; shift to 0 = Sunday
    ((dow + 6).rem_euclid(7)) as u32
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MemocalError;

    /// Parse "YYYY-MM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MemocalError::ParseYearMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(&err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        YearMonth::new(year, month).map_err(|_| err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    // --- constructor ---

    #[test]
    fn new_rejects_out_of_range_months() {
        assert!(YearMonth::new(2024, 0).is_err());
        assert!(YearMonth::new(2024, 13).is_err());
        assert!(YearMonth::new(2024, 12).is_ok());
    }

    // --- days_in_month ---

    #[test]
    fn month_lengths() {
        assert_eq!(ym(2023, 1).days_in_month(), 31);
        assert_eq!(ym(2023, 4).days_in_month(), 30);
        assert_eq!(ym(2023, 2).days_in_month(), 28);
        assert_eq!(ym(2023, 12).days_in_month(), 31);
    }

    #[test]
    fn leap_february() {
        // Divisible by 4
        assert_eq!(ym(2024, 2).days_in_month(), 29);
        // Century not divisible by 400
        assert_eq!(ym(1900, 2).days_in_month(), 28);
        assert_eq!(ym(2100, 2).days_in_month(), 28);
        // Century divisible by 400
        assert_eq!(ym(2000, 2).days_in_month(), 29);
    }

    // --- first_weekday_offset ---

    #[test]
    fn first_weekday_offsets() {
        // 2024-01-01 was a Monday
        assert_eq!(ym(2024, 1).first_weekday_offset(), 1);
        // 2024-03-01 was a Friday
        assert_eq!(ym(2024, 3).first_weekday_offset(), 5);
        // 2021-08-01 was a Sunday
        assert_eq!(ym(2021, 8).first_weekday_offset(), 0);
        // 2024-06-01 was a Saturday
        assert_eq!(ym(2024, 6).first_weekday_offset(), 6);
    }

    #[test]
    fn first_weekday_offset_is_stable() {
        let m = ym(2024, 9);
        assert_eq!(m.first_weekday_offset(), m.first_weekday_offset());
    }

    #[test]
    fn first_weekday_offset_matches_chrono() {
        for year in [1600, 1899, 1970, 2024, 2100] {
            for month in 1..=12 {
                let m = ym(year, month);
                assert_eq!(
                    m.first_weekday_offset(),
                    m.first_day().unwrap().weekday().num_days_from_sunday(),
                    "{}",
                    m
                );
            }
        }
    }

    #[test]
    fn extreme_years_do_not_panic() {
        // Years beyond chrono's date range still have month math
        let far = ym(999_999, 1);
        assert_eq!(far.days_in_month(), 31);
        assert!(far.first_weekday_offset() < 7);
        assert_eq!(far.first_day(), None);

        let bce = ym(-999_999, 2);
        assert_eq!(bce.days_in_month(), 28);
        assert!(bce.first_weekday_offset() < 7);
    }

    // --- add_months ---

    #[test]
    fn add_months_within_year() {
        assert_eq!(ym(2024, 3).add_months(2), ym(2024, 5));
        assert_eq!(ym(2024, 3).add_months(-2), ym(2024, 1));
    }

    #[test]
    fn add_months_carries_year() {
        assert_eq!(ym(2024, 12).add_months(1), ym(2025, 1));
        assert_eq!(ym(2024, 1).add_months(-1), ym(2023, 12));
        assert_eq!(ym(2024, 6).add_months(30), ym(2026, 12));
        assert_eq!(ym(2024, 6).add_months(-18), ym(2022, 12));
    }

    #[test]
    fn add_months_round_trips() {
        let m = ym(2024, 7);
        for k in [-100, -13, -1, 0, 1, 5, 12, 999] {
            assert_eq!(m.add_months(k).add_months(-k), m, "delta {}", k);
        }
    }

    // --- ordering ---

    #[test]
    fn ordering_is_lexicographic() {
        assert!(ym(2023, 12) < ym(2024, 1));
        assert!(ym(2024, 2) < ym(2024, 3));
        assert_eq!(ym(2024, 3).cmp(&ym(2024, 3)), std::cmp::Ordering::Equal);
    }

    // --- display / parse ---

    #[test]
    fn display_and_parse_round_trip() {
        let m = ym(2024, 3);
        assert_eq!(m.to_string(), "2024-03");
        assert_eq!("2024-03".parse::<YearMonth>().unwrap(), m);
    }

    #[test]
    fn deserialize_goes_through_the_month_check() {
        let m: YearMonth = serde_json::from_str(r#"{"year":2024,"month":12}"#).unwrap();
        assert_eq!(m, ym(2024, 12));
        assert!(serde_json::from_str::<YearMonth>(r#"{"year":2024,"month":13}"#).is_err());
        assert!(serde_json::from_str::<YearMonth>(r#"{"year":2024,"month":0}"#).is_err());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!("2024".parse::<YearMonth>().is_err());
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("march 2024".parse::<YearMonth>().is_err());
        assert!("2024-".parse::<YearMonth>().is_err());
    }

    // --- contains / day ---

    #[test]
    fn contains_checks_year_and_month() {
        let m = ym(2024, 3);
        assert!(m.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn day_rejects_invalid_days() {
        assert!(ym(2023, 2).day(29).is_none());
        assert!(ym(2024, 2).day(29).is_some());
        assert!(ym(2024, 4).day(31).is_none());
    }
}
