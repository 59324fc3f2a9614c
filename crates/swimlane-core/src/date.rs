// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Calendar Days
//!
//! Timeline entries are dated to the day. A calendar date maps to a
//! [`TimePoint<i64>`] holding its day number since the common era, so all
//! span arithmetic and lane assignment works on plain integers and only the
//! label formatting needs to go back to a [`NaiveDate`].

use crate::time::{TimeInterval, TimePoint};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt::Display;

/// A day-numbered instant on the time axis.
pub type Day = TimePoint<i64>;

/// The wire format of dates in timeline data.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateParseError {
    input: String,
}

impl DateParseError {
    #[inline]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid date '{}', expected YYYY-MM-DD", self.input)
    }
}

impl std::error::Error for DateParseError {}

/// Returns the day number of `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use swimlane_core::date::{date_of, day_of};
///
/// let date = NaiveDate::from_ymd_opt(2014, 3, 1).unwrap();
/// assert_eq!(date_of(day_of(date)), Some(date));
/// ```
#[inline]
pub fn day_of(date: NaiveDate) -> Day {
    TimePoint::new(i64::from(date.num_days_from_ce()))
}

/// Returns the calendar date of a day number, if it is representable.
#[inline]
pub fn date_of(day: Day) -> Option<NaiveDate> {
    let days = i32::try_from(day.value()).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

/// Parses a `YYYY-MM-DD` date into its day number.
///
/// Surrounding whitespace is ignored.
///
/// ```
/// use swimlane_core::date::parse_date;
///
/// assert!(parse_date("2010-09-01").is_ok());
/// assert!(parse_date("2010-13-01").is_err());
/// assert!(parse_date("2010").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<Day, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map(day_of)
        .map_err(|_| DateParseError::new(input))
}

/// The first day of `year`.
#[inline]
pub fn year_start(year: i32) -> Option<Day> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(day_of)
}

/// The year a day number falls into.
#[inline]
pub fn year_of(day: Day) -> Option<i32> {
    date_of(day).map(|d| d.year())
}

/// The "present" boundary when the current year is `current_year`:
/// January 1 of the following year.
///
/// ```
/// use swimlane_core::date::{present_boundary, parse_date};
///
/// assert_eq!(present_boundary(2025), parse_date("2026-01-01").ok());
/// ```
#[inline]
pub fn present_boundary(current_year: i32) -> Option<Day> {
    current_year.checked_add(1).and_then(year_start)
}

/// The "present" boundary according to the local clock.
pub fn present_boundary_today() -> Day {
    let year = Local::now().date_naive().year();
    present_boundary(year).unwrap_or_else(|| day_of(NaiveDate::MAX))
}

/// All year boundaries (January 1) inside `[range.start, range.end)`.
///
/// ```
/// use swimlane_core::date::{parse_date, year_starts, year_of};
/// use swimlane_core::time::TimeInterval;
///
/// let range = TimeInterval::new(
///     parse_date("2010-06-01").unwrap(),
///     parse_date("2013-01-01").unwrap(),
/// );
/// let years: Vec<_> = year_starts(range).into_iter().filter_map(year_of).collect();
/// assert_eq!(years, vec![2011, 2012]);
/// ```
pub fn year_starts(range: TimeInterval<i64>) -> Vec<Day> {
    let (Some(first), Some(last)) = (year_of(range.start()), year_of(range.end())) else {
        return Vec::new();
    };
    (first..=last)
        .filter_map(year_start)
        .filter(|d| range.contains(*d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_numbers_are_ordered_like_dates() {
        assert!(day_of(ymd(2012, 1, 1)) < day_of(ymd(2012, 1, 2)));
        assert!(day_of(ymd(2011, 12, 31)) < day_of(ymd(2012, 1, 1)));
        assert_eq!(
            day_of(ymd(2012, 3, 1)) - day_of(ymd(2012, 2, 28)),
            crate::time::TimeDelta::new(2)
        );
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert_eq!(parse_date(" 2010-09-01 "), Ok(day_of(ymd(2010, 9, 1))));
    }

    #[test]
    fn test_parse_date_error_keeps_input() {
        let err = parse_date("2010/09/01").unwrap_err();
        assert_eq!(err.input(), "2010/09/01");
        assert_eq!(
            err.to_string(),
            "Invalid date '2010/09/01', expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_present_boundary_is_next_new_year() {
        assert_eq!(present_boundary(2024), Some(day_of(ymd(2025, 1, 1))));
        assert_eq!(present_boundary(i32::MAX), None);
    }

    #[test]
    fn test_present_boundary_today_is_after_today() {
        let today = day_of(Local::now().date_naive());
        assert!(present_boundary_today() > today);
    }

    #[test]
    fn test_year_starts_includes_range_start_on_new_year() {
        let range = TimeInterval::new(day_of(ymd(2010, 1, 1)), day_of(ymd(2012, 1, 1)));
        let years: Vec<_> = year_starts(range).into_iter().filter_map(year_of).collect();
        assert_eq!(years, vec![2010, 2011]);
    }

    #[test]
    fn test_year_starts_empty_within_single_year() {
        let range = TimeInterval::new(day_of(ymd(2010, 2, 1)), day_of(ymd(2010, 11, 1)));
        assert!(year_starts(range).is_empty());
    }
}
