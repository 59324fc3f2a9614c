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

//! Human readable date ranges for tooltips and detail lists.

use crate::config::DateLabelStyle;
use swimlane_core::date::{Day, date_of};
use swimlane_model::entry::EntryEnd;

const EN_DASH: &str = "\u{2013}";

fn format_day(day: Day, fmt: &str) -> String {
    match date_of(day) {
        Some(date) => date.format(fmt).to_string(),
        None => day.value().to_string(),
    }
}

/// Writes the range from `start` to `end`.
///
/// ```
/// use swimlane_core::date::parse_date;
/// use swimlane_layout::{config::DateLabelStyle, label::date_range_label};
/// use swimlane_model::entry::EntryEnd;
///
/// let start = parse_date("2010-01-15").unwrap();
/// let end = EntryEnd::Until(parse_date("2014-03-01").unwrap());
/// assert_eq!(date_range_label(DateLabelStyle::MonthYear, start, end), "Jan 2010 – Mar 2014");
/// assert_eq!(date_range_label(DateLabelStyle::YearOnly, start, EntryEnd::Ongoing), "2010 – Present");
/// ```
pub fn date_range_label(style: DateLabelStyle, start: Day, end: EntryEnd<i64>) -> String {
    let sy = format_day(start, "%Y");
    match style {
        DateLabelStyle::MonthYear => {
            let sm = format_day(start, "%b");
            match end {
                EntryEnd::Ongoing => format!("{sm} {sy} {EN_DASH} Present"),
                EntryEnd::Until(end) => {
                    let (em, ey) = (format_day(end, "%b"), format_day(end, "%Y"));
                    if sy == ey {
                        format!("{sm} {EN_DASH} {em} {sy}")
                    } else {
                        format!("{sm} {sy} {EN_DASH} {em} {ey}")
                    }
                }
            }
        }
        DateLabelStyle::YearOnly => match end {
            EntryEnd::Ongoing => format!("{sy} {EN_DASH} Present"),
            EntryEnd::Until(end) => {
                let ey = format_day(end, "%Y");
                if sy == ey { sy } else { format!("{sy} {EN_DASH} {ey}") }
            }
        },
    }
}

/// Rough pixel width of `text` at `char_width` per character.
#[inline]
pub fn estimate_text_width(text: &str, char_width: f64) -> f64 {
    text.chars().count() as f64 * char_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use swimlane_core::date::parse_date;

    fn until(s: &str) -> EntryEnd<i64> {
        EntryEnd::Until(parse_date(s).unwrap())
    }

    #[test]
    fn test_month_year_labels() {
        let start = parse_date("2010-01-01").unwrap();
        assert_eq!(
            date_range_label(DateLabelStyle::MonthYear, start, EntryEnd::Ongoing),
            "Jan 2010 – Present"
        );
        assert_eq!(
            date_range_label(DateLabelStyle::MonthYear, start, until("2010-03-31")),
            "Jan – Mar 2010"
        );
        assert_eq!(
            date_range_label(DateLabelStyle::MonthYear, start, until("2014-03-01")),
            "Jan 2010 – Mar 2014"
        );
    }

    #[test]
    fn test_year_only_labels() {
        let start = parse_date("2010-06-01").unwrap();
        assert_eq!(
            date_range_label(DateLabelStyle::YearOnly, start, EntryEnd::Ongoing),
            "2010 – Present"
        );
        assert_eq!(
            date_range_label(DateLabelStyle::YearOnly, start, until("2010-09-01")),
            "2010"
        );
        assert_eq!(
            date_range_label(DateLabelStyle::YearOnly, start, until("2014-01-01")),
            "2010 – 2014"
        );
    }

    #[test]
    fn test_text_width_counts_characters() {
        assert_eq!(estimate_text_width("ETH", 6.5), 19.5);
        assert_eq!(estimate_text_width("Zürich", 10.0), 60.0);
        assert_eq!(estimate_text_width("", 6.5), 0.0);
    }
}
