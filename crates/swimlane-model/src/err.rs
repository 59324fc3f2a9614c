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

use crate::id::EntryId;
use swimlane_core::{
    TimeVariable,
    date::{DATE_FORMAT, DateParseError, Day, date_of},
    time::TimePoint,
};
use std::fmt::Display;

/// An entry whose end precedes its start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidIntervalError<T: TimeVariable> {
    id: EntryId,
    label: Option<String>,
    start: TimePoint<T>,
    end: TimePoint<T>,
}

impl<T: TimeVariable> InvalidIntervalError<T> {
    #[inline]
    pub fn new(id: EntryId, label: Option<String>, start: TimePoint<T>, end: TimePoint<T>) -> Self {
        Self {
            id,
            label,
            start,
            end,
        }
    }

    #[inline]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    pub fn start(&self) -> TimePoint<T> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> TimePoint<T> {
        self.end
    }
}

impl<T: TimeVariable> Display for InvalidIntervalError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(
                f,
                "Entry {} ('{}') ends before it starts: {} < {}",
                self.id, label, self.end, self.start
            ),
            None => write!(
                f,
                "Entry {} ends before it starts: {} < {}",
                self.id, self.end, self.start
            ),
        }
    }
}

impl<T: TimeVariable> std::error::Error for InvalidIntervalError<T> {}

/// A raw record that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    StartDate { id: EntryId, source: DateParseError },
    EndDate { id: EntryId, source: DateParseError },
    InvalidInterval(InvalidIntervalError<i64>),
}

impl RecordError {
    pub fn id(&self) -> EntryId {
        match self {
            RecordError::StartDate { id, .. } | RecordError::EndDate { id, .. } => *id,
            RecordError::InvalidInterval(e) => e.id(),
        }
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::StartDate { id, source } => {
                write!(f, "Entry {} has an invalid start date: {}", id, source)
            }
            RecordError::EndDate { id, source } => {
                write!(f, "Entry {} has an invalid end date: {}", id, source)
            }
            RecordError::InvalidInterval(e) => {
                let date = |d: Day| {
                    date_of(d)
                        .map(|d| d.format(DATE_FORMAT).to_string())
                        .unwrap_or_else(|| d.to_string())
                };
                write!(f, "Entry {}", e.id())?;
                if let Some(label) = e.label() {
                    write!(f, " ('{}')", label)?;
                }
                write!(
                    f,
                    " ends on {} before it starts on {}",
                    date(e.end()),
                    date(e.start())
                )
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::StartDate { source, .. } | RecordError::EndDate { source, .. } => {
                Some(source)
            }
            RecordError::InvalidInterval(e) => Some(e),
        }
    }
}

impl From<InvalidIntervalError<i64>> for RecordError {
    fn from(err: InvalidIntervalError<i64>) -> Self {
        RecordError::InvalidInterval(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineBuildError {
    DuplicateEntryId(EntryId),
    Record(RecordError),
}

impl Display for TimelineBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelineBuildError::DuplicateEntryId(id) => {
                write!(f, "Entry {} was added more than once", id)
            }
            TimelineBuildError::Record(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TimelineBuildError {}

impl From<RecordError> for TimelineBuildError {
    fn from(err: RecordError) -> Self {
        TimelineBuildError::Record(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_interval_names_the_entry() {
        let err = InvalidIntervalError::new(
            EntryId::new(4),
            Some("Postdoc".to_string()),
            TimePoint::new(10i64),
            TimePoint::new(3),
        );
        assert_eq!(
            err.to_string(),
            "Entry EntryId(4) ('Postdoc') ends before it starts: 3 < 10"
        );
    }

    #[test]
    fn test_record_error_reports_its_entry() {
        let err = RecordError::EndDate {
            id: EntryId::new(2),
            source: DateParseError::new("soon"),
        };
        assert_eq!(err.id(), EntryId::new(2));
        assert!(std::error::Error::source(&err).is_some());
    }
}
