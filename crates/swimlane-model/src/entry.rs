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

use crate::{err::InvalidIntervalError, id::EntryId};
use swimlane_core::{
    TimeVariable,
    time::{TimeInterval, TimePoint},
};
use std::fmt::Display;

/// What a timeline entry describes. Detail sections group entries by kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    Job,
    Education,
    Location,
    Other(String),
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Job => "job",
            EntryKind::Education => "education",
            EntryKind::Location => "location",
            EntryKind::Other(s) => s,
        }
    }
}

impl From<&str> for EntryKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "job" => EntryKind::Job,
            "education" => EntryKind::Education,
            "location" => EntryKind::Location,
            _ => EntryKind::Other(value.trim().to_string()),
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an entry ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryEnd<T: TimeVariable> {
    Until(TimePoint<T>),
    Ongoing,
}

impl<T: TimeVariable> EntryEnd<T> {
    /// The end instant, with `present` standing in for an ongoing entry.
    ///
    /// An ongoing entry never ends before it starts: if it starts after
    /// `present`, it resolves to `start` (a zero-length span).
    #[inline]
    pub fn resolve(self, start: TimePoint<T>, present: TimePoint<T>) -> TimePoint<T> {
        match self {
            EntryEnd::Until(end) => end,
            EntryEnd::Ongoing => present.max(start),
        }
    }

    #[inline]
    pub fn is_ongoing(self) -> bool {
        matches!(self, EntryEnd::Ongoing)
    }
}

impl<T: TimeVariable> From<Option<TimePoint<T>>> for EntryEnd<T> {
    fn from(value: Option<TimePoint<T>>) -> Self {
        value.map_or(EntryEnd::Ongoing, EntryEnd::Until)
    }
}

/// Anything that occupies a span on the time axis.
///
/// The lane assigner works on this trait so it can check spans that were
/// never validated, not just [`Entry`] values.
pub trait Spanned<T: TimeVariable> {
    fn span_id(&self) -> EntryId;
    fn span_start(&self) -> TimePoint<T>;
    fn span_end(&self) -> EntryEnd<T>;

    /// Human readable name used in error messages.
    fn span_label(&self) -> Option<&str> {
        None
    }
}

/// An unvalidated span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawSpan<T: TimeVariable> {
    pub id: EntryId,
    pub start: TimePoint<T>,
    pub end: EntryEnd<T>,
}

impl<T: TimeVariable> RawSpan<T> {
    #[inline]
    pub fn new(id: EntryId, start: TimePoint<T>, end: EntryEnd<T>) -> Self {
        Self { id, start, end }
    }
}

impl<T: TimeVariable> Spanned<T> for RawSpan<T> {
    #[inline]
    fn span_id(&self) -> EntryId {
        self.id
    }

    #[inline]
    fn span_start(&self) -> TimePoint<T> {
        self.start
    }

    #[inline]
    fn span_end(&self) -> EntryEnd<T> {
        self.end
    }
}

/// Display data attached to an entry. None of it affects layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryInfo {
    title: String,
    short_title: Option<String>,
    kind: Option<EntryKind>,
    url: Option<String>,
    logo: Option<String>,
    summary: Option<String>,
    description: Option<String>,
}

impl EntryInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_short_title(mut self, v: impl Into<String>) -> Self {
        self.short_title = Some(v.into());
        self
    }

    pub fn with_kind(mut self, v: EntryKind) -> Self {
        self.kind = Some(v);
        self
    }

    pub fn with_url(mut self, v: impl Into<String>) -> Self {
        self.url = Some(v.into());
        self
    }

    pub fn with_logo(mut self, v: impl Into<String>) -> Self {
        self.logo = Some(v.into());
        self
    }

    pub fn with_summary(mut self, v: impl Into<String>) -> Self {
        self.summary = Some(v.into());
        self
    }

    pub fn with_description(mut self, v: impl Into<String>) -> Self {
        self.description = Some(v.into());
        self
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The short title, falling back to the title.
    #[inline]
    pub fn short_title(&self) -> &str {
        self.short_title.as_deref().unwrap_or(&self.title)
    }

    #[inline]
    pub fn kind(&self) -> Option<&EntryKind> {
        self.kind.as_ref()
    }

    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[inline]
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    #[inline]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// One validated timeline entry: a job, a degree, a residency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T: TimeVariable = i64> {
    id: EntryId,
    start: TimePoint<T>,
    end: EntryEnd<T>,
    info: EntryInfo,
}

impl<T: TimeVariable> Entry<T> {
    /// Creates an entry, rejecting an explicit end before the start.
    pub fn new(
        id: EntryId,
        start: TimePoint<T>,
        end: EntryEnd<T>,
        info: EntryInfo,
    ) -> Result<Self, InvalidIntervalError<T>> {
        if let EntryEnd::Until(e) = end
            && e < start
        {
            return Err(InvalidIntervalError::new(
                id,
                Some(info.title().to_string()),
                start,
                e,
            ));
        }
        Ok(Self {
            id,
            start,
            end,
            info,
        })
    }

    /// Creates a closed entry from an already ordered span.
    pub fn from_span(id: EntryId, span: TimeInterval<T>, info: EntryInfo) -> Self {
        Self {
            id,
            start: span.start(),
            end: EntryEnd::Until(span.end()),
            info,
        }
    }

    /// Creates an entry that has not ended yet.
    pub fn ongoing(id: EntryId, start: TimePoint<T>, info: EntryInfo) -> Self {
        Self {
            id,
            start,
            end: EntryEnd::Ongoing,
            info,
        }
    }

    #[inline]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[inline]
    pub fn start(&self) -> TimePoint<T> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> EntryEnd<T> {
        self.end
    }

    #[inline]
    pub fn is_ongoing(&self) -> bool {
        self.end.is_ongoing()
    }

    #[inline]
    pub fn resolved_end(&self, present: TimePoint<T>) -> TimePoint<T> {
        self.end.resolve(self.start, present)
    }

    /// The occupied span, with ongoing entries running up to `present`.
    #[inline]
    pub fn span(&self, present: TimePoint<T>) -> TimeInterval<T> {
        // Construction guarantees start <= resolved end.
        TimeInterval::new(self.start, self.resolved_end(present))
    }

    #[inline]
    pub fn info(&self) -> &EntryInfo {
        &self.info
    }

    #[inline]
    pub fn title(&self) -> &str {
        self.info.title()
    }

    #[inline]
    pub fn kind(&self) -> Option<&EntryKind> {
        self.info.kind()
    }
}

impl<T: TimeVariable> Spanned<T> for Entry<T> {
    #[inline]
    fn span_id(&self) -> EntryId {
        self.id
    }

    #[inline]
    fn span_start(&self) -> TimePoint<T> {
        self.start
    }

    #[inline]
    fn span_end(&self) -> EntryEnd<T> {
        self.end
    }

    fn span_label(&self) -> Option<&str> {
        Some(self.info.title())
    }
}

impl<T: TimeVariable> Display for Entry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            EntryEnd::Until(end) => write!(
                f,
                "Entry({}, '{}', {} .. {})",
                self.id.value(),
                self.info.title(),
                self.start,
                end
            ),
            EntryEnd::Ongoing => write!(
                f,
                "Entry({}, '{}', {} .. ongoing)",
                self.id.value(),
                self.info.title(),
                self.start
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }

    #[test]
    fn test_entry_rejects_end_before_start() {
        let err = Entry::new(
            EntryId::new(1),
            tp(10),
            EntryEnd::Until(tp(5)),
            EntryInfo::new("Backwards"),
        )
        .unwrap_err();
        assert_eq!(err.id(), EntryId::new(1));
        assert_eq!(err.label(), Some("Backwards"));
    }

    #[test]
    fn test_zero_length_entry_is_valid() {
        let e = Entry::new(
            EntryId::new(1),
            tp(10),
            EntryEnd::Until(tp(10)),
            EntryInfo::new("Instant"),
        )
        .unwrap();
        assert!(e.span(tp(100)).is_empty());
    }

    #[test]
    fn test_ongoing_entry_runs_until_present() {
        let e = Entry::ongoing(EntryId::new(1), tp(10), EntryInfo::new("Now"));
        assert!(e.is_ongoing());
        assert_eq!(e.resolved_end(tp(50)), tp(50));
    }

    #[test]
    fn test_ongoing_entry_starting_after_present_is_zero_length() {
        let e = Entry::ongoing(EntryId::new(1), tp(80), EntryInfo::new("Future"));
        let span = e.span(tp(50));
        assert_eq!(span.start(), tp(80));
        assert!(span.is_empty());
    }

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!(EntryKind::from("Job"), EntryKind::Job);
        assert_eq!(EntryKind::from(" education "), EntryKind::Education);
        assert_eq!(
            EntryKind::from("residency"),
            EntryKind::Other("residency".to_string())
        );
        assert_eq!(EntryKind::Other("x".into()).as_str(), "x");
    }

    #[test]
    fn test_short_title_falls_back_to_title() {
        let info = EntryInfo::new("Doctor of Philosophy");
        assert_eq!(info.short_title(), "Doctor of Philosophy");
        let info = info.with_short_title("PhD");
        assert_eq!(info.short_title(), "PhD");
    }

    #[test]
    fn test_entry_display() {
        let e = Entry::new(
            EntryId::new(3),
            tp(1),
            EntryEnd::Until(tp(2)),
            EntryInfo::new("A"),
        )
        .unwrap();
        assert_eq!(e.to_string(), "Entry(3, 'A', 1 .. 2)");
    }
}
