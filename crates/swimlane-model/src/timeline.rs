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

use crate::{
    entry::{Entry, EntryKind},
    err::TimelineBuildError,
    id::EntryId,
    record::EntryRecord,
};
use swimlane_core::{
    TimeVariable,
    date::Day,
    time::{TimeInterval, TimePoint},
};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Counts over the entries of a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineStats {
    entries: usize,
    ongoing: usize,
    per_kind: BTreeMap<String, usize>,
}

impl TimelineStats {
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    #[inline]
    pub fn ongoing(&self) -> usize {
        self.ongoing
    }

    /// Entries per kind; entries without a kind are not counted.
    #[inline]
    pub fn per_kind(&self) -> &BTreeMap<String, usize> {
        &self.per_kind
    }
}

/// A set of entries in chronological order together with the "present"
/// boundary ongoing entries run up to.
///
/// Entries are ordered by start; entries with the same start keep the
/// order in which they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<T: TimeVariable = i64> {
    entries: Vec<Entry<T>>,
    index: HashMap<EntryId, usize>,
    present: TimePoint<T>,
}

impl<T: TimeVariable> Timeline<T> {
    #[inline]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn present(&self) -> TimePoint<T> {
        self.present
    }

    #[inline]
    pub fn get(&self, id: EntryId) -> Option<&Entry<T>> {
        self.index.get(&id).and_then(|&i| self.entries.get(i))
    }

    /// Chronological position of an entry.
    #[inline]
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    #[inline]
    pub fn earliest_start(&self) -> Option<TimePoint<T>> {
        self.entries.first().map(Entry::start)
    }

    /// The range the time axis has to cover: from the earliest start to the
    /// present boundary, or to the latest end if an entry ends after it.
    pub fn domain(&self) -> Option<TimeInterval<T>> {
        let start = self.earliest_start()?;
        let end = self
            .entries
            .iter()
            .map(|e| e.resolved_end(self.present))
            .fold(self.present.max(start), TimePoint::max);
        Some(TimeInterval::new(start, end))
    }

    /// Entries of one kind, most recent start first.
    pub fn section(&self, kind: &EntryKind) -> Vec<&Entry<T>> {
        let mut out: Vec<&Entry<T>> = self
            .entries
            .iter()
            .filter(|e| e.kind() == Some(kind))
            .collect();
        out.sort_by(|a, b| b.start().cmp(&a.start()));
        out
    }

    /// The anchor the detail section uses for an entry: `target_<position>`.
    #[inline]
    pub fn anchor(&self, id: EntryId) -> Option<String> {
        self.position(id).map(|i| format!("target_{}", i))
    }

    pub fn stats(&self) -> TimelineStats {
        let mut per_kind = BTreeMap::new();
        for kind in self.entries.iter().filter_map(Entry::kind) {
            *per_kind.entry(kind.as_str().to_string()).or_insert(0) += 1;
        }
        TimelineStats {
            entries: self.entries.len(),
            ongoing: self.entries.iter().filter(|e| e.is_ongoing()).count(),
            per_kind,
        }
    }
}

impl<T: TimeVariable> Timeline<T> {
    /// Callers guarantee that ids are unique.
    pub(crate) fn from_unique(mut entries: Vec<Entry<T>>, present: TimePoint<T>) -> Self {
        // Stable: equal starts keep insertion order.
        entries.sort_by_key(Entry::start);
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id(), i))
            .collect();
        Timeline {
            entries,
            index,
            present,
        }
    }
}

impl Timeline<i64> {
    /// Builds a timeline from raw records. Ids are the record positions.
    ///
    /// The first record that fails to parse or validate aborts the whole
    /// batch.
    pub fn from_records(records: &[EntryRecord], present: Day) -> Result<Self, TimelineBuildError> {
        let mut builder = TimelineBuilder::new(present);
        for (i, record) in records.iter().enumerate() {
            let entry = record.to_entry(EntryId::new(i as u64))?;
            builder.add_entry(entry)?;
        }
        Ok(builder.build())
    }
}

#[derive(Debug, Clone)]
pub struct TimelineBuilder<T: TimeVariable = i64> {
    entries: Vec<Entry<T>>,
    ids: HashSet<EntryId>,
    present: TimePoint<T>,
}

impl<T: TimeVariable> TimelineBuilder<T> {
    pub fn new(present: TimePoint<T>) -> Self {
        Self {
            entries: Vec::new(),
            ids: HashSet::new(),
            present,
        }
    }

    pub fn add_entry(&mut self, entry: Entry<T>) -> Result<&mut Self, TimelineBuildError> {
        if !self.ids.insert(entry.id()) {
            return Err(TimelineBuildError::DuplicateEntryId(entry.id()));
        }
        self.entries.push(entry);
        Ok(self)
    }

    pub fn extend<I>(&mut self, entries: I) -> Result<&mut Self, TimelineBuildError>
    where
        I: IntoIterator<Item = Entry<T>>,
    {
        for e in entries {
            self.add_entry(e)?;
        }
        Ok(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> Timeline<T> {
        Timeline::from_unique(self.entries, self.present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryEnd, EntryInfo};
    use swimlane_core::date::parse_date;

    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }

    fn entry(id: u64, start: i64, end: Option<i64>, kind: EntryKind) -> Entry<i64> {
        Entry::new(
            EntryId::new(id),
            tp(start),
            end.map(tp).into(),
            EntryInfo::new(format!("e{id}")).with_kind(kind),
        )
        .unwrap()
    }

    #[test]
    fn test_build_sorts_by_start_stably() {
        let mut b = TimelineBuilder::new(tp(100));
        b.add_entry(entry(1, 30, Some(40), EntryKind::Job)).unwrap();
        b.add_entry(entry(2, 10, Some(20), EntryKind::Job)).unwrap();
        b.add_entry(entry(3, 30, Some(35), EntryKind::Job)).unwrap();
        b.add_entry(entry(4, 10, None, EntryKind::Job)).unwrap();
        let t = b.build();
        let ids: Vec<u64> = t.iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert_eq!(t.position(EntryId::new(1)), Some(2));
        assert_eq!(t.get(EntryId::new(3)).map(Entry::start), Some(tp(30)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut b = TimelineBuilder::new(tp(100));
        b.add_entry(entry(1, 0, Some(5), EntryKind::Job)).unwrap();
        let err = b
            .add_entry(entry(1, 3, Some(6), EntryKind::Job))
            .unwrap_err();
        assert_eq!(err, TimelineBuildError::DuplicateEntryId(EntryId::new(1)));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_domain_runs_to_present_or_latest_end() {
        let mut b = TimelineBuilder::new(tp(100));
        b.extend([
            entry(1, 10, Some(20), EntryKind::Job),
            entry(2, 15, None, EntryKind::Job),
        ])
        .unwrap();
        let t = b.build();
        assert_eq!(t.domain(), Some(TimeInterval::new(tp(10), tp(100))));

        let mut b = TimelineBuilder::new(tp(100));
        b.add_entry(entry(1, 10, Some(120), EntryKind::Job)).unwrap();
        assert_eq!(
            b.build().domain(),
            Some(TimeInterval::new(tp(10), tp(120)))
        );
    }

    #[test]
    fn test_empty_timeline_has_no_domain() {
        let t = TimelineBuilder::<i64>::new(tp(100)).build();
        assert!(t.is_empty());
        assert_eq!(t.domain(), None);
        assert_eq!(t.stats().entries(), 0);
    }

    #[test]
    fn test_section_is_most_recent_first() {
        let mut b = TimelineBuilder::new(tp(100));
        b.extend([
            entry(1, 10, Some(20), EntryKind::Job),
            entry(2, 5, Some(8), EntryKind::Education),
            entry(3, 30, None, EntryKind::Job),
        ])
        .unwrap();
        let t = b.build();
        let jobs: Vec<u64> = t
            .section(&EntryKind::Job)
            .iter()
            .map(|e| e.id().value())
            .collect();
        assert_eq!(jobs, vec![3, 1]);
        assert_eq!(t.section(&EntryKind::Location).len(), 0);
    }

    #[test]
    fn test_anchor_uses_chronological_position() {
        let mut b = TimelineBuilder::new(tp(100));
        b.extend([
            entry(7, 50, Some(60), EntryKind::Job),
            entry(8, 10, Some(20), EntryKind::Job),
        ])
        .unwrap();
        let t = b.build();
        assert_eq!(t.anchor(EntryId::new(8)).as_deref(), Some("target_0"));
        assert_eq!(t.anchor(EntryId::new(7)).as_deref(), Some("target_1"));
        assert_eq!(t.anchor(EntryId::new(99)), None);
    }

    #[test]
    fn test_stats_counts_kinds_and_ongoing() {
        let mut b = TimelineBuilder::new(tp(100));
        b.extend([
            entry(1, 10, Some(20), EntryKind::Job),
            entry(2, 5, None, EntryKind::Education),
            entry(3, 30, None, EntryKind::Job),
        ])
        .unwrap();
        let stats = b.build().stats();
        assert_eq!(stats.entries(), 3);
        assert_eq!(stats.ongoing(), 2);
        assert_eq!(stats.per_kind().get("job"), Some(&2));
        assert_eq!(stats.per_kind().get("education"), Some(&1));
    }

    #[test]
    fn test_from_records_assigns_input_positions_as_ids() {
        let records = vec![
            EntryRecord::new("2014-01-01", Some("2018-01-01"), "C"),
            EntryRecord::new("2010-01-01", Some("2014-01-01"), "A"),
        ];
        let present = parse_date("2026-01-01").unwrap();
        let t = Timeline::from_records(&records, present).unwrap();
        assert_eq!(t.entries()[0].title(), "A");
        assert_eq!(t.entries()[0].id(), EntryId::new(1));
        assert_eq!(t.present(), present);
    }

    #[test]
    fn test_from_records_aborts_on_first_bad_record() {
        let records = vec![
            EntryRecord::new("2010-01-01", Some("2014-01-01"), "ok"),
            EntryRecord::new("2014-01-01", Some("2012-01-01"), "backwards"),
        ];
        let err = Timeline::from_records(&records, parse_date("2026-01-01").unwrap()).unwrap_err();
        match err {
            TimelineBuildError::Record(e) => assert_eq!(e.id(), EntryId::new(1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entry_end_from_option() {
        let end: EntryEnd<i64> = None.into();
        assert!(end.is_ongoing());
    }
}
