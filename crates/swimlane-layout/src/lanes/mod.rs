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

//! # Lane Assignment
//!
//! Packs timeline spans into horizontal lanes so that no two spans in the
//! same lane overlap. Spans are visited in start order and each goes to the
//! lowest-numbered lane whose last span has already ended (a span may start
//! exactly when the previous one in its lane ends).
//!
//! Visiting in start order makes this first-fit strategy optimal: the
//! number of lanes equals the largest number of spans that share a common
//! instant (see [`max_overlap`]).
//!
//! Two implementations produce identical assignments:
//!
//! - [`FirstFitAssigner`] scans the lanes linearly, `O(n * lanes)`.
//! - [`HeapAssigner`] keeps busy and free lanes in heaps, `O(n log n)`.

mod firstfit;
mod heap;

pub use firstfit::FirstFitAssigner;
pub use heap::HeapAssigner;

use swimlane_core::{
    TimeVariable,
    time::{TimeInterval, TimePoint},
};
use swimlane_model::{entry::Spanned, err::InvalidIntervalError, id::EntryId};
use std::fmt::Display;

/// A span that starts before the span preceding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsortedInputError<T: TimeVariable> {
    index: usize,
    id: EntryId,
    start: TimePoint<T>,
    previous_start: TimePoint<T>,
}

impl<T: TimeVariable> UnsortedInputError<T> {
    #[inline]
    pub fn new(
        index: usize,
        id: EntryId,
        start: TimePoint<T>,
        previous_start: TimePoint<T>,
    ) -> Self {
        Self {
            index,
            id,
            start,
            previous_start,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
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
    pub fn previous_start(&self) -> TimePoint<T> {
        self.previous_start
    }
}

impl<T: TimeVariable> Display for UnsortedInputError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entry {} at position {} starts at {} before its predecessor at {}",
            self.id, self.index, self.start, self.previous_start
        )
    }
}

impl<T: TimeVariable> std::error::Error for UnsortedInputError<T> {}

/// Why a batch could not be assigned to lanes. No partial result exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneError<T: TimeVariable> {
    InvalidInterval(InvalidIntervalError<T>),
    Unsorted(UnsortedInputError<T>),
}

impl<T: TimeVariable> LaneError<T> {
    pub fn id(&self) -> EntryId {
        match self {
            LaneError::InvalidInterval(e) => e.id(),
            LaneError::Unsorted(e) => e.id(),
        }
    }
}

impl<T: TimeVariable> Display for LaneError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaneError::InvalidInterval(e) => write!(f, "{}", e),
            LaneError::Unsorted(e) => write!(f, "{}", e),
        }
    }
}

impl<T: TimeVariable> std::error::Error for LaneError<T> {}

impl<T: TimeVariable> From<InvalidIntervalError<T>> for LaneError<T> {
    fn from(err: InvalidIntervalError<T>) -> Self {
        LaneError::InvalidInterval(err)
    }
}

impl<T: TimeVariable> From<UnsortedInputError<T>> for LaneError<T> {
    fn from(err: UnsortedInputError<T>) -> Self {
        LaneError::Unsorted(err)
    }
}

/// One span together with the lane it was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement<T: TimeVariable> {
    id: EntryId,
    span: TimeInterval<T>,
    lane: usize,
}

impl<T: TimeVariable> Placement<T> {
    #[inline]
    pub fn new(id: EntryId, span: TimeInterval<T>, lane: usize) -> Self {
        Self { id, span, lane }
    }

    #[inline]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The resolved span; ongoing entries end at the present boundary.
    #[inline]
    pub fn span(&self) -> TimeInterval<T> {
        self.span
    }

    #[inline]
    pub fn lane(&self) -> usize {
        self.lane
    }
}

/// An input item annotated with its lane.
#[derive(Debug, PartialEq, Eq)]
pub struct Placed<'a, S> {
    pub item: &'a S,
    pub lane: usize,
}

impl<S> Clone for Placed<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Placed<'_, S> {}

/// The lanes of one batch, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaneAssignment<T: TimeVariable> {
    placements: Vec<Placement<T>>,
    lane_count: usize,
}

impl<T: TimeVariable> LaneAssignment<T> {
    pub(crate) fn new(placements: Vec<Placement<T>>, lane_count: usize) -> Self {
        Self {
            placements,
            lane_count,
        }
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[inline]
    pub fn placements(&self) -> &[Placement<T>] {
        &self.placements
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Placement<T>> {
        self.placements.iter()
    }

    /// Lane indices in input order.
    #[inline]
    pub fn lanes(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements.iter().map(Placement::lane)
    }

    /// Lane of the span at `index` in the input.
    #[inline]
    pub fn lane_of(&self, index: usize) -> Option<usize> {
        self.placements.get(index).map(Placement::lane)
    }

    #[inline]
    pub fn lane_for(&self, id: EntryId) -> Option<usize> {
        self.placements.iter().find(|p| p.id == id).map(Placement::lane)
    }

    /// Placements in one lane, in input order.
    pub fn lane_members(&self, lane: usize) -> impl Iterator<Item = &Placement<T>> {
        self.placements.iter().filter(move |p| p.lane == lane)
    }

    /// Pairs every input item with its lane.
    ///
    /// `items` must be the slice this assignment was computed from.
    pub fn annotate<'a, S>(&self, items: &'a [S]) -> Vec<Placed<'a, S>> {
        debug_assert_eq!(items.len(), self.placements.len());
        items
            .iter()
            .zip(self.lanes())
            .map(|(item, lane)| Placed { item, lane })
            .collect()
    }

    /// Checks that no two spans sharing a lane overlap.
    pub fn is_overlap_free(&self) -> bool {
        (0..self.lane_count).all(|lane| {
            let members: Vec<_> = self.lane_members(lane).collect();
            members
                .iter()
                .enumerate()
                .all(|(i, a)| members[i + 1..].iter().all(|b| !a.span.overlaps(&b.span)))
        })
    }
}

/// Assigns lanes to a batch of spans ordered by start.
pub trait LaneAssigner<T: TimeVariable> {
    fn assign<S: Spanned<T>>(
        &self,
        items: &[S],
        present: TimePoint<T>,
    ) -> Result<LaneAssignment<T>, LaneError<T>>;

    fn name(&self) -> &'static str;
}

/// Assigns lanes with the [`FirstFitAssigner`].
pub fn assign_lanes<T, S>(
    items: &[S],
    present: TimePoint<T>,
) -> Result<LaneAssignment<T>, LaneError<T>>
where
    T: TimeVariable,
    S: Spanned<T>,
{
    FirstFitAssigner::new().assign(items, present)
}

/// Resolves ongoing ends and checks the input preconditions.
///
/// Fails on the first span whose end precedes its start or whose start
/// precedes the start of the span before it.
pub(crate) fn resolve_spans<T, S>(
    items: &[S],
    present: TimePoint<T>,
) -> Result<Vec<TimeInterval<T>>, LaneError<T>>
where
    T: TimeVariable,
    S: Spanned<T>,
{
    let mut spans = Vec::with_capacity(items.len());
    let mut previous: Option<TimePoint<T>> = None;

    for (index, item) in items.iter().enumerate() {
        let start = item.span_start();
        let end = item.span_end().resolve(start, present);
        let span = TimeInterval::try_new(start, end).ok_or_else(|| {
            InvalidIntervalError::new(
                item.span_id(),
                item.span_label().map(str::to_string),
                start,
                end,
            )
        })?;
        if let Some(prev) = previous
            && start < prev
        {
            return Err(UnsortedInputError::new(index, item.span_id(), start, prev).into());
        }
        previous = Some(start);
        spans.push(span);
    }

    Ok(spans)
}

/// The largest number of spans sharing a common instant.
///
/// Zero-length spans cover no instant and are ignored. For spans of
/// positive length visited in start order, this equals the lane count of
/// the first-fit assignment.
pub fn max_overlap<T: TimeVariable>(spans: &[TimeInterval<T>]) -> usize {
    // Ends sort before starts at the same instant: half-open spans that
    // touch do not share it.
    let mut events: Vec<(TimePoint<T>, i8)> = spans
        .iter()
        .filter(|s| !s.is_empty())
        .flat_map(|s| [(s.start(), 1i8), (s.end(), -1i8)])
        .collect();
    events.sort();

    let mut active = 0usize;
    let mut best = 0usize;
    for (_, delta) in events {
        if delta > 0 {
            active += 1;
            best = best.max(active);
        } else {
            active -= 1;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use swimlane_core::date::parse_date;
    use swimlane_model::{
        entry::{Entry, EntryEnd, EntryInfo, RawSpan},
        timeline::TimelineBuilder,
    };

    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }

    fn raw(id: u64, start: i64, end: Option<i64>) -> RawSpan<i64> {
        RawSpan::new(EntryId::new(id), tp(start), end.map(tp).into())
    }

    fn day(s: &str) -> TimePoint<i64> {
        parse_date(s).unwrap()
    }

    fn random_spans(seed: u64, n: usize, positive: bool) -> Vec<RawSpan<i64>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut starts: Vec<i64> = (0..n).map(|_| rng.random_range(0..500)).collect();
        starts.sort();
        starts
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let min_len = if positive { 1 } else { 0 };
                let len = rng.random_range(min_len..120);
                let end = if rng.random_bool(0.1) { None } else { Some(s + len) };
                raw(i as u64, s, end)
            })
            .collect()
    }

    fn both() -> (FirstFitAssigner, HeapAssigner) {
        (FirstFitAssigner::new(), HeapAssigner::new())
    }

    #[test]
    fn test_overlapping_then_adjacent_scenario() {
        // A: 2010-2014, B: 2012-2013, C: 2014-2018
        let items = [
            RawSpan::new(EntryId::new(0), day("2010-01-01"), EntryEnd::Until(day("2014-01-01"))),
            RawSpan::new(EntryId::new(1), day("2012-01-01"), EntryEnd::Until(day("2013-01-01"))),
            RawSpan::new(EntryId::new(2), day("2014-01-01"), EntryEnd::Until(day("2018-01-01"))),
        ];
        let present = day("2026-01-01");
        let (ff, hp) = both();
        for a in [ff.assign(&items, present).unwrap(), hp.assign(&items, present).unwrap()] {
            assert_eq!(a.lanes().collect::<Vec<_>>(), vec![0, 1, 0]);
            assert_eq!(a.lane_count(), 2);
        }
    }

    #[test]
    fn test_disjoint_chronological_spans_share_lane_zero() {
        let items = [raw(0, 0, Some(10)), raw(1, 20, Some(30)), raw(2, 40, Some(50))];
        let a = assign_lanes(&items, tp(100)).unwrap();
        assert_eq!(a.lanes().collect::<Vec<_>>(), vec![0, 0, 0]);
        assert_eq!(a.lane_count(), 1);
    }

    #[test]
    fn test_ongoing_span_blocks_later_spans_until_present() {
        let items = [raw(0, 0, None), raw(1, 50, Some(60)), raw(2, 100, Some(110))];
        let a = assign_lanes(&items, tp(100)).unwrap();
        // The ongoing span runs to 100, so 1 needs a new lane and 2 fits
        // right after it in lane 0.
        assert_eq!(a.lanes().collect::<Vec<_>>(), vec![0, 1, 0]);
        assert_eq!(a.placements()[0].span().end(), tp(100));
    }

    #[test]
    fn test_single_span_uses_one_lane() {
        let a = assign_lanes(&[raw(0, 5, Some(6))], tp(100)).unwrap();
        assert_eq!(a.lane_count(), 1);
        assert_eq!(a.lane_of(0), Some(0));
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let items: [RawSpan<i64>; 0] = [];
        let (ff, hp) = both();
        for a in [ff.assign(&items, tp(0)).unwrap(), hp.assign(&items, tp(0)).unwrap()] {
            assert!(a.is_empty());
            assert_eq!(a.lane_count(), 0);
        }
    }

    #[test]
    fn test_end_before_start_aborts_the_batch() {
        let items = [raw(0, 0, Some(10)), raw(1, 20, Some(15)), raw(2, 30, Some(40))];
        let (ff, hp) = both();
        for err in [
            ff.assign(&items, tp(100)).unwrap_err(),
            hp.assign(&items, tp(100)).unwrap_err(),
        ] {
            match err {
                LaneError::InvalidInterval(e) => {
                    assert_eq!(e.id(), EntryId::new(1));
                    assert_eq!(e.start(), tp(20));
                    assert_eq!(e.end(), tp(15));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_unsorted_input_is_rejected() {
        let items = [raw(0, 10, Some(20)), raw(1, 5, Some(8))];
        let err = assign_lanes(&items, tp(100)).unwrap_err();
        assert_eq!(
            err,
            LaneError::Unsorted(UnsortedInputError::new(1, EntryId::new(1), tp(5), tp(10)))
        );
        assert_eq!(err.id(), EntryId::new(1));
    }

    #[test]
    fn test_identical_and_zero_length_spans_are_valid() {
        let items = [
            raw(0, 10, Some(20)),
            raw(1, 10, Some(20)),
            raw(2, 15, Some(15)),
            raw(3, 20, Some(20)),
        ];
        let a = assign_lanes(&items, tp(100)).unwrap();
        // 2 sits strictly inside 0 and 1; 3 touches their ends.
        assert_eq!(a.lanes().collect::<Vec<_>>(), vec![0, 1, 2, 0]);
        assert!(a.is_overlap_free());
    }

    #[test]
    fn test_equal_starts_keep_input_order() {
        let items = [raw(0, 0, Some(5)), raw(1, 0, Some(50)), raw(2, 5, Some(6))];
        let a = assign_lanes(&items, tp(100)).unwrap();
        assert_eq!(a.lanes().collect::<Vec<_>>(), vec![0, 1, 0]);
    }

    #[test]
    fn test_entries_report_their_title_on_error() {
        struct Backwards;
        impl Spanned<i64> for Backwards {
            fn span_id(&self) -> EntryId {
                EntryId::new(42)
            }
            fn span_start(&self) -> TimePoint<i64> {
                TimePoint::new(10)
            }
            fn span_end(&self) -> EntryEnd<i64> {
                EntryEnd::Until(TimePoint::new(0))
            }
            fn span_label(&self) -> Option<&str> {
                Some("Reversed")
            }
        }
        let err = assign_lanes(&[Backwards], tp(100)).unwrap_err();
        assert!(err.to_string().contains("Reversed"));
    }

    #[test]
    fn test_assigns_timeline_entries() {
        let mut b = TimelineBuilder::new(tp(100));
        b.extend([
            Entry::new(EntryId::new(0), tp(0), EntryEnd::Until(tp(40)), EntryInfo::new("a")).unwrap(),
            Entry::ongoing(EntryId::new(1), tp(20), EntryInfo::new("b")),
            Entry::new(EntryId::new(2), tp(40), EntryEnd::Until(tp(60)), EntryInfo::new("c")).unwrap(),
        ])
        .unwrap();
        let t = b.build();
        let a = assign_lanes(t.entries(), t.present()).unwrap();
        let annotated: Vec<(&str, usize)> = a
            .annotate(t.entries())
            .into_iter()
            .map(|p| (p.item.title(), p.lane))
            .collect();
        assert_eq!(annotated, vec![("a", 0), ("b", 1), ("c", 0)]);
        assert_eq!(a.lane_for(EntryId::new(1)), Some(1));
        assert_eq!(a.lane_members(0).count(), 2);
    }

    #[test]
    fn test_random_batches_are_overlap_free_and_contiguous() {
        for seed in 0..40 {
            let items = random_spans(seed, 60, false);
            let a = assign_lanes(&items, tp(550)).unwrap();
            assert!(a.is_overlap_free(), "seed {seed}");
            for lane in 0..a.lane_count() {
                assert!(a.lane_members(lane).next().is_some(), "seed {seed} lane {lane} unused");
            }
            assert!(a.lanes().all(|l| l < a.lane_count()));
        }
    }

    #[test]
    fn test_lane_count_matches_max_overlap_for_positive_spans() {
        for seed in 100..140 {
            let items = random_spans(seed, 50, true);
            let a = assign_lanes(&items, tp(700)).unwrap();
            let spans: Vec<_> = a.iter().map(Placement::span).collect();
            assert_eq!(a.lane_count(), max_overlap(&spans), "seed {seed}");
        }
    }

    #[test]
    fn test_heap_assigner_matches_first_fit() {
        let (ff, hp) = both();
        for seed in 200..260 {
            let items = random_spans(seed, 80, false);
            assert_eq!(
                ff.assign(&items, tp(600)).unwrap(),
                hp.assign(&items, tp(600)).unwrap(),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_assignment_is_idempotent() {
        let items = random_spans(7, 40, false);
        let first = assign_lanes(&items, tp(600)).unwrap();
        let second = assign_lanes(&items, tp(600)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_max_overlap_treats_touching_spans_as_disjoint() {
        let spans = [
            TimeInterval::new(tp(0), tp(10)),
            TimeInterval::new(tp(10), tp(20)),
            TimeInterval::new(tp(5), tp(15)),
            TimeInterval::new(tp(7), tp(7)),
        ];
        assert_eq!(max_overlap(&spans), 2);
        assert_eq!(max_overlap::<i64>(&[]), 0);
    }
}
