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

use crate::lanes::{LaneAssigner, LaneAssignment, LaneError, Placement, resolve_spans};
use std::{cmp::Reverse, collections::BinaryHeap};
use swimlane_core::{TimeVariable, time::TimePoint};
use swimlane_model::entry::Spanned;
use tracing::{debug, instrument, trace};

/// First-fit backed by two heaps.
///
/// Busy lanes are keyed by the end of their last span. Before a span is
/// placed, every lane that ended by its start moves to the free heap, and
/// the span takes the lowest free lane. With starts in order a lane never
/// becomes busy again until it is taken, so the free heap holds exactly the
/// lanes the linear scan would accept and the results agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapAssigner;

impl Default for HeapAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapAssigner {
    pub fn new() -> Self {
        Self
    }
}

impl<T: TimeVariable> LaneAssigner<T> for HeapAssigner {
    #[instrument(level = "debug", skip_all, name = "Heap")]
    fn assign<S: Spanned<T>>(
        &self,
        items: &[S],
        present: TimePoint<T>,
    ) -> Result<LaneAssignment<T>, LaneError<T>> {
        let spans = resolve_spans(items, present)?;

        let mut busy: BinaryHeap<Reverse<(TimePoint<T>, usize)>> = BinaryHeap::new();
        let mut free: BinaryHeap<Reverse<usize>> = BinaryHeap::new();
        let mut lane_count = 0usize;
        let mut placements = Vec::with_capacity(spans.len());

        for (item, span) in items.iter().zip(spans) {
            while let Some(&Reverse((end, lane))) = busy.peek()
                && end <= span.start()
            {
                busy.pop();
                free.push(Reverse(lane));
            }

            let lane = match free.pop() {
                Some(Reverse(lane)) => lane,
                None => {
                    lane_count += 1;
                    lane_count - 1
                }
            };
            busy.push(Reverse((span.end(), lane)));
            trace!(id = %item.span_id(), %span, lane, "placed");
            placements.push(Placement::new(item.span_id(), span, lane));
        }

        debug!(spans = placements.len(), lanes = lane_count, "assigned");
        Ok(LaneAssignment::new(placements, lane_count))
    }

    fn name(&self) -> &'static str {
        "Heap"
    }
}
