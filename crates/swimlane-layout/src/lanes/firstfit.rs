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
use swimlane_core::{TimeVariable, time::TimePoint};
use swimlane_model::entry::Spanned;
use tracing::{debug, instrument, trace};

/// Linear first-fit: each span goes to the first lane whose last span has
/// ended by the span's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstFitAssigner;

impl Default for FirstFitAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl FirstFitAssigner {
    pub fn new() -> Self {
        Self
    }
}

impl<T: TimeVariable> LaneAssigner<T> for FirstFitAssigner {
    #[instrument(level = "debug", skip_all, name = "FirstFit")]
    fn assign<S: Spanned<T>>(
        &self,
        items: &[S],
        present: TimePoint<T>,
    ) -> Result<LaneAssignment<T>, LaneError<T>> {
        let spans = resolve_spans(items, present)?;

        // End of the last span placed in each lane.
        let mut lane_ends: Vec<TimePoint<T>> = Vec::new();
        let mut placements = Vec::with_capacity(spans.len());

        for (item, span) in items.iter().zip(spans) {
            let lane = match lane_ends.iter().position(|&end| span.start() >= end) {
                Some(lane) => {
                    lane_ends[lane] = span.end();
                    lane
                }
                None => {
                    lane_ends.push(span.end());
                    lane_ends.len() - 1
                }
            };
            trace!(id = %item.span_id(), %span, lane, "placed");
            placements.push(Placement::new(item.span_id(), span, lane));
        }

        debug!(spans = placements.len(), lanes = lane_ends.len(), "assigned");
        Ok(LaneAssignment::new(placements, lane_ends.len()))
    }

    fn name(&self) -> &'static str {
        "FirstFit"
    }
}
