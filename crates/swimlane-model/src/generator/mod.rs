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

//! Seeded synthetic timelines for benches and randomized tests.

mod config;
mod err;

pub use config::{TimelineGenConfig, TimelineGenConfigBuilder};
pub use err::TimelineGenConfigBuildError;

use crate::{
    entry::{Entry, EntryInfo, EntryKind},
    id::EntryId,
    timeline::Timeline,
};
use num_traits::{NumCast, ToPrimitive};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};
use swimlane_core::{
    TimeVariable,
    time::{TimeDelta, TimeInterval},
};

pub struct TimelineGenerator<T: TimeVariable + NumCast + ToPrimitive> {
    config: TimelineGenConfig<T>,
    rng: ChaCha8Rng,
    gap_distribution: Exp<f64>,
    duration_distribution: Normal<f64>,
    next_id: u64,
}

impl<T: TimeVariable + NumCast + ToPrimitive> From<TimelineGenConfig<T>> for TimelineGenerator<T> {
    fn from(config: TimelineGenConfig<T>) -> Self {
        Self::new(config)
    }
}

impl<T: TimeVariable + NumCast + ToPrimitive> TimelineGenerator<T> {
    pub fn new(config: TimelineGenConfig<T>) -> Self {
        let mean_gap = config.mean_gap().value().to_f64().unwrap_or(1.0).max(f64::EPSILON);
        let mean_duration = config.duration_mean().value().to_f64().unwrap_or(0.0);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed()),
            gap_distribution: Exp::new(1.0 / mean_gap).expect("positive mean gap"),
            duration_distribution: Normal::new(mean_duration, config.duration_sigma())
                .expect("finite, non-negative duration sigma"),
            config,
            next_id: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &TimelineGenConfig<T> {
        &self.config
    }

    #[inline]
    fn fresh_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        EntryId::new(id)
    }

    #[inline]
    fn to_delta(v: f64) -> TimeDelta<T> {
        let v = if v.is_finite() { v.round().max(0.0) } else { 0.0 };
        TimeDelta::new(NumCast::from(v).unwrap_or_else(T::max_value))
    }

    fn sample_kind(&mut self) -> EntryKind {
        match self.rng.random_range(0..3u8) {
            0 => EntryKind::Job,
            1 => EntryKind::Education,
            _ => EntryKind::Location,
        }
    }

    /// Generates one timeline. Repeated calls continue the same random
    /// stream and id sequence.
    pub fn generate(&mut self) -> Timeline<T> {
        let amount = self.config.amount();
        let mut entries = Vec::with_capacity(amount);
        let mut start = self.config.first_start();

        for i in 0..amount {
            if i > 0 {
                let gap = Self::to_delta(self.gap_distribution.sample(&mut self.rng));
                start = start.saturating_add(gap);
            }
            let id = self.fresh_id();
            let kind = self.sample_kind();
            let info = EntryInfo::new(format!("Entry {}", id.value()))
                .with_short_title(format!("E{}", id.value()))
                .with_kind(kind);

            if self.rng.random_bool(self.config.ongoing_share()) {
                entries.push(Entry::ongoing(id, start, info));
                continue;
            }

            let sampled = Self::to_delta(self.duration_distribution.sample(&mut self.rng));
            let duration = sampled.max(self.config.min_duration());
            let span = TimeInterval::new(start, start.saturating_add(duration));
            entries.push(Entry::from_span(id, span, info));
        }

        Timeline::from_unique(entries, self.config.present())
    }
}
