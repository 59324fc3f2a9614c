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

use super::err::TimelineGenConfigBuildError;
use num_traits::{NumCast, ToPrimitive};
use rand::Rng;
use swimlane_core::{
    TimeVariable,
    time::{TimeDelta, TimePoint},
};
use std::fmt::Display;

/// Configuration for synthetic timelines.
///
/// Starts follow a Poisson process (exponential gaps with mean `mean_gap`),
/// durations are normally distributed around `duration_mean` and clipped
/// at `min_duration`. A share of entries is left ongoing.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineGenConfig<T: TimeVariable + NumCast + ToPrimitive> {
    pub(crate) amount: usize,
    pub(crate) first_start: TimePoint<T>,
    pub(crate) present: TimePoint<T>,
    pub(crate) mean_gap: TimeDelta<T>,
    pub(crate) duration_mean: TimeDelta<T>,
    pub(crate) duration_sigma: f64,
    pub(crate) min_duration: TimeDelta<T>,
    pub(crate) ongoing_share: f64,
    pub(crate) seed: u64,
}

impl<T: TimeVariable + NumCast + ToPrimitive> Default for TimelineGenConfig<T> {
    fn default() -> Self {
        #[inline]
        fn to_t<T: TimeVariable + NumCast>(v: i64) -> T {
            NumCast::from(v).unwrap_or_else(T::max_value)
        }

        // Day numbers: a career of a few dozen entries starting in 2000.
        Self {
            amount: 40,
            first_start: TimePoint::new(to_t(730_120)),
            present: TimePoint::new(to_t(739_252)),
            mean_gap: TimeDelta::new(to_t(200)),
            duration_mean: TimeDelta::new(to_t(900)),
            duration_sigma: 500.0,
            min_duration: TimeDelta::new(to_t(30)),
            ongoing_share: 0.1,
            seed: 42,
        }
    }
}

impl<T: TimeVariable + NumCast + ToPrimitive> TimelineGenConfig<T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        amount: usize,
        first_start: TimePoint<T>,
        present: TimePoint<T>,
        mean_gap: TimeDelta<T>,
        duration_mean: TimeDelta<T>,
        duration_sigma: f64,
        min_duration: TimeDelta<T>,
        ongoing_share: f64,
        seed: u64,
    ) -> Result<Self, TimelineGenConfigBuildError> {
        if !mean_gap.is_positive() {
            return Err(TimelineGenConfigBuildError::NonPositiveMeanGap);
        }
        if duration_mean.is_negative() || min_duration.is_negative() {
            return Err(TimelineGenConfigBuildError::NegativeDuration);
        }
        if !(0.0..=1.0).contains(&ongoing_share) {
            return Err(TimelineGenConfigBuildError::OngoingShareOutOfRange(
                ongoing_share,
            ));
        }
        if !duration_sigma.is_finite() || duration_sigma < 0.0 {
            return Err(TimelineGenConfigBuildError::InvalidDurationSigma(
                duration_sigma,
            ));
        }
        Ok(Self {
            amount,
            first_start,
            present,
            mean_gap,
            duration_mean,
            duration_sigma,
            min_duration,
            ongoing_share,
            seed,
        })
    }

    #[inline]
    pub fn amount(&self) -> usize {
        self.amount
    }

    #[inline]
    pub fn first_start(&self) -> TimePoint<T> {
        self.first_start
    }

    #[inline]
    pub fn present(&self) -> TimePoint<T> {
        self.present
    }

    #[inline]
    pub fn mean_gap(&self) -> TimeDelta<T> {
        self.mean_gap
    }

    #[inline]
    pub fn duration_mean(&self) -> TimeDelta<T> {
        self.duration_mean
    }

    #[inline]
    pub fn duration_sigma(&self) -> f64 {
        self.duration_sigma
    }

    #[inline]
    pub fn min_duration(&self) -> TimeDelta<T> {
        self.min_duration
    }

    #[inline]
    pub fn ongoing_share(&self) -> f64 {
        self.ongoing_share
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T: TimeVariable + NumCast + ToPrimitive> Display for TimelineGenConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TimelineGenConfig {{ amount: {}, first_start: {}, present: {}, mean_gap: {}, \
             duration_mean: {}, duration_sigma: {:.2}, min_duration: {}, ongoing_share: {:.2}, seed: {} }}",
            self.amount,
            self.first_start,
            self.present,
            self.mean_gap,
            self.duration_mean,
            self.duration_sigma,
            self.min_duration,
            self.ongoing_share,
            self.seed
        )
    }
}

/// Builder for `TimelineGenConfig`.
#[derive(Debug, Clone)]
pub struct TimelineGenConfigBuilder<T: TimeVariable + NumCast + ToPrimitive> {
    amount: Option<usize>,
    first_start: Option<TimePoint<T>>,
    present: Option<TimePoint<T>>,
    mean_gap: TimeDelta<T>,
    duration_mean: TimeDelta<T>,
    duration_sigma: f64,
    min_duration: TimeDelta<T>,
    ongoing_share: f64,
    seed: u64,
}

impl<T: TimeVariable + NumCast + ToPrimitive> Default for TimelineGenConfigBuilder<T> {
    fn default() -> Self {
        let defaults = TimelineGenConfig::<T>::default();
        Self {
            amount: None,
            first_start: None,
            present: None,
            mean_gap: defaults.mean_gap,
            duration_mean: defaults.duration_mean,
            duration_sigma: defaults.duration_sigma,
            min_duration: defaults.min_duration,
            ongoing_share: defaults.ongoing_share,
            seed: defaults.seed,
        }
    }
}

impl<T: TimeVariable + NumCast + ToPrimitive> TimelineGenConfigBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn amount(mut self, v: usize) -> Self {
        self.amount = Some(v);
        self
    }
    #[inline]
    pub fn first_start(mut self, v: TimePoint<T>) -> Self {
        self.first_start = Some(v);
        self
    }
    #[inline]
    pub fn present(mut self, v: TimePoint<T>) -> Self {
        self.present = Some(v);
        self
    }
    #[inline]
    pub fn mean_gap(mut self, v: TimeDelta<T>) -> Self {
        self.mean_gap = v;
        self
    }
    #[inline]
    pub fn duration_mean(mut self, v: TimeDelta<T>) -> Self {
        self.duration_mean = v;
        self
    }
    #[inline]
    pub fn duration_sigma(mut self, v: f64) -> Self {
        self.duration_sigma = v;
        self
    }
    #[inline]
    pub fn min_duration(mut self, v: TimeDelta<T>) -> Self {
        self.min_duration = v;
        self
    }
    #[inline]
    pub fn ongoing_share(mut self, v: f64) -> Self {
        self.ongoing_share = v;
        self
    }
    pub fn random_seed(mut self) -> Self {
        self.seed = rand::rng().random();
        self
    }
    #[inline]
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    pub fn build(self) -> Result<TimelineGenConfig<T>, TimelineGenConfigBuildError> {
        use TimelineGenConfigBuildError::*;
        let amount = self.amount.ok_or(MissingAmount)?;
        let first_start = self.first_start.ok_or(MissingFirstStart)?;
        let present = self.present.ok_or(MissingPresent)?;

        TimelineGenConfig::new(
            amount,
            first_start,
            present,
            self.mean_gap,
            self.duration_mean,
            self.duration_sigma,
            self.min_duration,
            self.ongoing_share,
            self.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_amount_and_bounds() {
        let err = TimelineGenConfigBuilder::<i64>::new().build().unwrap_err();
        assert_eq!(err, TimelineGenConfigBuildError::MissingAmount);

        let err = TimelineGenConfigBuilder::<i64>::new()
            .amount(3)
            .first_start(TimePoint::new(0))
            .build()
            .unwrap_err();
        assert_eq!(err, TimelineGenConfigBuildError::MissingPresent);
    }

    #[test]
    fn test_builder_validates_ranges() {
        let base = TimelineGenConfigBuilder::<i64>::new()
            .amount(3)
            .first_start(TimePoint::new(0))
            .present(TimePoint::new(100));

        assert_eq!(
            base.clone().ongoing_share(1.5).build().unwrap_err(),
            TimelineGenConfigBuildError::OngoingShareOutOfRange(1.5)
        );
        assert_eq!(
            base.clone().mean_gap(TimeDelta::new(0)).build().unwrap_err(),
            TimelineGenConfigBuildError::NonPositiveMeanGap
        );
        assert_eq!(
            base.clone()
                .min_duration(TimeDelta::new(-1))
                .build()
                .unwrap_err(),
            TimelineGenConfigBuildError::NegativeDuration
        );
        assert!(base.build().is_ok());
    }

    #[test]
    fn test_display_mentions_seed() {
        let cfg = TimelineGenConfig::<i64>::default();
        assert!(cfg.to_string().contains("seed: 42"));
    }
}
