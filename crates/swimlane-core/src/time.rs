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

//! # Time
//!
//! Newtypes for the time axis of a timeline. A `TimePoint` is an instant
//! (a day number for calendar timelines), a `TimeDelta` is the signed
//! distance between two instants, and a `TimeInterval` is a half-open
//! `[start, end)` span of instants.
//!
//! Operator impls panic on overflow. Values read from outside go through
//! `checked_add` or `saturating_add`.

use crate::primitives::Interval;
use num_traits::{PrimInt, Signed};
use std::{
    fmt::Display,
    ops::{Add, Sub},
};

/// An instant on the time axis.
///
/// ```
/// use swimlane_core::time::TimePoint;
///
/// let tp = TimePoint::new(42);
/// assert_eq!(tp.value(), 42);
/// assert_eq!(tp.to_string(), "42");
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimePoint<T: PrimInt>(T);

impl<T: PrimInt> TimePoint<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        TimePoint(value)
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }
}

impl<T: PrimInt + Signed> TimePoint<T> {
    #[inline]
    pub fn checked_add(self, delta: TimeDelta<T>) -> Option<Self> {
        self.0.checked_add(&delta.0).map(TimePoint)
    }

    #[inline]
    pub fn saturating_add(self, delta: TimeDelta<T>) -> Self {
        TimePoint(self.0.saturating_add(delta.0))
    }

    /// The half-open span `[self, self + len)`; `None` for a negative
    /// length or when the end overflows.
    ///
    /// ```
    /// use swimlane_core::time::{TimeDelta, TimePoint};
    ///
    /// let span = TimePoint::new(10).span_of(TimeDelta::new(5)).unwrap();
    /// assert_eq!(span.end().value(), 15);
    /// assert!(TimePoint::new(10).span_of(TimeDelta::new(-1)).is_none());
    /// ```
    pub fn span_of(self, len: TimeDelta<T>) -> Option<TimeInterval<T>> {
        if len.is_negative() {
            return None;
        }
        self.checked_add(len).and_then(|end| Interval::try_new(self, end))
    }
}

impl<T: PrimInt> Default for TimePoint<T> {
    #[inline]
    fn default() -> Self {
        TimePoint(T::zero())
    }
}

impl<T: PrimInt + Display> Display for TimePoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: PrimInt> From<T> for TimePoint<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimePoint(v)
    }
}

/// The signed distance between two [`TimePoint`]s.
///
/// ```
/// use swimlane_core::time::{TimeDelta, TimePoint};
///
/// let delta: TimeDelta<i32> = TimePoint::new(20) - TimePoint::new(10);
/// assert_eq!(delta, TimeDelta::new(10));
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeDelta<T: PrimInt + Signed>(T);

impl<T: PrimInt + Signed> TimeDelta<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub fn zero() -> Self {
        Self(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == T::zero()
    }
}

impl<T: PrimInt + Signed> Default for TimeDelta<T> {
    #[inline]
    fn default() -> Self {
        TimeDelta::zero()
    }
}

impl<T: PrimInt + Signed + Display> Display for TimeDelta<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl<T: PrimInt + Signed> From<T> for TimeDelta<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimeDelta(v)
    }
}

impl<T: PrimInt + Signed> Add<TimeDelta<T>> for TimePoint<T> {
    type Output = TimePoint<T>;

    #[inline]
    fn add(self, rhs: TimeDelta<T>) -> Self::Output {
        self.checked_add(rhs)
            .expect("overflow in TimePoint + TimeDelta")
    }
}

impl<T: PrimInt + Signed> Sub<TimePoint<T>> for TimePoint<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn sub(self, rhs: TimePoint<T>) -> Self::Output {
        TimeDelta(
            self.0
                .checked_sub(&rhs.0)
                .expect("overflow in TimePoint - TimePoint"),
        )
    }
}

/// A half-open span of instants, `[start, end)`.
///
/// ```
/// use swimlane_core::time::{TimeDelta, TimeInterval, TimePoint};
///
/// let span: TimeInterval<i64> = TimeInterval::new(TimePoint::new(10), TimePoint::new(20));
/// assert_eq!(span.duration(), TimeDelta::new(10));
/// assert_eq!(span.to_string(), "[10, 20)");
/// ```
pub type TimeInterval<T> = Interval<TimePoint<T>>;

impl<T: PrimInt + Signed> Interval<TimePoint<T>> {
    #[inline]
    pub fn duration(&self) -> TimeDelta<T> {
        self.end() - self.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_point_from_raw_value() {
        let tp: TimePoint<i32> = 42.into();
        assert_eq!(tp.value(), 42);
        assert_eq!(TimePoint::<i64>::default().value(), 0);
    }

    #[test]
    fn test_delta_display_is_signed() {
        assert_eq!(TimeDelta::new(-10).to_string(), "-10");
        assert_eq!(TimeDelta::new(7).to_string(), "+7");
    }

    #[test]
    fn test_delta_sign_queries() {
        assert!(TimeDelta::new(-1).is_negative());
        assert!(TimeDelta::new(3).is_positive());
        assert!(TimeDelta::<i64>::zero().is_zero());
        assert!(!TimeDelta::<i64>::zero().is_positive());
    }

    #[test]
    fn test_point_arithmetic() {
        let tp = TimePoint::new(10i64) + TimeDelta::new(5);
        assert_eq!(tp, TimePoint::new(15));
        assert_eq!(tp - TimePoint::new(20), TimeDelta::new(-5));
    }

    #[test]
    fn test_checked_and_saturating_add_at_the_limit() {
        let tp = TimePoint::new(i32::MAX);
        assert!(tp.checked_add(TimeDelta::new(1)).is_none());
        assert_eq!(tp.saturating_add(TimeDelta::new(1)).value(), i32::MAX);
    }

    #[test]
    #[should_panic(expected = "overflow in TimePoint + TimeDelta")]
    fn test_add_panics_on_overflow() {
        let _ = TimePoint::new(i8::MAX) + TimeDelta::new(1);
    }

    #[test]
    fn test_reversed_interval_is_rejected() {
        assert!(TimeInterval::try_new(TimePoint::new(20i64), TimePoint::new(10)).is_none());
    }

    #[test]
    fn test_span_of_zero_length() {
        let span = TimePoint::new(3i64).span_of(TimeDelta::zero()).unwrap();
        assert!(span.is_empty());
        assert!(span.duration().is_zero());
    }
}
