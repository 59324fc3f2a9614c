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

//! # Core Primitives
//!
//! The half-open [`Interval`] every timeline span is built on.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// A half-open interval `[start, end)`.
///
/// The start is inclusive and the end exclusive, so two intervals where one
/// ends exactly where the other begins do not overlap. Unlike a range, an
/// `Interval` can never be reversed: `start <= end` holds for every value.
///
/// # Examples
///
/// ```
/// use swimlane_core::primitives::Interval;
///
/// let interval = Interval::new(1, 5);
/// assert_eq!(interval.start(), 1);
/// assert_eq!(interval.end(), 5);
/// assert!(interval.contains(3));
/// assert!(!interval.contains(5));
/// assert_eq!(interval.length(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start_inclusive: T,
    end_exclusive: T,
}

impl<T> Interval<T> {
    /// Creates a new half-open interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end < start` or the bounds are not comparable. Use
    /// [`Interval::try_new`] for bounds that come from user data.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_core::primitives::Interval;
    ///
    /// let interval = Interval::new(3, 3);
    /// assert!(interval.is_empty());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self
    where
        T: PartialOrd + Copy,
    {
        Self::try_new(start, end).expect("Interval::new: end precedes start")
    }

    /// Creates a new interval, returning `None` if `end < start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_core::primitives::Interval;
    ///
    /// assert!(Interval::try_new(1, 5).is_some());
    /// assert!(Interval::try_new(5, 5).is_some());
    /// assert!(Interval::try_new(5, 1).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self>
    where
        T: PartialOrd + Copy,
    {
        match start.partial_cmp(&end)? {
            Ordering::Greater => None,
            _ => Some(Self {
                start_inclusive: start,
                end_exclusive: end,
            }),
        }
    }

    #[inline]
    pub fn start(&self) -> T
    where
        T: Copy,
    {
        self.start_inclusive
    }

    #[inline]
    pub fn end(&self) -> T
    where
        T: Copy,
    {
        self.end_exclusive
    }

    /// Returns `true` if the interval has no length.
    #[inline]
    pub fn is_empty(&self) -> bool
    where
        T: PartialEq,
    {
        self.start_inclusive == self.end_exclusive
    }

    /// Returns `true` if `x` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, x: T) -> bool
    where
        T: PartialOrd,
    {
        x >= self.start_inclusive && x < self.end_exclusive
    }

    /// Checks if this interval precedes another interval.
    ///
    /// An interval precedes another if its end is less than or equal to
    /// the other interval's start. Touching intervals precede each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_core::primitives::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert!(a.precedes(&Interval::new(5, 10)));
    /// assert!(a.precedes(&Interval::new(6, 10)));
    /// assert!(!a.precedes(&Interval::new(4, 8)));
    /// ```
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        self.end() <= other.start()
    }

    /// Checks if this interval shares at least one point with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_core::primitives::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert!(a.intersects(&Interval::new(4, 6)));
    /// assert!(!a.intersects(&Interval::new(5, 7)));
    /// assert!(!a.intersects(&Interval::new(0, 1)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        let start = if self.start_inclusive > other.start_inclusive {
            self.start_inclusive
        } else {
            other.start_inclusive
        };
        let end = if self.end_exclusive < other.end_exclusive {
            self.end_exclusive
        } else {
            other.end_exclusive
        };
        start < end
    }

    /// Checks if neither interval precedes the other.
    ///
    /// This is the overlap relation used for lane packing. It differs from
    /// [`Interval::intersects`] only for zero-length intervals: an empty
    /// interval strictly inside another overlaps it, one sitting on a bound
    /// does not.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_core::primitives::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.overlaps(&Interval::new(5, 5)));
    /// assert!(!a.intersects(&Interval::new(5, 5)));
    /// assert!(!a.overlaps(&Interval::new(10, 10)));
    /// assert!(!a.overlaps(&Interval::new(10, 20)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        !(self.precedes(other) || other.precedes(self))
    }

    /// Returns `end - start`.
    #[inline]
    pub fn length(&self) -> <T as Sub>::Output
    where
        T: Sub + Copy,
    {
        self.end_exclusive - self.start_inclusive
    }
}

impl<T: Default> Default for Interval<T> {
    #[inline]
    fn default() -> Self {
        Self {
            start_inclusive: T::default(),
            end_exclusive: T::default(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    /// Formats the interval as `[start, end)`.
    ///
    /// ```
    /// use swimlane_core::primitives::Interval;
    ///
    /// assert_eq!(format!("{}", Interval::new(1, 5)), "[1, 5)");
    /// ```
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_reversed_bounds() {
        assert!(Interval::try_new(5i32, 3i32).is_none());
        let i = Interval::try_new(-4i64, 9i64).unwrap();
        assert_eq!(i.start(), -4);
        assert_eq!(i.end(), 9);
    }

    #[test]
    #[should_panic(expected = "end precedes start")]
    fn test_new_panics_on_reversed_bounds() {
        let _ = Interval::new(10, 2);
    }

    #[test]
    fn test_try_new_rejects_nan() {
        assert!(Interval::try_new(f64::NAN, 1.0).is_none());
    }

    #[test]
    fn test_zero_length_interval_contains_nothing() {
        let i = Interval::new(7, 7);
        assert!(i.is_empty());
        assert!(!i.contains(7));
        assert_eq!(i.length(), 0);
    }

    #[test]
    fn test_adjacent_intervals_do_not_intersect() {
        let a = Interval::new(0, 10);
        let b = Interval::new(10, 20);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));
    }

    #[test]
    fn test_nested_intervals_intersect() {
        let outer = Interval::new(0, 100);
        let inner = Interval::new(40, 60);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_zero_length_inside_other_does_not_intersect() {
        // [5, 5) covers no point, so it never intersects anything.
        let a = Interval::new(0, 10);
        let b = Interval::new(5, 5);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_overlaps_is_symmetric_and_excludes_touching() {
        let a = Interval::new(0, 10);
        let b = Interval::new(10, 20);
        let c = Interval::new(9, 12);
        assert!(!a.overlaps(&b) && !b.overlaps(&a));
        assert!(a.overlaps(&c) && c.overlaps(&a));
        assert!(b.overlaps(&c) && c.overlaps(&b));
    }

    #[test]
    fn test_overlaps_with_empty_intervals() {
        let a = Interval::new(0, 10);
        assert!(a.overlaps(&Interval::new(3, 3)));
        assert!(!a.overlaps(&Interval::new(0, 0)));
        assert!(!Interval::new(4, 4).overlaps(&Interval::new(4, 4)));
    }

    #[test]
    fn test_default_is_empty() {
        let i: Interval<i32> = Interval::default();
        assert!(i.is_empty());
    }
}
