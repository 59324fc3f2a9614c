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

use swimlane_core::{
    TimeVariable,
    time::{TimeInterval, TimePoint},
};

/// Linear map from a time domain onto `[0, width]` pixels.
///
/// Points outside the domain extrapolate. A zero-length domain maps every
/// point to `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale<T: TimeVariable> {
    domain: TimeInterval<T>,
    width: f64,
}

impl<T: TimeVariable> TimeScale<T> {
    #[inline]
    pub fn new(domain: TimeInterval<T>, width: f64) -> Self {
        Self { domain, width }
    }

    #[inline]
    pub fn domain(&self) -> TimeInterval<T> {
        self.domain
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn map(&self, t: TimePoint<T>) -> f64 {
        let start = self.domain.start().value().to_f64().unwrap_or(0.0);
        let end = self.domain.end().value().to_f64().unwrap_or(0.0);
        let span = end - start;
        if span <= 0.0 {
            return 0.0;
        }
        let v = t.value().to_f64().unwrap_or(start);
        (v - start) / span * self.width
    }

    /// Pixel extent of a span.
    #[inline]
    pub fn extent(&self, span: TimeInterval<T>) -> f64 {
        self.map(span.end()) - self.map(span.start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(a: i64, b: i64, w: f64) -> TimeScale<i64> {
        TimeScale::new(TimeInterval::new(TimePoint::new(a), TimePoint::new(b)), w)
    }

    #[test]
    fn test_maps_domain_onto_range() {
        let s = scale(100, 200, 500.0);
        assert_eq!(s.map(TimePoint::new(100)), 0.0);
        assert_eq!(s.map(TimePoint::new(150)), 250.0);
        assert_eq!(s.map(TimePoint::new(200)), 500.0);
        assert_eq!(s.map(TimePoint::new(220)), 600.0);
        assert_eq!(
            s.extent(TimeInterval::new(TimePoint::new(120), TimePoint::new(140))),
            100.0
        );
    }

    #[test]
    fn test_empty_domain_maps_to_zero() {
        let s = scale(5, 5, 300.0);
        assert_eq!(s.map(TimePoint::new(5)), 0.0);
        assert_eq!(s.map(TimePoint::new(9)), 0.0);
    }
}
