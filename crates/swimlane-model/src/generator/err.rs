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

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum TimelineGenConfigBuildError {
    MissingAmount,
    MissingFirstStart,
    MissingPresent,
    NonPositiveMeanGap,
    NegativeDuration,
    OngoingShareOutOfRange(f64),
    InvalidDurationSigma(f64),
}

impl Display for TimelineGenConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TimelineGenConfigBuildError::*;
        match self {
            MissingAmount => write!(f, "Missing amount"),
            MissingFirstStart => write!(f, "Missing first_start"),
            MissingPresent => write!(f, "Missing present"),
            NonPositiveMeanGap => write!(f, "mean_gap must be positive"),
            NegativeDuration => write!(f, "durations must not be negative"),
            OngoingShareOutOfRange(v) => {
                write!(f, "ongoing_share {} is outside [0, 1]", v)
            }
            InvalidDurationSigma(v) => {
                write!(f, "duration_sigma {} must be finite and non-negative", v)
            }
        }
    }
}

impl std::error::Error for TimelineGenConfigBuildError {}
