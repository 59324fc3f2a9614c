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

//! # Swimlane Model
//!
//! The data model of a swim-lane timeline, built on the typed time
//! primitives of `swimlane-core`.
//!
//! - **`Entry<T>`**: one dated record (a job, a degree, a residency) with a
//!   start, an end that may be "ongoing", and display information.
//! - **`EntryRecord`**: the raw JSON shape of a record in site data files.
//! - **`Timeline<T>`**: validated entries in chronological order together
//!   with the "present" boundary ongoing entries run up to. Built with a
//!   `TimelineBuilder` or from raw records.
//! - **`TimelineGenerator`**: seeded synthetic timelines.
//!
//! Lane assignment and layout live in `swimlane-layout`.

pub mod entry;
pub mod err;
pub mod generator;
pub mod id;
pub mod record;
pub mod timeline;

pub mod prelude {
    pub use crate::entry::{Entry, EntryEnd, EntryInfo, EntryKind, RawSpan, Spanned};
    pub use crate::err::{InvalidIntervalError, RecordError, TimelineBuildError};
    pub use crate::generator::{
        TimelineGenConfig, TimelineGenConfigBuildError, TimelineGenConfigBuilder,
        TimelineGenerator,
    };
    pub use crate::id::EntryId;
    pub use crate::record::EntryRecord;
    pub use crate::timeline::{Timeline, TimelineBuilder, TimelineStats};
}
