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

//! # Swimlane Layout
//!
//! Lane assignment and chart geometry for swim-lane timelines.
//!
//! - **`lanes`**: the lane assigners. Entries in start order are packed into
//!   the fewest lanes such that entries sharing a lane never overlap.
//! - **`config`**: chart geometry and styling, with the presets the site
//!   ships (`cv`, `about`, `expanded`).
//! - **`layout`**: bars, grid lines, ticks and the present marker in pixels.
//! - **`session`**: a render session that recomputes on resize and theme
//!   changes and notifies its subscribers.

pub mod color;
pub mod config;
pub mod label;
pub mod lanes;
pub mod layout;
pub mod scale;
pub mod session;

pub mod prelude {
    pub use crate::color::{ColorRamp, ColorStops, Palette, Rgb, Theme};
    pub use crate::config::{
        DateLabelStyle, LabelMode, LayoutConfig, LayoutConfigBuildError, LayoutConfigBuilder,
        Margins, Preset, TickPolicy,
    };
    pub use crate::lanes::{
        FirstFitAssigner, HeapAssigner, LaneAssigner, LaneAssignment, LaneError, Placed,
        Placement, UnsortedInputError, assign_lanes, max_overlap,
    };
    pub use crate::layout::{
        Bar, BarLabel, GridLine, LayoutError, Tick, TimelineLayout, Tooltip, compute_layout,
    };
    pub use crate::scale::TimeScale;
    pub use crate::session::{RenderSession, ResizeDebouncer, SessionEvent, SubscriptionId};
}
