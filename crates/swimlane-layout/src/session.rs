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

//! # Render Session
//!
//! A [`RenderSession`] owns everything one chart needs between redraws:
//! the timeline, the layout configuration, the lane assigner, the current
//! theme and width, and the last computed [`TimelineLayout`]. Hosts feed it
//! [`SessionEvent`]s; every event recomputes the layout from scratch and
//! hands the result to the subscribers.
//!
//! Resize notifications usually arrive in bursts. [`ResizeDebouncer`]
//! collapses a burst into the last width once the host has been quiet for
//! a while.

use crate::{
    color::Theme,
    config::LayoutConfig,
    layout::{LayoutError, TimelineLayout, compute_layout},
    lanes::{FirstFitAssigner, LaneAssigner},
};
use std::{
    fmt::Display,
    time::{Duration, Instant},
};
use swimlane_model::timeline::Timeline;
use tracing::{debug, instrument, trace};

/// Handle returned by [`RenderSession::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// The host width changed; `None` means the host reports no width.
    Resize(Option<f64>),
    ThemeChanged(Theme),
}

type Subscriber = Box<dyn FnMut(&TimelineLayout) + Send>;

pub struct RenderSession<A: LaneAssigner<i64> = FirstFitAssigner> {
    timeline: Timeline<i64>,
    config: LayoutConfig,
    assigner: A,
    theme: Theme,
    width: Option<f64>,
    layout: TimelineLayout,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<A: LaneAssigner<i64>> std::fmt::Debug for RenderSession<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderSession")
            .field("entries", &self.timeline.len())
            .field("assigner", &self.assigner.name())
            .field("theme", &self.theme)
            .field("width", &self.width)
            .field("lane_count", &self.layout.lane_count)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<A: LaneAssigner<i64>> RenderSession<A> {
    /// Creates a session and computes the first layout.
    pub fn new(
        timeline: Timeline<i64>,
        config: LayoutConfig,
        assigner: A,
        theme: Theme,
        width: Option<f64>,
    ) -> Result<Self, LayoutError> {
        let layout = compute_layout(&timeline, &config, theme, width, &assigner)?;
        Ok(Self {
            timeline,
            config,
            assigner,
            theme,
            width,
            layout,
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    #[inline]
    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline<i64> {
        &self.timeline
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[inline]
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Registers `callback` to receive every recomputed layout.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&TimelineLayout) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        trace!(%id, "subscribed");
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    /// Applies `event`, recomputes the layout and notifies subscribers.
    ///
    /// On error the previous layout and state stay in place and nobody is
    /// notified.
    #[instrument(level = "debug", skip(self))]
    pub fn handle(&mut self, event: SessionEvent) -> Result<&TimelineLayout, LayoutError> {
        let (theme, width) = match event {
            SessionEvent::Resize(w) => (self.theme, w),
            SessionEvent::ThemeChanged(t) => (t, self.width),
        };
        let layout = compute_layout(&self.timeline, &self.config, theme, width, &self.assigner)?;
        self.theme = theme;
        self.width = width;
        self.layout = layout;

        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.layout);
        }
        debug!(subscribers = self.subscribers.len(), "layout redrawn");
        Ok(&self.layout)
    }

    /// Drops every subscriber.
    pub fn teardown(&mut self) {
        if !self.subscribers.is_empty() {
            debug!(subscribers = self.subscribers.len(), "tearing down render session");
        }
        self.subscribers.clear();
    }
}

impl<A: LaneAssigner<i64>> Drop for RenderSession<A> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Trailing-edge debounce for resize notifications.
///
/// Each [`push`](Self::push) restarts the quiet period; [`poll`](Self::poll)
/// releases the last pushed width once the period has passed. A delay too
/// large to add to `now` leaves the width pending until cancelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(f64, Option<Instant>)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl ResizeDebouncer {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(150);

    #[inline]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push(&mut self, width: f64, now: Instant) {
        self.pending = Some((width, now.checked_add(self.delay)));
    }

    /// The pending width if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        match self.pending {
            Some((width, Some(due))) if now >= due => {
                self.pending = None;
                Some(width)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
