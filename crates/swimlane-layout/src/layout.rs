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

//! # Chart Geometry
//!
//! Turns a [`Timeline`] into the pixel geometry of a swim-lane chart:
//! one bar per entry, year grid lines, labelled axis ticks and the
//! "present" marker. Lanes come from a [`LaneAssigner`]; nothing here
//! touches a drawing surface.
//!
//! Coordinates of bars, grid lines, ticks and the present marker are
//! relative to the plotting area, whose top-left corner sits at
//! `(margins.left, margins.top)` in the full chart.

use crate::{
    color::{ColorRamp, Rgb, Theme},
    config::{LabelMode, LayoutConfig, Margins},
    label::{date_range_label, estimate_text_width},
    lanes::{LaneAssigner, LaneError},
    scale::TimeScale,
};
use std::fmt::Display;
use swimlane_core::date::{Day, year_of, year_start, year_starts};
use swimlane_model::{id::EntryId, timeline::Timeline};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    Lanes(LaneError<i64>),
    /// The margins leave no room for the plotting area.
    TooNarrow { width: f64, margins: f64 },
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Lanes(e) => write!(f, "Lane assignment failed: {}", e),
            LayoutError::TooNarrow { width, margins } => write!(
                f,
                "Chart width {} leaves no room inside horizontal margins of {}",
                width, margins
            ),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Lanes(e) => Some(e),
            LayoutError::TooNarrow { .. } => None,
        }
    }
}

impl From<LaneError<i64>> for LayoutError {
    fn from(err: LaneError<i64>) -> Self {
        LayoutError::Lanes(err)
    }
}

/// Hover text of a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub title: String,
    pub dates: String,
}

/// Text drawn inside a bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub text: String,
    pub x: f64,
    /// Vertical center of the lane.
    pub y: f64,
}

/// One entry drawn as a rounded rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub id: EntryId,
    pub lane: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub label: Option<BarLabel>,
    pub tooltip: Tooltip,
    /// Fragment of the entry in the detail list.
    pub anchor: String,
}

/// Vertical line at a year boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub day: Day,
    pub x: f64,
}

/// Labelled axis tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub year: i32,
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub width: f64,
    pub height: f64,
    pub inner_width: f64,
    pub margins: Margins,
    pub lane_count: usize,
    /// Height of the lane block; grid lines and the present marker span it.
    pub lanes_height: f64,
    pub axis_y: f64,
    pub present_x: f64,
    pub bars: Vec<Bar>,
    pub grid_lines: Vec<GridLine>,
    pub ticks: Vec<Tick>,
}

impl TimelineLayout {
    fn empty(width: f64, inner_width: f64, config: &LayoutConfig) -> Self {
        let margins = config.margins();
        Self {
            width,
            height: margins.vertical(),
            inner_width,
            margins,
            lane_count: 0,
            lanes_height: 0.0,
            axis_y: config.axis_gap(),
            present_x: inner_width,
            bars: Vec::new(),
            grid_lines: Vec::new(),
            ticks: Vec::new(),
        }
    }

    #[inline]
    pub fn bar(&self, id: EntryId) -> Option<&Bar> {
        self.bars.iter().find(|b| b.id == id)
    }
}

/// Resolves the chart width: the reported width when positive, otherwise
/// the configured fallback.
#[inline]
pub fn effective_width(config: &LayoutConfig, width: Option<f64>) -> f64 {
    width
        .filter(|w| *w > 0.0)
        .unwrap_or_else(|| config.fallback_width())
}

/// Computes the chart geometry for `timeline`.
///
/// Lanes are recomputed from scratch on every call. An empty timeline
/// produces a chart with no bars and no axis.
#[instrument(level = "debug", skip_all, fields(entries = timeline.len(), assigner = assigner.name()))]
pub fn compute_layout<A: LaneAssigner<i64>>(
    timeline: &Timeline<i64>,
    config: &LayoutConfig,
    theme: Theme,
    width: Option<f64>,
    assigner: &A,
) -> Result<TimelineLayout, LayoutError> {
    let width = effective_width(config, width);
    let margins = config.margins();
    let inner_width = width - margins.horizontal();
    if inner_width <= 0.0 {
        return Err(LayoutError::TooNarrow {
            width,
            margins: margins.horizontal(),
        });
    }

    let present = timeline.present();
    let lanes = assigner.assign(timeline.entries(), present)?;
    let Some(domain) = timeline.domain() else {
        return Ok(TimelineLayout::empty(width, inner_width, config));
    };

    let scale = TimeScale::new(domain, inner_width);
    let stride = config.lane_stride();
    let lanes_height = lanes.lane_count() as f64 * stride;
    let ramp = ColorRamp::new(config.palette().stops(theme), timeline.len());

    let bars: Vec<Bar> = timeline
        .iter()
        .zip(lanes.iter())
        .enumerate()
        .map(|(i, (entry, placement))| {
            let x = scale.map(placement.span().start());
            let width = scale.extent(placement.span()).max(config.min_bar_width());
            let y = placement.lane() as f64 * stride;
            let label = match config.label_mode() {
                LabelMode::Hidden => None,
                LabelMode::FitInside { pad } => {
                    let text = entry.info().short_title();
                    let fits = estimate_text_width(text, config.label_char_width()) + pad <= width;
                    fits.then(|| BarLabel {
                        text: text.to_string(),
                        x: x + config.label_offset(),
                        y: y + config.lane_height() / 2.0,
                    })
                }
            };
            Bar {
                id: entry.id(),
                lane: placement.lane(),
                x,
                y,
                width,
                height: config.lane_height(),
                color: ramp.color(i),
                label,
                tooltip: Tooltip {
                    title: entry.title().to_string(),
                    dates: date_range_label(config.date_style(), entry.start(), entry.end()),
                },
                anchor: format!("target_{i}"),
            }
        })
        .collect();

    let grid_lines = year_starts(domain)
        .into_iter()
        .map(|day| GridLine {
            day,
            x: scale.map(day),
        })
        .collect();

    let ticks = axis_ticks(timeline, config, &scale);

    debug!(
        lanes = lanes.lane_count(),
        bars = bars.len(),
        width,
        "layout computed"
    );

    Ok(TimelineLayout {
        width,
        height: lanes_height + margins.vertical(),
        inner_width,
        margins,
        lane_count: lanes.lane_count(),
        lanes_height,
        axis_y: lanes_height + config.axis_gap(),
        present_x: scale.map(present),
        bars,
        grid_lines,
        ticks,
    })
}

/// Year ticks on the domain, both ends included. The year of the present
/// boundary is labelled `Present`.
fn axis_ticks(timeline: &Timeline<i64>, config: &LayoutConfig, scale: &TimeScale<i64>) -> Vec<Tick> {
    let domain = scale.domain();
    let (Some(first), Some(last)) = (year_of(domain.start()), year_of(domain.end())) else {
        return Vec::new();
    };
    let present_year = year_of(timeline.present());
    let span = match (present_year, timeline.earliest_start().and_then(year_of)) {
        (Some(p), Some(s)) => p - s,
        _ => last - first,
    };
    let interval = config.tick_policy().interval(span).max(1);

    (first..=last)
        .filter(|y| y.rem_euclid(interval) == 0)
        .filter_map(|y| year_start(y).map(|d| (y, d)))
        .filter(|(_, d)| domain.start() <= *d && *d <= domain.end())
        .map(|(year, day)| Tick {
            year,
            x: scale.map(day),
            label: if Some(year) == present_year {
                "Present".to_string()
            } else {
                year.to_string()
            },
        })
        .collect()
}
