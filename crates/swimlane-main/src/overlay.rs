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

//! Layout settings read from a TOML file and laid over a preset.
//!
//! ```toml
//! lane_height = 30
//! date_style = "year-only"
//! ticks = "adaptive"
//! label = "fit-inside"
//! label_pad = 10
//!
//! [margins]
//! left = 40
//!
//! [palette.dark]
//! start = "#90caf9"
//! end = "#0d47a1"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use swimlane_layout::{
    color::{ColorStops, Rgb},
    config::{DateLabelStyle, LabelMode, LayoutConfig, LayoutConfigBuilder, Margins, TickPolicy},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyleSetting {
    MonthYear,
    YearOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TickSetting {
    EveryYear,
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelSetting {
    Hidden,
    FitInside,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarginsOverlay {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StopsOverlay {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteOverlay {
    pub light: Option<StopsOverlay>,
    pub dark: Option<StopsOverlay>,
}

/// Every field is optional; absent fields keep the preset's value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverlay {
    pub lane_height: Option<f64>,
    pub lane_pad: Option<f64>,
    pub axis_height: Option<f64>,
    pub axis_gap: Option<f64>,
    pub min_bar_width: Option<f64>,
    pub fallback_width: Option<f64>,
    pub label_char_width: Option<f64>,
    pub label_offset: Option<f64>,
    pub label: Option<LabelSetting>,
    pub label_pad: Option<f64>,
    pub date_style: Option<DateStyleSetting>,
    pub ticks: Option<TickSetting>,
    #[serde(default)]
    pub margins: MarginsOverlay,
    #[serde(default)]
    pub palette: PaletteOverlay,
}

const DEFAULT_LABEL_PAD: f64 = 12.0;

fn stops(overlay: &StopsOverlay) -> Result<ColorStops> {
    Ok(ColorStops::new(
        Rgb::from_hex(&overlay.start)?,
        Rgb::from_hex(&overlay.end)?,
    ))
}

impl LayoutOverlay {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse layout overlay")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid layout file {}", path.display()))
    }

    /// Returns a builder holding `base` with this overlay's fields applied.
    pub fn apply(&self, base: LayoutConfig) -> Result<LayoutConfigBuilder> {
        let m = base.margins();
        let margins = Margins::new(
            self.margins.top.unwrap_or(m.top),
            self.margins.right.unwrap_or(m.right),
            self.margins.bottom.unwrap_or(m.bottom),
            self.margins.left.unwrap_or(m.left),
        );

        let current_pad = match base.label_mode() {
            LabelMode::FitInside { pad } => Some(pad),
            LabelMode::Hidden => None,
        };
        let label_mode = match (self.label, self.label_pad) {
            (Some(LabelSetting::Hidden), _) => LabelMode::Hidden,
            (Some(LabelSetting::FitInside), pad) | (None, pad @ Some(_)) => LabelMode::FitInside {
                pad: pad.or(current_pad).unwrap_or(DEFAULT_LABEL_PAD),
            },
            (None, None) => base.label_mode(),
        };

        let mut palette = *base.palette();
        if let Some(light) = &self.palette.light {
            palette.light = stops(light).context("Invalid light palette")?;
        }
        if let Some(dark) = &self.palette.dark {
            palette.dark = stops(dark).context("Invalid dark palette")?;
        }

        let date_style = match self.date_style {
            Some(DateStyleSetting::MonthYear) => DateLabelStyle::MonthYear,
            Some(DateStyleSetting::YearOnly) => DateLabelStyle::YearOnly,
            None => base.date_style(),
        };
        let ticks = match self.ticks {
            Some(TickSetting::EveryYear) => TickPolicy::EveryYear,
            Some(TickSetting::Adaptive) => TickPolicy::Adaptive,
            None => base.tick_policy(),
        };

        Ok(LayoutConfigBuilder::from(base.clone())
            .lane_height(self.lane_height.unwrap_or(base.lane_height()))
            .lane_pad(self.lane_pad.unwrap_or(base.lane_pad()))
            .axis_height(self.axis_height.unwrap_or(base.axis_height()))
            .axis_gap(self.axis_gap.unwrap_or(base.axis_gap()))
            .min_bar_width(self.min_bar_width.unwrap_or(base.min_bar_width()))
            .fallback_width(self.fallback_width.unwrap_or(base.fallback_width()))
            .label_char_width(self.label_char_width.unwrap_or(base.label_char_width()))
            .label_offset(self.label_offset.unwrap_or(base.label_offset()))
            .label_mode(label_mode)
            .date_style(date_style)
            .tick_policy(ticks)
            .margins(margins)
            .palette(palette))
    }
}
