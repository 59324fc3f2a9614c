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

use crate::color::Palette;
use std::{fmt::Display, str::FromStr};

/// Space around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[inline]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Whether bars carry their short title inside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelMode {
    Hidden,
    /// Shown only when the estimated text width plus `pad` fits the bar.
    FitInside { pad: f64 },
}

/// How the date range of an entry is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLabelStyle {
    /// `Jan 2010 – Mar 2014`
    MonthYear,
    /// `2010 – 2014`
    YearOnly,
}

/// Spacing of the labelled axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickPolicy {
    EveryYear,
    /// Every 5 years above a 30 year span, every 2 above 15, else yearly.
    Adaptive,
}

impl TickPolicy {
    /// Years between ticks for a timeline covering `year_span` years.
    pub fn interval(self, year_span: i32) -> i32 {
        match self {
            TickPolicy::EveryYear => 1,
            TickPolicy::Adaptive if year_span > 30 => 5,
            TickPolicy::Adaptive if year_span > 15 => 2,
            TickPolicy::Adaptive => 1,
        }
    }
}

/// The named configurations the site ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Inline CV chart.
    #[default]
    Cv,
    /// Location history on the about page.
    About,
    /// The enlarged chart with labels.
    Expanded,
}

impl Preset {
    pub fn config(self) -> LayoutConfig {
        match self {
            Preset::Cv => LayoutConfig::cv(),
            Preset::About => LayoutConfig::about(),
            Preset::Expanded => LayoutConfig::expanded(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsePresetError(String);

impl Display for ParsePresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown preset '{}', expected cv, about or expanded",
            self.0
        )
    }
}

impl std::error::Error for ParsePresetError {}

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cv" => Ok(Preset::Cv),
            "about" => Ok(Preset::About),
            "expanded" => Ok(Preset::Expanded),
            _ => Err(ParsePresetError(s.to_string())),
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::Cv => write!(f, "cv"),
            Preset::About => write!(f, "about"),
            Preset::Expanded => write!(f, "expanded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutConfigBuildError {
    NonPositiveLaneHeight(f64),
    NegativeLanePad(f64),
    NegativeMinBarWidth(f64),
    NegativeMargin(Margins),
    AxisDoesNotFit { axis_height: f64, bottom: f64 },
    NonPositiveCharWidth(f64),
    NonPositiveFallbackWidth(f64),
}

impl Display for LayoutConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LayoutConfigBuildError::*;
        match self {
            NonPositiveLaneHeight(v) => write!(f, "lane_height {} must be positive", v),
            NegativeLanePad(v) => write!(f, "lane_pad {} must not be negative", v),
            NegativeMinBarWidth(v) => write!(f, "min_bar_width {} must not be negative", v),
            NegativeMargin(m) => write!(
                f,
                "margins must not be negative: top {}, right {}, bottom {}, left {}",
                m.top, m.right, m.bottom, m.left
            ),
            AxisDoesNotFit {
                axis_height,
                bottom,
            } => write!(
                f,
                "axis height {} does not fit into the bottom margin {}",
                axis_height, bottom
            ),
            NonPositiveCharWidth(v) => write!(f, "label_char_width {} must be positive", v),
            NonPositiveFallbackWidth(v) => write!(f, "fallback_width {} must be positive", v),
        }
    }
}

impl std::error::Error for LayoutConfigBuildError {}

/// Geometry and styling of a swim-lane chart.
///
/// Values are in pixels. Obtain one from a preset ([`LayoutConfig::cv`],
/// [`LayoutConfig::about`], [`LayoutConfig::expanded`]) or through
/// [`LayoutConfigBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    lane_height: f64,
    lane_pad: f64,
    axis_height: f64,
    axis_gap: f64,
    min_bar_width: f64,
    margins: Margins,
    label_mode: LabelMode,
    label_char_width: f64,
    label_offset: f64,
    date_style: DateLabelStyle,
    tick_policy: TickPolicy,
    palette: Palette,
    fallback_width: f64,
}

const AXIS_HEIGHT: f64 = 24.0;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::cv()
    }
}

impl LayoutConfig {
    pub fn cv() -> Self {
        Self {
            lane_height: 28.0,
            lane_pad: 4.0,
            axis_height: AXIS_HEIGHT,
            axis_gap: 4.0,
            min_bar_width: 8.0,
            margins: Margins::new(10.0, 20.0, AXIS_HEIGHT + 10.0, 20.0),
            label_mode: LabelMode::Hidden,
            label_char_width: 6.5,
            label_offset: 6.0,
            date_style: DateLabelStyle::MonthYear,
            tick_policy: TickPolicy::EveryYear,
            palette: Palette::default(),
            fallback_width: 600.0,
        }
    }

    pub fn about() -> Self {
        Self {
            date_style: DateLabelStyle::YearOnly,
            tick_policy: TickPolicy::Adaptive,
            ..Self::cv()
        }
    }

    pub fn expanded() -> Self {
        Self {
            lane_height: 36.0,
            margins: Margins::new(16.0, 30.0, AXIS_HEIGHT + 16.0, 30.0),
            label_mode: LabelMode::FitInside { pad: 12.0 },
            ..Self::cv()
        }
    }

    #[inline]
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }

    #[inline]
    pub fn lane_height(&self) -> f64 {
        self.lane_height
    }

    #[inline]
    pub fn lane_pad(&self) -> f64 {
        self.lane_pad
    }

    /// Vertical distance between the tops of two neighbouring lanes.
    #[inline]
    pub fn lane_stride(&self) -> f64 {
        self.lane_height + self.lane_pad
    }

    #[inline]
    pub fn axis_height(&self) -> f64 {
        self.axis_height
    }

    /// Gap between the last lane and the axis.
    #[inline]
    pub fn axis_gap(&self) -> f64 {
        self.axis_gap
    }

    #[inline]
    pub fn min_bar_width(&self) -> f64 {
        self.min_bar_width
    }

    #[inline]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[inline]
    pub fn label_mode(&self) -> LabelMode {
        self.label_mode
    }

    /// Estimated advance of one label character.
    #[inline]
    pub fn label_char_width(&self) -> f64 {
        self.label_char_width
    }

    /// Distance from the bar start to the label start.
    #[inline]
    pub fn label_offset(&self) -> f64 {
        self.label_offset
    }

    #[inline]
    pub fn date_style(&self) -> DateLabelStyle {
        self.date_style
    }

    #[inline]
    pub fn tick_policy(&self) -> TickPolicy {
        self.tick_policy
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Width used when the host reports none.
    #[inline]
    pub fn fallback_width(&self) -> f64 {
        self.fallback_width
    }
}

impl Display for LayoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LayoutConfig {{ lane: {}+{}, margins: {}/{}/{}/{}, labels: {:?}, dates: {:?}, ticks: {:?} }}",
            self.lane_height,
            self.lane_pad,
            self.margins.top,
            self.margins.right,
            self.margins.bottom,
            self.margins.left,
            self.label_mode,
            self.date_style,
            self.tick_policy
        )
    }
}

/// Builder for `LayoutConfig`, starting from a preset.
#[derive(Debug, Clone)]
pub struct LayoutConfigBuilder {
    config: LayoutConfig,
}

impl Default for LayoutConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<LayoutConfig> for LayoutConfigBuilder {
    fn from(config: LayoutConfig) -> Self {
        Self { config }
    }
}

impl From<Preset> for LayoutConfigBuilder {
    fn from(preset: Preset) -> Self {
        Self::from(preset.config())
    }
}

impl LayoutConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::from(LayoutConfig::cv())
    }

    #[inline]
    pub fn lane_height(mut self, v: f64) -> Self {
        self.config.lane_height = v;
        self
    }
    #[inline]
    pub fn lane_pad(mut self, v: f64) -> Self {
        self.config.lane_pad = v;
        self
    }
    #[inline]
    pub fn axis_height(mut self, v: f64) -> Self {
        self.config.axis_height = v;
        self
    }
    #[inline]
    pub fn axis_gap(mut self, v: f64) -> Self {
        self.config.axis_gap = v;
        self
    }
    #[inline]
    pub fn min_bar_width(mut self, v: f64) -> Self {
        self.config.min_bar_width = v;
        self
    }
    #[inline]
    pub fn margins(mut self, v: Margins) -> Self {
        self.config.margins = v;
        self
    }
    #[inline]
    pub fn label_mode(mut self, v: LabelMode) -> Self {
        self.config.label_mode = v;
        self
    }
    #[inline]
    pub fn label_char_width(mut self, v: f64) -> Self {
        self.config.label_char_width = v;
        self
    }
    #[inline]
    pub fn label_offset(mut self, v: f64) -> Self {
        self.config.label_offset = v;
        self
    }
    #[inline]
    pub fn date_style(mut self, v: DateLabelStyle) -> Self {
        self.config.date_style = v;
        self
    }
    #[inline]
    pub fn tick_policy(mut self, v: TickPolicy) -> Self {
        self.config.tick_policy = v;
        self
    }
    #[inline]
    pub fn palette(mut self, v: Palette) -> Self {
        self.config.palette = v;
        self
    }
    #[inline]
    pub fn fallback_width(mut self, v: f64) -> Self {
        self.config.fallback_width = v;
        self
    }

    pub fn build(self) -> Result<LayoutConfig, LayoutConfigBuildError> {
        use LayoutConfigBuildError::*;
        let c = self.config;

        // `!(x > 0.0)` also rejects NaN.
        if !(c.lane_height > 0.0) {
            return Err(NonPositiveLaneHeight(c.lane_height));
        }
        if !(c.lane_pad >= 0.0) {
            return Err(NegativeLanePad(c.lane_pad));
        }
        if !(c.min_bar_width >= 0.0) {
            return Err(NegativeMinBarWidth(c.min_bar_width));
        }
        let m = c.margins;
        if ![m.top, m.right, m.bottom, m.left].iter().all(|v| *v >= 0.0) {
            return Err(NegativeMargin(m));
        }
        if !(c.axis_height >= 0.0) || c.axis_height > m.bottom {
            return Err(AxisDoesNotFit {
                axis_height: c.axis_height,
                bottom: m.bottom,
            });
        }
        if !(c.label_char_width > 0.0) {
            return Err(NonPositiveCharWidth(c.label_char_width));
        }
        if !(c.fallback_width > 0.0) {
            return Err(NonPositiveFallbackWidth(c.fallback_width));
        }
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_match_the_shipped_charts() {
        let cv = LayoutConfig::cv();
        assert_eq!(cv.lane_height(), 28.0);
        assert_eq!(cv.lane_pad(), 4.0);
        assert_eq!(cv.margins(), Margins::new(10.0, 20.0, 34.0, 20.0));
        assert_eq!(cv.label_mode(), LabelMode::Hidden);
        assert_eq!(cv.date_style(), DateLabelStyle::MonthYear);

        let about = LayoutConfig::about();
        assert_eq!(about.date_style(), DateLabelStyle::YearOnly);
        assert_eq!(about.tick_policy(), TickPolicy::Adaptive);
        assert_eq!(about.lane_height(), 28.0);

        let expanded = LayoutConfig::expanded();
        assert_eq!(expanded.lane_height(), 36.0);
        assert_eq!(expanded.lane_stride(), 40.0);
        assert_eq!(expanded.margins(), Margins::new(16.0, 30.0, 40.0, 30.0));
        assert_eq!(expanded.label_mode(), LabelMode::FitInside { pad: 12.0 });
    }

    #[test]
    fn test_presets_pass_validation() {
        for p in [Preset::Cv, Preset::About, Preset::Expanded] {
            assert_eq!(LayoutConfigBuilder::from(p).build().unwrap(), p.config());
        }
    }

    #[test]
    fn test_adaptive_tick_interval() {
        assert_eq!(TickPolicy::Adaptive.interval(31), 5);
        assert_eq!(TickPolicy::Adaptive.interval(30), 2);
        assert_eq!(TickPolicy::Adaptive.interval(16), 2);
        assert_eq!(TickPolicy::Adaptive.interval(15), 1);
        assert_eq!(TickPolicy::EveryYear.interval(80), 1);
    }

    #[test]
    fn test_builder_rejects_bad_geometry() {
        assert_eq!(
            LayoutConfig::builder().lane_height(0.0).build().unwrap_err(),
            LayoutConfigBuildError::NonPositiveLaneHeight(0.0)
        );
        assert_eq!(
            LayoutConfig::builder().lane_pad(-1.0).build().unwrap_err(),
            LayoutConfigBuildError::NegativeLanePad(-1.0)
        );
        assert_eq!(
            LayoutConfig::builder().axis_height(50.0).build().unwrap_err(),
            LayoutConfigBuildError::AxisDoesNotFit {
                axis_height: 50.0,
                bottom: 34.0
            }
        );
        assert!(
            LayoutConfig::builder()
                .lane_height(f64::NAN)
                .build()
                .is_err()
        );
        assert!(
            LayoutConfig::builder()
                .margins(Margins::new(0.0, -1.0, 30.0, 0.0))
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_builder_overrides_preset_fields() {
        let c = LayoutConfigBuilder::from(Preset::About)
            .lane_height(20.0)
            .fallback_width(800.0)
            .build()
            .unwrap();
        assert_eq!(c.lane_height(), 20.0);
        assert_eq!(c.fallback_width(), 800.0);
        assert_eq!(c.date_style(), DateLabelStyle::YearOnly);
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("Expanded".parse::<Preset>().unwrap(), Preset::Expanded);
        assert_eq!(Preset::About.to_string(), "about");
        assert!("modal".parse::<Preset>().is_err());
    }
}
