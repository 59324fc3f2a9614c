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

//! Bar colors.
//!
//! Bars are shaded along a ramp between two color stops, interpolated in HSL
//! space along the shorter hue arc. The first entry gets the start stop and
//! the last entry the end stop.

use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid color '{}', expected #rgb or #rrggbb",
            self.input
        )
    }
}

impl std::error::Error for ColorParseError {}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or the short `#rgb` form.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError::new(input);
        let digits = input.trim().strip_prefix('#').ok_or_else(err)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(err()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hue in degrees, saturation and lightness in `[0, 1]`.
///
/// The hue of an achromatic color is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: Option<f64>,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Saturation, or `None` for black and white where it carries no
    /// information.
    #[inline]
    pub fn saturation(&self) -> Option<f64> {
        (self.l > 0.0 && self.l < 1.0).then_some(self.s)
    }
}

impl From<Rgb> for Hsl {
    fn from(c: Rgb) -> Self {
        let r = c.r as f64 / 255.0;
        let g = c.g as f64 / 255.0;
        let b = c.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;
        if d == 0.0 {
            return Hsl { h: None, s: 0.0, l };
        }
        let s = if l < 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl {
            h: Some(h * 60.0),
            s,
            l,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(c: Hsl) -> Self {
        let h = c.h.unwrap_or(0.0).rem_euclid(360.0);
        let s = c.s.clamp(0.0, 1.0);
        let l = c.l.clamp(0.0, 1.0);
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        let channel = |hue: f64| -> u8 {
            let hue = hue.rem_euclid(360.0);
            let v = if hue < 60.0 {
                m1 + (m2 - m1) * hue / 60.0
            } else if hue < 180.0 {
                m2
            } else if hue < 240.0 {
                m1 + (m2 - m1) * (240.0 - hue) / 60.0
            } else {
                m1
            };
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(channel(h + 120.0), channel(h), channel(h - 120.0))
    }
}

/// Interpolates between two colors in HSL space at `t` in `[0, 1]`.
///
/// Hues travel the shorter arc. An achromatic endpoint takes the hue of
/// the other one; black and white also take its saturation.
pub fn interpolate_hsl(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let (ha, hb) = (Hsl::from(a), Hsl::from(b));
    let h = match (ha.h, hb.h) {
        (Some(x), Some(y)) => {
            let mut d = y - x;
            if d.abs() > 180.0 {
                d -= 360.0 * (d / 360.0).round();
            }
            Some(x + d * t)
        }
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    };
    let lerp = |x: f64, y: f64| x + (y - x) * t;
    let s = match (ha.saturation(), hb.saturation()) {
        (Some(x), Some(y)) => lerp(x, y),
        (Some(x), None) | (None, Some(x)) => x,
        (None, None) => 0.0,
    };
    Hsl {
        h,
        s,
        l: lerp(ha.l, hb.l),
    }
    .into()
}

/// Light or dark page scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseThemeError(String);

impl Display for ParseThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown theme '{}', expected light or dark", self.0)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Start and end color of a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorStops {
    pub start: Rgb,
    pub end: Rgb,
}

impl ColorStops {
    #[inline]
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }
}

/// Color stops per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    pub light: ColorStops,
    pub dark: ColorStops,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: ColorStops::new(Rgb::new(0xf4, 0xa5, 0xa5), Rgb::new(0x7b, 0x1a, 0x1a)),
            dark: ColorStops::new(Rgb::new(0xef, 0x9a, 0x9a), Rgb::new(0xc0, 0x39, 0x2b)),
        }
    }
}

impl Palette {
    #[inline]
    pub fn stops(&self, theme: Theme) -> ColorStops {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

/// Colors for `count` bars drawn in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRamp {
    stops: ColorStops,
    count: usize,
}

impl ColorRamp {
    #[inline]
    pub fn new(stops: ColorStops, count: usize) -> Self {
        Self { stops, count }
    }

    /// Position of bar `index` along the ramp.
    #[inline]
    pub fn position(&self, index: usize) -> f64 {
        if self.count <= 1 {
            0.0
        } else {
            index as f64 / (self.count - 1) as f64
        }
    }

    pub fn color(&self, index: usize) -> Rgb {
        interpolate_hsl(self.stops.start, self.stops.end, self.position(index))
    }
}
