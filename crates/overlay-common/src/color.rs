//! RGB color parsing, HSL interpolation, and KML color formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// An opaque RGB color. Alpha is applied at formatting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string.
    pub fn from_hex(s: &str) -> OverlayResult<Self> {
        let hex = s.trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(OverlayError::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| OverlayError::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Look up a CSS-style color name.
    pub fn named(name: &str) -> Option<Self> {
        let (r, g, b) = match name.to_lowercase().as_str() {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "lime" => (0, 255, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "cyan" => (0, 255, 255),
            "magenta" => (255, 0, 255),
            "orange" => (255, 165, 0),
            "purple" => (128, 0, 128),
            "gray" | "grey" => (128, 128, 128),
            _ => return None,
        };
        Some(Self { r, g, b })
    }

    /// Convert to HSL (hue in degrees 0..360, saturation and lightness 0..1).
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    /// Interpolate toward `other` in HSL space.
    ///
    /// Hue is interpolated numerically, so a blue-to-green ramp sweeps
    /// through cyan rather than fading through gray.
    pub fn lerp_hsl(self, other: Rgb, t: f64) -> Rgb {
        self.to_hsl().lerp(other.to_hsl(), t).to_rgb()
    }

    /// Format as a KML color: `aabbggrr`, lowercase hex.
    pub fn kml_color(self, alpha: u8) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", alpha, self.b, self.g, self.r)
    }

    /// Format as a `#rrggbb` hex string.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(color) = Rgb::named(s) {
            return Ok(color);
        }
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// A color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0..360.
    pub h: f64,
    /// Saturation, 0..1.
    pub s: f64,
    /// Lightness, 0..1.
    pub l: f64,
}

impl Hsl {
    /// Linear interpolation of all three components.
    pub fn lerp(self, other: Hsl, t: f64) -> Hsl {
        let t = t.clamp(0.0, 1.0);
        Hsl {
            h: self.h + (other.h - self.h) * t,
            s: self.s + (other.s - self.s) * t,
            l: self.l + (other.l - self.l) * t,
        }
    }

    /// Convert back to RGB.
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0.0 {
            let v = (self.l * 255.0).round() as u8;
            return Rgb::new(v, v, v);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let h = self.h / 360.0;

        let to_channel = |v: f64| (hue_to_rgb(p, q, v) * 255.0).round() as u8;
        Rgb::new(
            to_channel(h + 1.0 / 3.0),
            to_channel(h),
            to_channel(h - 1.0 / 3.0),
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
