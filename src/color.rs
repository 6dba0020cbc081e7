//! Color value type: hex parsing, HSL conversion, WCAG contrast math.
//!
//! Every color in the token system is an 8-bit RGB triple. Shade derivation
//! and the accessibility checks both work in terms of HSL lightness and
//! WCAG relative luminance, so those conversions live here too.

use std::fmt;
use std::str::FromStr;

/// Errors from parsing a color value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColorError {
    #[error("color must be in #RRGGBB form, got {0:?}")]
    BadLength(String),
    #[error("color contains a non-hex digit: {0:?}")]
    BadDigit(String),
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An opaque 8-bit RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from raw channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string. The leading `#` is optional and hex
    /// digits are case-insensitive.
    pub fn from_hex(s: &str) -> Result<Self, InvalidColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(InvalidColorError::BadLength(s.to_string()));
        }
        let parse_pair = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| InvalidColorError::BadDigit(s.to_string()))
        };
        Ok(Color {
            r: parse_pair(0..2)?,
            g: parse_pair(2..4)?,
            b: parse_pair(4..6)?,
        })
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL. Hue is in degrees `[0, 360)`, saturation and
    /// lightness in `[0, 1]`.
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
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } * 60.0;

        Hsl { h, s, l }
    }

    /// The HSL lightness channel, in `[0, 1]`.
    #[inline]
    pub fn lightness(self) -> f64 {
        self.to_hsl().l
    }

    /// WCAG 2.x relative luminance, in `[0, 1]`.
    pub fn relative_luminance(self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio between two colors, in `[1, 21]`.
    pub fn contrast_ratio(self, other: Color) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = InvalidColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

// ---------------------------------------------------------------------------
// Hsl
// ---------------------------------------------------------------------------

/// A color in HSL space. Intermediate representation for lightness
/// adjustments; not stored in the token system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Return a copy with lightness clamped to `[0, 1]`.
    #[inline]
    pub fn clamp_lightness(self) -> Hsl {
        Hsl {
            l: self.l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert back to 8-bit RGB.
    pub fn to_color(self) -> Color {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Color::new(v, v, v);
        }

        fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
            t = t.rem_euclid(1.0);
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Color {
            r: (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            g: (hue_to_channel(p, q, h) * 255.0).round() as u8,
            b: (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
