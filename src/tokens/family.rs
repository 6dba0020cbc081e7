//! Color families: a named base color plus its derived or hand-tuned scale.

use crate::color::Color;
use crate::tokens::shade::{derive_scale, Shade, ShadeScale};

/// Contrast threshold the LIGHT/XDARK shades are checked against: WCAG AA
/// for normal text (4.5:1).
pub const MIN_CONTRAST_AA: f64 = 4.5;

/// An explicit shade scale whose lightness does not decrease monotonically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("shade scale for family {family:?} must be ordered LIGHT >= MID >= DARK >= XDARK by lightness")]
pub struct ShadeOrderError {
    pub family: String,
}

// ---------------------------------------------------------------------------
// ColorFamily
// ---------------------------------------------------------------------------

/// A named color family: base hue plus its four-shade scale.
///
/// Families are either *derived* (the scale is computed from the base, the
/// common case for brand colors) or *explicit* (every shade hand-tuned,
/// which the default theme uses for its status colors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFamily {
    name: String,
    base: Color,
    scale: ShadeScale,
}

impl ColorFamily {
    /// Create a family whose scale is derived from the base color.
    pub fn derived(name: impl Into<String>, base: Color) -> Self {
        Self {
            name: name.into(),
            base,
            scale: derive_scale(base),
        }
    }

    /// Create a family with a hand-tuned scale. The base is taken to be the
    /// MID shade. Fails if the scale's lightness is not monotonically
    /// non-increasing from LIGHT to XDARK.
    pub fn explicit(
        name: impl Into<String>,
        scale: ShadeScale,
    ) -> Result<Self, ShadeOrderError> {
        let name = name.into();
        let lightness: Vec<f64> =
            Shade::ALL.iter().map(|&s| scale.get(s).lightness()).collect();
        if lightness.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(ShadeOrderError { family: name });
        }
        Ok(Self {
            name,
            base: scale.get(Shade::Mid),
            scale,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn base(&self) -> Color {
        self.base
    }

    #[inline]
    pub fn scale(&self) -> &ShadeScale {
        &self.scale
    }

    /// The color for one shade of this family.
    #[inline]
    pub fn shade(&self, shade: Shade) -> Color {
        self.scale.get(shade)
    }

    /// Contrast of the extreme shades against the text colors they are
    /// rendered with: LIGHT carries black text, XDARK carries white text.
    pub fn contrast_report(&self) -> ContrastReport {
        ContrastReport {
            light_vs_black: self.shade(Shade::Light).contrast_ratio(Color::BLACK),
            xdark_vs_white: self.shade(Shade::Xdark).contrast_ratio(Color::WHITE),
        }
    }
}

/// Contrast ratios of a family's extreme shades against their text colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub light_vs_black: f64,
    pub xdark_vs_white: f64,
}

impl ContrastReport {
    /// Whether both pairings meet [`MIN_CONTRAST_AA`].
    pub fn meets_aa(&self) -> bool {
        self.light_vs_black >= MIN_CONTRAST_AA && self.xdark_vs_white >= MIN_CONTRAST_AA
    }
}

// ===========================================================================
// Tests
// ===========================================================================
