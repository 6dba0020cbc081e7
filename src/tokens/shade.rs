//! Shade scale: the four canonical lightness variants of a base color.
//!
//! Every color family exposes exactly these four shades, ordered by
//! decreasing lightness. Derivation is a pure function of the base color:
//! fixed lightness deltas in HSL space, clamped to the legal range.

use crate::color::{Color, Hsl};
use crate::tokens::{TokenKind, UnknownTokenError};

/// Canonical shade names, in scale order.
pub const SHADE_NAMES: [&str; 4] = ["LIGHT", "MID", "DARK", "XDARK"];

/// Lightness deltas applied to the base, indexed by [`Shade`].
///
/// MID is the base itself; LIGHT is lightened, DARK and XDARK darkened.
const LIGHTNESS_DELTAS: [f64; 4] = [0.15, 0.0, -0.12, -0.30];

// ---------------------------------------------------------------------------
// Shade
// ---------------------------------------------------------------------------

/// One of the four canonical shades of a color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Mid,
    Dark,
    Xdark,
}

impl Shade {
    pub const ALL: [Shade; 4] = [Shade::Light, Shade::Mid, Shade::Dark, Shade::Xdark];

    /// Canonical uppercase token name.
    pub const fn name(self) -> &'static str {
        SHADE_NAMES[self.index()]
    }

    /// Position in the scale, 0 = lightest.
    pub const fn index(self) -> usize {
        match self {
            Shade::Light => 0,
            Shade::Mid => 1,
            Shade::Dark => 2,
            Shade::Xdark => 3,
        }
    }

    /// Parse a canonical shade name. Only the four uppercase names are
    /// accepted; legacy aliases from older themes are deliberately not.
    pub fn from_name(name: &str) -> Result<Shade, UnknownTokenError> {
        match name {
            "LIGHT" => Ok(Shade::Light),
            "MID" => Ok(Shade::Mid),
            "DARK" => Ok(Shade::Dark),
            "XDARK" => Ok(Shade::Xdark),
            other => Err(UnknownTokenError::new(TokenKind::Shade, other)),
        }
    }

    /// The next darker shade, saturating at XDARK.
    ///
    /// Control resolvers use this to step hover/pressed states down the
    /// scale from the normal-state shade.
    pub const fn darker(self) -> Shade {
        match self {
            Shade::Light => Shade::Mid,
            Shade::Mid => Shade::Dark,
            Shade::Dark | Shade::Xdark => Shade::Xdark,
        }
    }
}

// ---------------------------------------------------------------------------
// ShadeScale
// ---------------------------------------------------------------------------

/// The four shades of one color family, ordered LIGHT, MID, DARK, XDARK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeScale {
    colors: [Color; 4],
}

impl ShadeScale {
    /// Build a scale from explicit colors, in LIGHT..XDARK order.
    /// No ordering validation happens here; [`ColorFamily::explicit`]
    /// enforces the lightness invariant.
    ///
    /// [`ColorFamily::explicit`]: crate::tokens::family::ColorFamily::explicit
    pub const fn from_colors(colors: [Color; 4]) -> Self {
        Self { colors }
    }

    /// The color for a given shade.
    #[inline]
    pub const fn get(&self, shade: Shade) -> Color {
        self.colors[shade.index()]
    }

    /// Iterate shades and colors in scale order.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Color)> + '_ {
        Shade::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

impl std::ops::Index<Shade> for ShadeScale {
    type Output = Color;

    fn index(&self, shade: Shade) -> &Color {
        &self.colors[shade.index()]
    }
}

/// Derive the four-shade scale from a single base color.
///
/// Pure and deterministic: the same base always yields the same four
/// colors. MID is the base unchanged (not an HSL round-trip, which could
/// drift by a rounding unit). Lightness is clamped, never wrapped, so bases
/// near the extremes may collapse adjacent shades to the same value; that
/// is accepted.
pub fn derive_scale(base: Color) -> ShadeScale {
    let hsl = base.to_hsl();
    let mut colors = LIGHTNESS_DELTAS.map(|delta| {
        Hsl { l: hsl.l + delta, ..hsl }
            .clamp_lightness()
            .to_color()
    });
    colors[Shade::Mid.index()] = base;
    ShadeScale { colors }
}

// ===========================================================================
// Tests
// ===========================================================================
