//! The token store: the single read-only source of design values.
//!
//! Built once at startup (from the built-in default theme or a theme file)
//! and never mutated afterwards. All semantic lookups used by the style
//! resolvers go through here, and every name-based lookup has a typed
//! failure instead of a silent default.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::color::Color;
use crate::tokens::family::{ColorFamily, MIN_CONTRAST_AA};
use crate::tokens::font::{FontSize, FontSpec, DEFAULT_FONT_SIZES};
use crate::tokens::scale::{BorderWeight, SpacingToken, DEFAULT_SPACING_UNIT};
use crate::tokens::shade::ShadeScale;
use crate::tokens::{TokenKind, UnknownTokenError};

/// Errors from assembling a token store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeBuildError {
    #[error("duplicate color family {0:?}")]
    DuplicateFamily(String),
    #[error("font family stack must not be empty")]
    EmptyFontStack,
}

// ---------------------------------------------------------------------------
// TokenStore
// ---------------------------------------------------------------------------

/// Immutable store of all design tokens for one process lifetime.
#[derive(Debug, Clone)]
pub struct TokenStore {
    families: BTreeMap<String, ColorFamily>,
    font_families: Vec<String>,
    font_sizes: [u16; 5],
    spacing_unit: u16,
}

impl TokenStore {
    pub fn builder() -> TokenStoreBuilder {
        TokenStoreBuilder::new()
    }

    /// The built-in theme: brand blue and neutral surfaces with derived
    /// scales, hand-tuned status families.
    pub fn default_theme() -> TokenStore {
        fn hex(s: &str) -> Color {
            Color::from_hex(s).expect("built-in palette literal")
        }
        fn explicit(name: &str, shades: [&str; 4]) -> ColorFamily {
            let scale = ShadeScale::from_colors(shades.map(hex));
            ColorFamily::explicit(name, scale).expect("built-in scale ordering")
        }

        TokenStore::builder()
            .font_families(["Poppins", "Segoe UI", "Inter", "Arial", "sans-serif"])
            .family(ColorFamily::derived("PRIMARY", hex("#00A3FE")))
            .family(ColorFamily::derived("SECONDARY", hex("#F3F8FE")))
            .family(ColorFamily::derived("NEUTRAL", hex("#999999")))
            .family(explicit("SUCCESS", ["#3EFF9D", "#34E683", "#2CC36F", "#1F8A4E"]))
            .family(explicit("WARNING", ["#FFF158", "#FFC94A", "#D8AA3E", "#99782C"]))
            .family(explicit("ERROR", ["#FF6756", "#FF5648", "#D8493D", "#99332B"]))
            .build()
            .expect("built-in theme is well-formed")
    }

    /// Look up a color family by its registered name.
    pub fn color_family(&self, name: &str) -> Result<&ColorFamily, UnknownTokenError> {
        self.families
            .get(name)
            .ok_or_else(|| UnknownTokenError::new(TokenKind::ColorFamily, name))
    }

    /// Whether a family name is registered.
    pub fn has_family(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Registered family names, in sorted order.
    pub fn family_names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Pixel value for a spacing token on this theme's grid.
    #[inline]
    pub fn spacing(&self, token: SpacingToken) -> u16 {
        self.spacing_unit * token.multiplier()
    }

    /// Pixel value for a spacing token given by name.
    pub fn spacing_by_name(&self, name: &str) -> Result<u16, UnknownTokenError> {
        SpacingToken::from_name(name).map(|t| self.spacing(t))
    }

    /// Point size for a font size token.
    #[inline]
    pub fn font_size(&self, size: FontSize) -> u16 {
        self.font_sizes[size.index()]
    }

    /// The preferred font family stack.
    pub fn font_families(&self) -> &[String] {
        &self.font_families
    }

    /// A plain font spec at the given size token.
    pub fn font_spec(&self, size: FontSize) -> FontSpec {
        FontSpec::new(self.font_families.clone(), self.font_size(size))
    }

    /// A plain font spec for a size token given by name.
    pub fn font_spec_by_name(&self, name: &str) -> Result<FontSpec, UnknownTokenError> {
        FontSize::from_name(name).map(|s| self.font_spec(s))
    }

    /// Pixel width of a border weight.
    #[inline]
    pub fn border_width(&self, weight: BorderWeight) -> u16 {
        weight.px()
    }

    /// Pixel width of a border weight given by name.
    pub fn border_width_by_name(&self, name: &str) -> Result<u16, UnknownTokenError> {
        BorderWeight::from_name(name).map(|w| self.border_width(w))
    }

    /// Diagnostic snapshot of the loaded token set.
    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            families: self.families.keys().cloned().collect(),
            font_families: self.font_families.clone(),
            font_sizes: FontSize::ALL
                .iter()
                .map(|&s| (s.name(), self.font_size(s)))
                .collect(),
            spacing: SpacingToken::ALL
                .iter()
                .map(|&t| (t.name(), self.spacing(t)))
                .collect(),
        }
    }
}

/// Read-only snapshot of the loaded theme, for logging and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSummary {
    pub families: Vec<String>,
    pub font_families: Vec<String>,
    pub font_sizes: Vec<(&'static str, u16)>,
    pub spacing: Vec<(&'static str, u16)>,
}

// ---------------------------------------------------------------------------
// TokenStoreBuilder
// ---------------------------------------------------------------------------

/// Assembles a [`TokenStore`]. Families are collected in registration order
/// and validated at `build`.
#[derive(Debug)]
pub struct TokenStoreBuilder {
    families: Vec<ColorFamily>,
    font_families: Vec<String>,
    font_sizes: [u16; 5],
    spacing_unit: u16,
}

impl Default for TokenStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStoreBuilder {
    pub fn new() -> Self {
        Self {
            families: Vec::new(),
            font_families: Vec::new(),
            font_sizes: DEFAULT_FONT_SIZES,
            spacing_unit: DEFAULT_SPACING_UNIT,
        }
    }

    /// Register a color family.
    pub fn family(mut self, family: ColorFamily) -> Self {
        self.families.push(family);
        self
    }

    /// Set the preferred font family stack, most preferred first.
    pub fn font_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.font_families = families.into_iter().map(Into::into).collect();
        self
    }

    /// Override the point size of one font token.
    pub fn font_size(mut self, size: FontSize, points: u16) -> Self {
        self.font_sizes[size.index()] = points;
        self
    }

    /// Override the spacing grid unit (default 4px).
    pub fn spacing_unit(mut self, unit: u16) -> Self {
        self.spacing_unit = unit;
        self
    }

    pub fn build(self) -> Result<TokenStore, ThemeBuildError> {
        if self.font_families.is_empty() {
            return Err(ThemeBuildError::EmptyFontStack);
        }

        let mut families = BTreeMap::new();
        for family in self.families {
            let report = family.contrast_report();
            if !report.meets_aa() {
                warn!(
                    family = family.name(),
                    light_vs_black = report.light_vs_black,
                    xdark_vs_white = report.xdark_vs_white,
                    threshold = MIN_CONTRAST_AA,
                    "color family below AA contrast threshold"
                );
            }
            let name = family.name().to_string();
            if families.insert(name.clone(), family).is_some() {
                return Err(ThemeBuildError::DuplicateFamily(name));
            }
        }

        let store = TokenStore {
            families,
            font_families: self.font_families,
            font_sizes: self.font_sizes,
            spacing_unit: self.spacing_unit,
        };
        info!(
            families = store.families.len(),
            spacing_unit = store.spacing_unit,
            "token store built"
        );
        Ok(store)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
