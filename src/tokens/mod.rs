//! Design tokens: color families, shade scales, typography, spacing, borders.
//!
//! Tokens are loaded once at startup into a [`store::TokenStore`] and are
//! immutable for the lifetime of the process. Widgets never see raw values;
//! they go through the style resolvers, which look everything up here.

pub mod config;
pub mod family;
pub mod font;
pub mod scale;
pub mod shade;
pub mod store;

pub use config::{ThemeConfig, ThemeConfigError};
pub use family::{ColorFamily, ContrastReport, ShadeOrderError, MIN_CONTRAST_AA};
pub use font::{FontSize, FontSlant, FontSpec, FontWeight};
pub use scale::{BorderWeight, SpacingToken};
pub use shade::{derive_scale, Shade, ShadeScale};
pub use store::{TokenStore, TokenStoreBuilder};

use std::fmt;

/// Which kind of token a failed lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    ColorFamily,
    Shade,
    FontSize,
    Spacing,
    BorderWeight,
    Variant,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::ColorFamily => "color family",
            TokenKind::Shade => "shade",
            TokenKind::FontSize => "font size",
            TokenKind::Spacing => "spacing",
            TokenKind::BorderWeight => "border weight",
            TokenKind::Variant => "variant",
        };
        f.write_str(name)
    }
}

/// A semantic parameter named something the token store has never heard of.
///
/// Raised by resolvers and name-based lookups before any cache interaction;
/// never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} token {name:?}")]
pub struct UnknownTokenError {
    pub kind: TokenKind,
    pub name: String,
}

impl UnknownTokenError {
    pub(crate) fn new(kind: TokenKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }
}
