//! Theme configuration: deserialize a theme definition and build the store.
//!
//! The engine itself performs no I/O; applications read the theme file at
//! bootstrap and hand the TOML text here. A family entry supplies either a
//! `base` color (scale derived) or four explicit `shades`.
//!
//! ```toml
//! font-families = ["Poppins", "Segoe UI", "sans-serif"]
//! spacing-unit = 4
//!
//! [font-sizes]
//! BODY = 12
//!
//! [families.PRIMARY]
//! base = "#00A3FE"
//!
//! [families.SUCCESS]
//! shades = ["#3EFF9D", "#34E683", "#2CC36F", "#1F8A4E"]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::color::{Color, InvalidColorError};
use crate::tokens::family::{ColorFamily, ShadeOrderError};
use crate::tokens::font::FontSize;
use crate::tokens::shade::ShadeScale;
use crate::tokens::store::{ThemeBuildError, TokenStore};
use crate::tokens::UnknownTokenError;

/// Errors from loading a theme definition.
#[derive(Debug, thiserror::Error)]
pub enum ThemeConfigError {
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("family {family:?}: {source}")]
    InvalidColor {
        family: String,
        source: InvalidColorError,
    },
    #[error("family {0:?} must set exactly one of `base` or `shades`")]
    AmbiguousFamily(String),
    #[error(transparent)]
    ShadeOrder(#[from] ShadeOrderError),
    #[error(transparent)]
    UnknownToken(#[from] UnknownTokenError),
    #[error(transparent)]
    Build(#[from] ThemeBuildError),
}

// ---------------------------------------------------------------------------
// ThemeConfig
// ---------------------------------------------------------------------------

/// A deserialized theme definition, not yet validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ThemeConfig {
    pub font_families: Vec<String>,
    #[serde(default)]
    pub spacing_unit: Option<u16>,
    #[serde(default)]
    pub font_sizes: BTreeMap<String, u16>,
    #[serde(default)]
    pub families: BTreeMap<String, FamilyConfig>,
}

/// One color family entry: a base to derive from, or four explicit shades
/// in LIGHT, MID, DARK, XDARK order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilyConfig {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub shades: Option<[String; 4]>,
}

impl ThemeConfig {
    /// Parse a TOML theme definition.
    pub fn from_toml_str(text: &str) -> Result<ThemeConfig, ThemeConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validate the definition and build an immutable token store.
    pub fn into_store(self) -> Result<TokenStore, ThemeConfigError> {
        let mut builder = TokenStore::builder().font_families(self.font_families);

        if let Some(unit) = self.spacing_unit {
            builder = builder.spacing_unit(unit);
        }

        for (name, points) in self.font_sizes {
            let size = FontSize::from_name(&name)?;
            builder = builder.font_size(size, points);
        }

        for (name, entry) in self.families {
            builder = builder.family(build_family(&name, entry)?);
        }

        Ok(builder.build()?)
    }
}

fn build_family(name: &str, entry: FamilyConfig) -> Result<ColorFamily, ThemeConfigError> {
    let parse = |value: &str| {
        Color::from_hex(value).map_err(|source| ThemeConfigError::InvalidColor {
            family: name.to_string(),
            source,
        })
    };

    match (entry.base, entry.shades) {
        (Some(base), None) => Ok(ColorFamily::derived(name, parse(&base)?)),
        (None, Some(shades)) => {
            let mut colors = [Color::default(); 4];
            for (slot, value) in colors.iter_mut().zip(shades.iter()) {
                *slot = parse(value)?;
            }
            Ok(ColorFamily::explicit(name, ShadeScale::from_colors(colors))?)
        }
        _ => Err(ThemeConfigError::AmbiguousFamily(name.to_string())),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::scale::SpacingToken;
    use crate::tokens::shade::Shade;

    const THEME: &str = r##"
font-families = ["Inter", "sans-serif"]
spacing-unit = 4

[font-sizes]
BODY = 12

[families.PRIMARY]
base = "#2D6CDF"

[families.SUCCESS]
shades = ["#3EFF9D", "#34E683", "#2CC36F", "#1F8A4E"]
"##;

    #[test]
    fn full_theme_loads() {
        let store = ThemeConfig::from_toml_str(THEME).unwrap().into_store().unwrap();
        assert!(store.has_family("PRIMARY"));
        assert!(store.has_family("SUCCESS"));
        assert_eq!(store.font_size(FontSize::Body), 12);
        assert_eq!(store.spacing(SpacingToken::Sm), 8);
    }

    #[test]
    fn derived_family_from_base() {
        let store = ThemeConfig::from_toml_str(THEME).unwrap().into_store().unwrap();
        let primary = store.color_family("PRIMARY").unwrap();
        assert_eq!(primary.shade(Shade::Mid).to_hex(), "#2D6CDF");
    }

    #[test]
    fn explicit_family_from_shades() {
        let store = ThemeConfig::from_toml_str(THEME).unwrap().into_store().unwrap();
        let success = store.color_family("SUCCESS").unwrap();
        assert_eq!(success.shade(Shade::Dark).to_hex(), "#2CC36F");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str("font-families = [").unwrap_err();
        assert!(matches!(err, ThemeConfigError::Parse(_)));
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let text = "font-families = [\"A\"]\ncolour-depth = 8\n";
        assert!(ThemeConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn bad_color_names_the_family() {
        let text = r##"
font-families = ["A"]
[families.PRIMARY]
base = "#NOTHEX"
"##;
        let err = ThemeConfig::from_toml_str(text).unwrap().into_store().unwrap_err();
        match err {
            ThemeConfigError::InvalidColor { family, .. } => assert_eq!(family, "PRIMARY"),
            other => panic!("expected InvalidColor, got: {other:?}"),
        }
    }

    #[test]
    fn family_with_both_base_and_shades_rejected() {
        let text = r##"
font-families = ["A"]
[families.PRIMARY]
base = "#00A3FE"
shades = ["#111111", "#222222", "#333333", "#444444"]
"##;
        let err = ThemeConfig::from_toml_str(text).unwrap().into_store().unwrap_err();
        assert!(matches!(err, ThemeConfigError::AmbiguousFamily(name) if name == "PRIMARY"));
    }

    #[test]
    fn family_with_neither_base_nor_shades_rejected() {
        let text = r#"
font-families = ["A"]
[families.PRIMARY]
"#;
        let err = ThemeConfig::from_toml_str(text).unwrap().into_store().unwrap_err();
        assert!(matches!(err, ThemeConfigError::AmbiguousFamily(_)));
    }

    #[test]
    fn unordered_explicit_shades_rejected() {
        let text = r##"
font-families = ["A"]
[families.BAD]
shades = ["#000000", "#FFFFFF", "#888888", "#444444"]
"##;
        let err = ThemeConfig::from_toml_str(text).unwrap().into_store().unwrap_err();
        assert!(matches!(err, ThemeConfigError::ShadeOrder(_)));
    }

    #[test]
    fn unknown_font_size_token_rejected() {
        let text = r#"
font-families = ["A"]
[font-sizes]
JUMBO = 30
"#;
        let err = ThemeConfig::from_toml_str(text).unwrap().into_store().unwrap_err();
        assert!(matches!(err, ThemeConfigError::UnknownToken(_)));
    }
}
