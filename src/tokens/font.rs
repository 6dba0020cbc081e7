//! Typographic tokens: named size scale and concrete font specs.
//!
//! The token store holds the preferred family stack and the size table;
//! resolvers combine them with weight/slant flags into a [`FontSpec`] that
//! the style backend can hand to the toolkit.

use crate::tokens::{TokenKind, UnknownTokenError};

/// Default point sizes, indexed by [`FontSize`].
pub(crate) const DEFAULT_FONT_SIZES: [u16; 5] = [20, 16, 14, 11, 10];

// ---------------------------------------------------------------------------
// FontSize
// ---------------------------------------------------------------------------

/// Named font size token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Display,
    Heading,
    Title,
    Body,
    Small,
}

impl FontSize {
    pub const ALL: [FontSize; 5] = [
        FontSize::Display,
        FontSize::Heading,
        FontSize::Title,
        FontSize::Body,
        FontSize::Small,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FontSize::Display => "DISPLAY",
            FontSize::Heading => "HEADING",
            FontSize::Title => "TITLE",
            FontSize::Body => "BODY",
            FontSize::Small => "SMALL",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            FontSize::Display => 0,
            FontSize::Heading => 1,
            FontSize::Title => 2,
            FontSize::Body => 3,
            FontSize::Small => 4,
        }
    }

    pub fn from_name(name: &str) -> Result<FontSize, UnknownTokenError> {
        match name {
            "DISPLAY" => Ok(FontSize::Display),
            "HEADING" => Ok(FontSize::Heading),
            "TITLE" => Ok(FontSize::Title),
            "BODY" => Ok(FontSize::Body),
            "SMALL" => Ok(FontSize::Small),
            other => Err(UnknownTokenError::new(TokenKind::FontSize, other)),
        }
    }
}

// ---------------------------------------------------------------------------
// FontSpec
// ---------------------------------------------------------------------------

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSlant {
    #[default]
    Roman,
    Italic,
}

/// A concrete font specification handed to the style backend.
///
/// The family stack is an ordered preference list; the toolkit picks the
/// first installed family, so missing brand fonts degrade gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub families: Vec<String>,
    pub size: u16,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub underline: bool,
}

impl FontSpec {
    /// A normal-weight, upright spec at the given size.
    pub fn new(families: Vec<String>, size: u16) -> Self {
        Self {
            families,
            size,
            weight: FontWeight::Normal,
            slant: FontSlant::Roman,
            underline: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.slant = FontSlant::Italic;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_names_round_trip() {
        for size in FontSize::ALL {
            assert_eq!(FontSize::from_name(size.name()).unwrap(), size);
        }
    }

    #[test]
    fn unknown_size_name_rejected() {
        let err = FontSize::from_name("JUMBO").unwrap_err();
        assert_eq!(err.kind, TokenKind::FontSize);
    }

    #[test]
    fn default_sizes_descend() {
        assert!(DEFAULT_FONT_SIZES.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn spec_builders_set_flags() {
        let spec = FontSpec::new(vec!["Inter".into()], 11).bold().italic().underline();
        assert_eq!(spec.weight, FontWeight::Bold);
        assert_eq!(spec.slant, FontSlant::Italic);
        assert!(spec.underline);
        assert_eq!(spec.size, 11);
    }

    #[test]
    fn spec_defaults_are_plain() {
        let spec = FontSpec::new(vec!["Inter".into()], 14);
        assert_eq!(spec.weight, FontWeight::Normal);
        assert_eq!(spec.slant, FontSlant::Roman);
        assert!(!spec.underline);
    }
}
