//! Container style resolver: surfaces, cards, panels, sections.

use crate::style::backend::{StyleBackend, StyleHandle};
use crate::style::cache::StyleCache;
use crate::style::key::{Category, StyleKey, StyleRequest};
use crate::style::spec::{Padding, Relief, StyleSpec};
use crate::tokens::scale::{BorderWeight, SpacingToken};
use crate::tokens::shade::Shade;
use crate::tokens::store::TokenStore;
use crate::tokens::{TokenKind, UnknownTokenError};

use super::{padding_label, ResolveError};

// ---------------------------------------------------------------------------
// ContainerKind
// ---------------------------------------------------------------------------

/// Semantic container variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Surface,
    Card,
    Panel,
    Section,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::Surface,
        ContainerKind::Card,
        ContainerKind::Panel,
        ContainerKind::Section,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ContainerKind::Surface => "SURFACE",
            ContainerKind::Card => "CARD",
            ContainerKind::Panel => "PANEL",
            ContainerKind::Section => "SECTION",
        }
    }

    pub fn from_name(name: &str) -> Result<ContainerKind, UnknownTokenError> {
        match name {
            "SURFACE" => Ok(ContainerKind::Surface),
            "CARD" => Ok(ContainerKind::Card),
            "PANEL" => Ok(ContainerKind::Panel),
            "SECTION" => Ok(ContainerKind::Section),
            other => Err(UnknownTokenError::new(TokenKind::Variant, other)),
        }
    }
}

// ---------------------------------------------------------------------------
// ContainerStyle
// ---------------------------------------------------------------------------

/// Semantic parameters for a container style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStyle {
    kind: ContainerKind,
    role: String,
    shade: Shade,
    border: BorderWeight,
    padding: Option<SpacingToken>,
}

impl ContainerStyle {
    /// A borderless, unpadded container of the given kind, filled with the
    /// MID shade of the role family.
    pub fn new(kind: ContainerKind, role: impl Into<String>) -> Self {
        Self {
            kind,
            role: role.into(),
            shade: Shade::Mid,
            border: BorderWeight::None,
            padding: None,
        }
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = shade;
        self
    }

    pub fn border(mut self, border: BorderWeight) -> Self {
        self.border = border;
        self
    }

    pub fn padding(mut self, padding: SpacingToken) -> Self {
        self.padding = Some(padding);
        self
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

pub(crate) fn resolve<B: StyleBackend>(
    tokens: &TokenStore,
    cache: &mut StyleCache,
    backend: &mut B,
    style: &ContainerStyle,
) -> Result<StyleHandle, ResolveError> {
    let family = tokens.color_family(&style.role)?;

    let request = StyleRequest {
        category: Category::Container,
        variant: style.kind.name().into(),
        role: family.name().to_string(),
        shade: style.shade,
        extras: vec![
            ("border", style.border.name().to_string()),
            ("pad", padding_label(style.padding)),
        ],
    };
    let key = StyleKey::build(&request);

    let mut spec = StyleSpec::new();
    spec.background = Some(family.shade(style.shade));
    if style.border != BorderWeight::None {
        spec.border_width = Some(tokens.border_width(style.border));
        spec.border_color = Some(family.shade(style.shade.darker()));
        spec.relief = Some(Relief::Solid);
    } else {
        spec.relief = Some(Relief::Flat);
    }
    if let Some(token) = style.padding {
        spec.padding = Some(Padding::uniform(tokens.spacing(token)));
    }

    Ok(cache.resolve(key, |k| backend.register(k, &spec))?)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::backend::InMemoryBackend;

    struct Fixture {
        tokens: TokenStore,
        cache: StyleCache,
        backend: InMemoryBackend,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                tokens: TokenStore::default_theme(),
                cache: StyleCache::new(),
                backend: InMemoryBackend::new(),
            }
        }

        fn resolve(&mut self, style: &ContainerStyle) -> Result<StyleHandle, ResolveError> {
            resolve(&self.tokens, &mut self.cache, &mut self.backend, style)
        }
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in ContainerKind::ALL {
            assert_eq!(ContainerKind::from_name(kind.name()).unwrap(), kind);
        }
        assert!(ContainerKind::from_name("DRAWER").is_err());
    }

    #[test]
    fn surface_fill_comes_from_family_shade() {
        let mut fx = Fixture::new();
        let style = ContainerStyle::new(ContainerKind::Surface, "SECONDARY").shade(Shade::Light);
        let handle = fx.resolve(&style).unwrap();
        let stored = fx.backend.get(handle).unwrap();
        let expected = fx
            .tokens
            .color_family("SECONDARY")
            .unwrap()
            .shade(Shade::Light);
        assert_eq!(stored.spec.background, Some(expected));
        assert_eq!(stored.spec.relief, Some(Relief::Flat));
        assert!(stored.spec.border_width.is_none());
    }

    #[test]
    fn bordered_card_gets_border_attributes() {
        let mut fx = Fixture::new();
        let style = ContainerStyle::new(ContainerKind::Card, "SECONDARY")
            .border(BorderWeight::Thin)
            .padding(SpacingToken::Md);
        let handle = fx.resolve(&style).unwrap();
        let stored = fx.backend.get(handle).unwrap();
        assert_eq!(stored.spec.border_width, Some(1));
        assert_eq!(stored.spec.relief, Some(Relief::Solid));
        assert_eq!(stored.spec.padding, Some(Padding::uniform(16)));
        assert!(stored.spec.border_color.is_some());
    }

    #[test]
    fn kinds_do_not_share_cache_entries() {
        let mut fx = Fixture::new();
        let card = fx
            .resolve(&ContainerStyle::new(ContainerKind::Card, "SECONDARY"))
            .unwrap();
        let panel = fx
            .resolve(&ContainerStyle::new(ContainerKind::Panel, "SECONDARY"))
            .unwrap();
        assert_ne!(card, panel);
        assert_eq!(fx.backend.registration_count(), 2);
    }

    #[test]
    fn padded_and_unpadded_are_distinct() {
        let mut fx = Fixture::new();
        let plain = fx
            .resolve(&ContainerStyle::new(ContainerKind::Section, "PRIMARY"))
            .unwrap();
        let padded = fx
            .resolve(&ContainerStyle::new(ContainerKind::Section, "PRIMARY").padding(SpacingToken::Sm))
            .unwrap();
        assert_ne!(plain, padded);
    }

    #[test]
    fn repeated_resolution_is_idempotent() {
        let mut fx = Fixture::new();
        let style = ContainerStyle::new(ContainerKind::Card, "SECONDARY")
            .border(BorderWeight::Thin)
            .padding(SpacingToken::Md);
        let a = fx.resolve(&style).unwrap();
        let b = fx.resolve(&style).unwrap();
        assert_eq!(a, b);
        assert_eq!(fx.backend.registration_count(), 1);
    }

    #[test]
    fn unknown_role_rejected_before_cache() {
        let mut fx = Fixture::new();
        let err = fx
            .resolve(&ContainerStyle::new(ContainerKind::Card, "BACKDROP"))
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnknownToken(_)));
        assert!(fx.cache.is_empty());
        assert_eq!(fx.backend.registration_count(), 0);
    }
}
