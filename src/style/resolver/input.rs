//! Input style resolver: entry fields, comboboxes, spinboxes.

use crate::style::backend::{StyleBackend, StyleHandle};
use crate::style::cache::StyleCache;
use crate::style::key::{Category, StyleKey, StyleRequest};
use crate::style::spec::{Padding, Relief, StyleSpec};
use crate::tokens::font::FontSize;
use crate::tokens::scale::{BorderWeight, SpacingToken};
use crate::tokens::shade::Shade;
use crate::tokens::store::TokenStore;
use crate::tokens::{TokenKind, UnknownTokenError};

use super::{ink_for, padding_label, ResolveError};

// ---------------------------------------------------------------------------
// InputControl
// ---------------------------------------------------------------------------

/// Kind of input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputControl {
    Entry,
    Combobox,
    Spinbox,
}

impl InputControl {
    pub const ALL: [InputControl; 3] = [
        InputControl::Entry,
        InputControl::Combobox,
        InputControl::Spinbox,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            InputControl::Entry => "ENTRY",
            InputControl::Combobox => "COMBOBOX",
            InputControl::Spinbox => "SPINBOX",
        }
    }

    pub fn from_name(name: &str) -> Result<InputControl, UnknownTokenError> {
        match name {
            "ENTRY" => Ok(InputControl::Entry),
            "COMBOBOX" => Ok(InputControl::Combobox),
            "SPINBOX" => Ok(InputControl::Spinbox),
            other => Err(UnknownTokenError::new(TokenKind::Variant, other)),
        }
    }
}

// ---------------------------------------------------------------------------
// InputStyle
// ---------------------------------------------------------------------------

/// Semantic parameters for an input-field style.
///
/// The field background uses the LIGHT shade of the role family by default
/// so typed text stays readable; selection uses the next darker shade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStyle {
    control: InputControl,
    role: String,
    field_shade: Shade,
    border: BorderWeight,
    padding: Option<SpacingToken>,
}

impl InputStyle {
    pub fn new(control: InputControl, role: impl Into<String>) -> Self {
        Self {
            control,
            role: role.into(),
            field_shade: Shade::Light,
            border: BorderWeight::Thin,
            padding: Some(SpacingToken::Xs),
        }
    }

    pub fn field_shade(mut self, shade: Shade) -> Self {
        self.field_shade = shade;
        self
    }

    pub fn border(mut self, border: BorderWeight) -> Self {
        self.border = border;
        self
    }

    pub fn padding(mut self, padding: Option<SpacingToken>) -> Self {
        self.padding = padding;
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
    style: &InputStyle,
) -> Result<StyleHandle, ResolveError> {
    let family = tokens.color_family(&style.role)?;

    let request = StyleRequest {
        category: Category::Input,
        variant: style.control.name().into(),
        role: family.name().to_string(),
        shade: style.field_shade,
        extras: vec![
            ("border", style.border.name().to_string()),
            ("pad", padding_label(style.padding)),
        ],
    };
    let key = StyleKey::build(&request);

    let field = family.shade(style.field_shade);
    let ink = ink_for(field);

    let mut spec = StyleSpec::new();
    spec.background = Some(field);
    spec.field_background = Some(field);
    spec.foreground = Some(ink);
    spec.select_background = Some(family.shade(style.field_shade.darker()));
    spec.select_foreground = Some(ink);
    spec.font = Some(tokens.font_spec(FontSize::Body));
    if style.border != BorderWeight::None {
        spec.border_width = Some(tokens.border_width(style.border));
        spec.border_color = Some(family.shade(Shade::Dark));
        spec.relief = Some(Relief::Solid);
    }
    if let Some(token) = style.padding {
        spec.padding = Some(Padding::uniform(tokens.spacing(token)));
    }
    spec.foreground_states.disabled = Some(family.shade(Shade::Dark));

    Ok(cache.resolve(key, |k| backend.register(k, &spec))?)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
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

        fn resolve(&mut self, style: &InputStyle) -> Result<StyleHandle, ResolveError> {
            resolve(&self.tokens, &mut self.cache, &mut self.backend, style)
        }
    }

    #[test]
    fn control_names_round_trip() {
        for control in InputControl::ALL {
            assert_eq!(InputControl::from_name(control.name()).unwrap(), control);
        }
        assert!(InputControl::from_name("TEXTAREA").is_err());
    }

    #[test]
    fn entry_field_uses_light_shade_and_dark_ink() {
        let mut fx = Fixture::new();
        let handle = fx
            .resolve(&InputStyle::new(InputControl::Entry, "SECONDARY"))
            .unwrap();
        let stored = fx.backend.get(handle).unwrap();
        let light = fx
            .tokens
            .color_family("SECONDARY")
            .unwrap()
            .shade(Shade::Light);
        assert_eq!(stored.spec.field_background, Some(light));
        // SECONDARY LIGHT is near-white, so the ink must be black.
        assert_eq!(stored.spec.foreground, Some(Color::BLACK));
    }

    #[test]
    fn default_border_is_thin_and_solid() {
        let mut fx = Fixture::new();
        let handle = fx
            .resolve(&InputStyle::new(InputControl::Entry, "SECONDARY"))
            .unwrap();
        let stored = fx.backend.get(handle).unwrap();
        assert_eq!(stored.spec.border_width, Some(1));
        assert_eq!(stored.spec.relief, Some(Relief::Solid));
    }

    #[test]
    fn borderless_input_has_no_border_attributes() {
        let mut fx = Fixture::new();
        let style = InputStyle::new(InputControl::Entry, "SECONDARY").border(BorderWeight::None);
        let handle = fx.resolve(&style).unwrap();
        let stored = fx.backend.get(handle).unwrap();
        assert!(stored.spec.border_width.is_none());
        assert!(stored.spec.border_color.is_none());
        assert!(stored.spec.relief.is_none());
    }

    #[test]
    fn controls_are_distinct_cache_entries() {
        let mut fx = Fixture::new();
        let entry = fx
            .resolve(&InputStyle::new(InputControl::Entry, "SECONDARY"))
            .unwrap();
        let combo = fx
            .resolve(&InputStyle::new(InputControl::Combobox, "SECONDARY"))
            .unwrap();
        assert_ne!(entry, combo);
        assert_eq!(fx.backend.registration_count(), 2);
    }

    #[test]
    fn repeated_resolution_is_idempotent() {
        let mut fx = Fixture::new();
        let style = InputStyle::new(InputControl::Spinbox, "SECONDARY")
            .field_shade(Shade::Mid)
            .padding(Some(SpacingToken::Sm));
        let a = fx.resolve(&style).unwrap();
        let b = fx.resolve(&style).unwrap();
        assert_eq!(a, b);
        assert_eq!(fx.backend.registration_count(), 1);
    }

    #[test]
    fn unknown_role_rejected_before_cache() {
        let mut fx = Fixture::new();
        let err = fx
            .resolve(&InputStyle::new(InputControl::Entry, "FORM"))
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnknownToken(_)));
        assert!(fx.cache.is_empty());
        assert_eq!(fx.backend.registration_count(), 0);
    }
}
