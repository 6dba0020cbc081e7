//! Control style resolver: buttons, checkboxes, radios, switches.
//!
//! Interactive controls carry a full state map: the normal fill is the
//! requested shade, hover steps one shade darker, pressed two, and the
//! disabled face uses the LIGHT shade of the same family.

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
// ControlWidget
// ---------------------------------------------------------------------------

/// Kind of interactive control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlWidget {
    Button,
    Checkbox,
    Radio,
    Switch,
}

impl ControlWidget {
    pub const ALL: [ControlWidget; 4] = [
        ControlWidget::Button,
        ControlWidget::Checkbox,
        ControlWidget::Radio,
        ControlWidget::Switch,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ControlWidget::Button => "BUTTON",
            ControlWidget::Checkbox => "CHECKBOX",
            ControlWidget::Radio => "RADIO",
            ControlWidget::Switch => "SWITCH",
        }
    }

    pub fn from_name(name: &str) -> Result<ControlWidget, UnknownTokenError> {
        match name {
            "BUTTON" => Ok(ControlWidget::Button),
            "CHECKBOX" => Ok(ControlWidget::Checkbox),
            "RADIO" => Ok(ControlWidget::Radio),
            "SWITCH" => Ok(ControlWidget::Switch),
            other => Err(UnknownTokenError::new(TokenKind::Variant, other)),
        }
    }
}

// ---------------------------------------------------------------------------
// ControlStyle
// ---------------------------------------------------------------------------

/// Semantic parameters for an interactive-control style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlStyle {
    widget: ControlWidget,
    role: String,
    shade: Shade,
    border: BorderWeight,
    padding: Option<SpacingToken>,
}

impl ControlStyle {
    /// A control filled with the MID shade of the role family, thin border,
    /// small padding.
    pub fn new(widget: ControlWidget, role: impl Into<String>) -> Self {
        Self {
            widget,
            role: role.into(),
            shade: Shade::Mid,
            border: BorderWeight::Thin,
            padding: Some(SpacingToken::Sm),
        }
    }

    /// Shade used for the normal (rest) state.
    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = shade;
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
    style: &ControlStyle,
) -> Result<StyleHandle, ResolveError> {
    let family = tokens.color_family(&style.role)?;

    let request = StyleRequest {
        category: Category::Control,
        variant: style.widget.name().into(),
        role: family.name().to_string(),
        shade: style.shade,
        extras: vec![
            ("border", style.border.name().to_string()),
            ("pad", padding_label(style.padding)),
        ],
    };
    let key = StyleKey::build(&request);

    let normal = family.shade(style.shade);
    let hover = family.shade(style.shade.darker());
    let pressed = family.shade(style.shade.darker().darker());
    let disabled_face = family.shade(Shade::Light);

    let mut spec = StyleSpec::new();
    spec.background = Some(normal);
    spec.foreground = Some(ink_for(normal));
    spec.background_states.hover = Some(hover);
    spec.background_states.pressed = Some(pressed);
    spec.background_states.disabled = Some(disabled_face);
    spec.foreground_states.disabled = Some(family.shade(Shade::Dark));
    spec.font = Some(tokens.font_spec(FontSize::Body));
    spec.relief = Some(match style.widget {
        ControlWidget::Button => Relief::Raised,
        _ => Relief::Flat,
    });
    if style.border != BorderWeight::None {
        spec.border_width = Some(tokens.border_width(style.border));
        spec.border_color = Some(family.shade(Shade::Xdark));
    }
    if let Some(token) = style.padding {
        let px = tokens.spacing(token);
        spec.padding = Some(Padding::new(px, px / 2));
    }

    Ok(cache.resolve(key, |k| backend.register(k, &spec))?)
}

// ===========================================================================
// Tests
// ===========================================================================
