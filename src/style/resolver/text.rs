//! Text style resolver: labels, headings, status text.

use crate::style::backend::{StyleBackend, StyleHandle};
use crate::style::cache::StyleCache;
use crate::style::key::{Category, StyleKey, StyleRequest};
use crate::style::spec::{Padding, StyleSpec};
use crate::tokens::font::FontSize;
use crate::tokens::scale::SpacingToken;
use crate::tokens::shade::Shade;
use crate::tokens::store::TokenStore;

use super::ResolveError;

// ---------------------------------------------------------------------------
// TextStyle
// ---------------------------------------------------------------------------

/// Semantic parameters for a text style.
///
/// Foreground is required; the background is optional and always a
/// `(family, shade)` pair, so a background family without a shade (or the
/// reverse) cannot be expressed.
///
/// # Examples
///
/// ```ignore
/// let style = TextStyle::new("NEUTRAL", Shade::Xdark)
///     .size(FontSize::Heading)
///     .bold(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    foreground: (String, Shade),
    background: Option<(String, Shade)>,
    size: FontSize,
    bold: bool,
    underline: bool,
    italic: bool,
}

impl TextStyle {
    /// Body text in the given foreground family and shade.
    pub fn new(family: impl Into<String>, shade: Shade) -> Self {
        Self {
            foreground: (family.into(), shade),
            background: None,
            size: FontSize::Body,
            bold: false,
            underline: false,
            italic: false,
        }
    }

    /// Set an explicit background. Without this the widget inherits its
    /// parent's background.
    pub fn on(mut self, family: impl Into<String>, shade: Shade) -> Self {
        self.background = Some((family.into(), shade));
        self
    }

    pub fn size(mut self, size: FontSize) -> Self {
        self.size = size;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Compact flag suffix in fixed B, I, U order.
    fn flag_string(&self) -> String {
        let mut flags = String::new();
        if self.bold {
            flags.push('B');
        }
        if self.italic {
            flags.push('I');
        }
        if self.underline {
            flags.push('U');
        }
        flags
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

pub(crate) fn resolve<B: StyleBackend>(
    tokens: &TokenStore,
    cache: &mut StyleCache,
    backend: &mut B,
    style: &TextStyle,
) -> Result<StyleHandle, ResolveError> {
    // Validate everything against the store before any cache interaction.
    let fg_family = tokens.color_family(&style.foreground.0)?;
    let bg = match &style.background {
        Some((name, shade)) => Some((tokens.color_family(name)?, *shade)),
        None => None,
    };

    let mut extras = vec![("size", style.size.name().to_string())];
    let flags = style.flag_string();
    if !flags.is_empty() {
        extras.push(("flags", flags));
    }
    if let Some((family, shade)) = bg {
        extras.push(("bg", family.name().to_string()));
        extras.push(("bgshade", shade.name().to_string()));
    }

    let request = StyleRequest {
        category: Category::Text,
        variant: "LABEL".into(),
        role: fg_family.name().to_string(),
        shade: style.foreground.1,
        extras,
    };
    let key = StyleKey::build(&request);

    let mut spec = StyleSpec::new();
    spec.foreground = Some(fg_family.shade(style.foreground.1));
    if let Some((family, shade)) = bg {
        spec.background = Some(family.shade(shade));
    }
    let mut font = tokens.font_spec(style.size);
    if style.bold {
        font = font.bold();
    }
    if style.italic {
        font = font.italic();
    }
    if style.underline {
        font = font.underline();
    }
    spec.font = Some(font);
    spec.padding = Some(Padding::new(tokens.spacing(SpacingToken::Xs), 0));

    Ok(cache.resolve(key, |k| backend.register(k, &spec))?)
}

// ===========================================================================
// Tests
// ===========================================================================
