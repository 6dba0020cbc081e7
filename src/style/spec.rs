//! Composed style spec: the concrete visual attributes of one style.
//!
//! Every supported attribute is an `Option<T>`; `None` means "leave the
//! toolkit default". Resolvers fill these in from tokens, and the backend
//! translates the set fields into a native style registration. Interaction
//! states (hover/pressed/disabled) carry their own color overrides, the
//! equivalent of a state map on the native style.

use crate::color::Color;
use crate::tokens::font::FontSpec;

/// Symmetric internal padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub x: u16,
    pub y: u16,
}

impl Padding {
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Equal padding on both axes.
    #[inline]
    pub const fn uniform(value: u16) -> Self {
        Self { x: value, y: value }
    }
}

/// Border relief rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relief {
    Flat,
    Raised,
    Sunken,
    Solid,
    Groove,
    Ridge,
}

/// Per-interaction-state color overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateColors {
    pub hover: Option<Color>,
    pub pressed: Option<Color>,
    pub disabled: Option<Color>,
}

impl StateColors {
    pub fn is_empty(&self) -> bool {
        self.hover.is_none() && self.pressed.is_none() && self.disabled.is_none()
    }
}

/// All visual attributes a registered style can carry. Each field is
/// `Option<T>` — `None` means unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSpec {
    // Colors
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub field_background: Option<Color>,
    pub select_background: Option<Color>,
    pub select_foreground: Option<Color>,
    pub border_color: Option<Color>,

    // Typography
    pub font: Option<FontSpec>,

    // Spacing
    pub padding: Option<Padding>,

    // Border
    pub border_width: Option<u16>,
    pub relief: Option<Relief>,

    // Interaction states
    pub background_states: StateColors,
    pub foreground_states: StateColors,
}

impl StyleSpec {
    /// A spec with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` on top of `self`: set fields in `other` win, unset
    /// fields keep `self`'s value. State maps merge field-wise.
    pub fn merge(&self, other: &StyleSpec) -> StyleSpec {
        fn merge_opt<T: Clone>(base: &Option<T>, other: &Option<T>) -> Option<T> {
            if other.is_some() {
                other.clone()
            } else {
                base.clone()
            }
        }
        fn merge_states(base: &StateColors, other: &StateColors) -> StateColors {
            StateColors {
                hover: merge_opt(&base.hover, &other.hover),
                pressed: merge_opt(&base.pressed, &other.pressed),
                disabled: merge_opt(&base.disabled, &other.disabled),
            }
        }

        StyleSpec {
            background: merge_opt(&self.background, &other.background),
            foreground: merge_opt(&self.foreground, &other.foreground),
            field_background: merge_opt(&self.field_background, &other.field_background),
            select_background: merge_opt(&self.select_background, &other.select_background),
            select_foreground: merge_opt(&self.select_foreground, &other.select_foreground),
            border_color: merge_opt(&self.border_color, &other.border_color),
            font: merge_opt(&self.font, &other.font),
            padding: merge_opt(&self.padding, &other.padding),
            border_width: merge_opt(&self.border_width, &other.border_width),
            relief: merge_opt(&self.relief, &other.relief),
            background_states: merge_states(&self.background_states, &other.background_states),
            foreground_states: merge_states(&self.foreground_states, &other.foreground_states),
        }
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.foreground.is_none()
            && self.field_background.is_none()
            && self.select_background.is_none()
            && self.select_foreground.is_none()
            && self.border_color.is_none()
            && self.font.is_none()
            && self.padding.is_none()
            && self.border_width.is_none()
            && self.relief.is_none()
            && self.background_states.is_empty()
            && self.foreground_states.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
