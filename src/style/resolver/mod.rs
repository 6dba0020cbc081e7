//! Style resolvers, one per widget family.
//!
//! Resolvers are the only components that use the token store, shade
//! scales, key builder, and cache together. Each validates its family's
//! semantic parameters first — an unknown role, shade, or variant fails
//! with a typed error before the cache is touched — then builds the
//! canonical key and registers the composed spec on a miss.

pub mod container;
pub mod control;
pub mod input;
pub mod text;

pub use container::{ContainerKind, ContainerStyle};
pub use control::{ControlStyle, ControlWidget};
pub use input::{InputControl, InputStyle};
pub use text::TextStyle;

use crate::color::{Color, InvalidColorError};
use crate::style::backend::StyleRegistrationError;
use crate::tokens::scale::SpacingToken;
use crate::tokens::UnknownTokenError;

/// Errors surfaced by the resolution pipeline. Local and typed so callers
/// can tell bad input from toolkit-level failure; never retried internally.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    UnknownToken(#[from] UnknownTokenError),
    #[error(transparent)]
    InvalidColor(#[from] InvalidColorError),
    #[error(transparent)]
    Registration(#[from] StyleRegistrationError),
}

/// Canonical key segment for an optional padding token: the token name, or
/// `NONE` when padding is disabled.
pub(crate) fn padding_label(padding: Option<SpacingToken>) -> String {
    match padding {
        Some(token) => token.name().to_string(),
        None => "NONE".to_string(),
    }
}

/// Black or white text, whichever contrasts better against the fill.
pub(crate) fn ink_for(fill: Color) -> Color {
    if fill.contrast_ratio(Color::WHITE) >= fill.contrast_ratio(Color::BLACK) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_label_none() {
        assert_eq!(padding_label(None), "NONE");
        assert_eq!(padding_label(Some(SpacingToken::Md)), "MD");
    }

    #[test]
    fn ink_is_white_on_dark_fills() {
        assert_eq!(ink_for(Color::from_hex("#1F8A4E").unwrap()), Color::WHITE);
        assert_eq!(ink_for(Color::BLACK), Color::WHITE);
    }

    #[test]
    fn ink_is_black_on_light_fills() {
        assert_eq!(ink_for(Color::from_hex("#F3F8FE").unwrap()), Color::BLACK);
        assert_eq!(ink_for(Color::WHITE), Color::BLACK);
    }
}
