//! Spacing and border-weight scales.
//!
//! Spacing follows a 4px grid: each token is a fixed multiple of the
//! theme's base unit. Border weights are fixed pixel values.

use crate::tokens::{TokenKind, UnknownTokenError};

/// Default spacing grid unit in pixels.
pub(crate) const DEFAULT_SPACING_UNIT: u16 = 4;

// ---------------------------------------------------------------------------
// SpacingToken
// ---------------------------------------------------------------------------

/// Named step on the spacing scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 6] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
        SpacingToken::Xxl,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SpacingToken::Xs => "XS",
            SpacingToken::Sm => "SM",
            SpacingToken::Md => "MD",
            SpacingToken::Lg => "LG",
            SpacingToken::Xl => "XL",
            SpacingToken::Xxl => "XXL",
        }
    }

    /// Grid multiplier for this step.
    pub const fn multiplier(self) -> u16 {
        match self {
            SpacingToken::Xs => 1,
            SpacingToken::Sm => 2,
            SpacingToken::Md => 4,
            SpacingToken::Lg => 6,
            SpacingToken::Xl => 8,
            SpacingToken::Xxl => 12,
        }
    }

    pub fn from_name(name: &str) -> Result<SpacingToken, UnknownTokenError> {
        match name {
            "XS" => Ok(SpacingToken::Xs),
            "SM" => Ok(SpacingToken::Sm),
            "MD" => Ok(SpacingToken::Md),
            "LG" => Ok(SpacingToken::Lg),
            "XL" => Ok(SpacingToken::Xl),
            "XXL" => Ok(SpacingToken::Xxl),
            other => Err(UnknownTokenError::new(TokenKind::Spacing, other)),
        }
    }
}

// ---------------------------------------------------------------------------
// BorderWeight
// ---------------------------------------------------------------------------

/// Named border thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderWeight {
    #[default]
    None,
    Thin,
    Medium,
    Thick,
}

impl BorderWeight {
    pub const ALL: [BorderWeight; 4] = [
        BorderWeight::None,
        BorderWeight::Thin,
        BorderWeight::Medium,
        BorderWeight::Thick,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BorderWeight::None => "NONE",
            BorderWeight::Thin => "THIN",
            BorderWeight::Medium => "MEDIUM",
            BorderWeight::Thick => "THICK",
        }
    }

    /// Pixel width of this weight.
    pub const fn px(self) -> u16 {
        match self {
            BorderWeight::None => 0,
            BorderWeight::Thin => 1,
            BorderWeight::Medium => 2,
            BorderWeight::Thick => 3,
        }
    }

    pub fn from_name(name: &str) -> Result<BorderWeight, UnknownTokenError> {
        match name {
            "NONE" => Ok(BorderWeight::None),
            "THIN" => Ok(BorderWeight::Thin),
            "MEDIUM" => Ok(BorderWeight::Medium),
            "THICK" => Ok(BorderWeight::Thick),
            other => Err(UnknownTokenError::new(TokenKind::BorderWeight, other)),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
