//! Canonical style keys: the collision-free encoding of a style request.
//!
//! The whole idempotent-styling guarantee rests on this encoding being
//! injective (distinct requests never share a key) and order-independent
//! over extras (equivalent requests always share one). Segments are joined
//! with `.`; every value is escaped so it cannot forge a separator, and
//! extras are serialized in sorted key order.

use std::fmt;

use crate::tokens::shade::Shade;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Widget family a style request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Text,
    Container,
    Input,
    Control,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Container => "Container",
            Category::Input => "Input",
            Category::Control => "Control",
        }
    }
}

// ---------------------------------------------------------------------------
// StyleRequest
// ---------------------------------------------------------------------------

/// The normalized form of a style request, ready for key building.
///
/// Resolvers lower their typed per-family parameters into this shape after
/// validation. Extras are `(key, value)` pairs with fixed identifier keys;
/// insertion order is irrelevant because the builder sorts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRequest {
    pub category: Category,
    pub variant: String,
    pub role: String,
    pub shade: Shade,
    pub extras: Vec<(&'static str, String)>,
}

// ---------------------------------------------------------------------------
// StyleKey
// ---------------------------------------------------------------------------

/// Canonical string identifier for one distinct visual intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey(String);

impl StyleKey {
    /// Build the canonical key for a request. Total: every request yields a
    /// key; semantic validation happens in the resolvers beforehand.
    pub fn build(request: &StyleRequest) -> StyleKey {
        let mut segments = Vec::with_capacity(request.extras.len() + 4);
        segments.push(request.category.name().to_string());
        segments.push(escape(&request.variant));
        segments.push(format!("role={}", escape(&request.role)));
        segments.push(format!("shade={}", request.shade.name()));

        let mut extras = request.extras.clone();
        extras.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in extras {
            segments.push(format!("{key}={}", escape(&value)));
        }

        StyleKey(segments.join("."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape the separator characters so no value can collide with the key
/// structure: `%` -> `%25`, `.` -> `%2E`, `=` -> `%3D`.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '.' => out.push_str("%2E"),
            '=' => out.push_str("%3D"),
            other => out.push(other),
        }
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(extras: Vec<(&'static str, String)>) -> StyleRequest {
        StyleRequest {
            category: Category::Control,
            variant: "BUTTON".into(),
            role: "PRIMARY".into(),
            shade: Shade::Mid,
            extras,
        }
    }

    #[test]
    fn key_layout() {
        let key = StyleKey::build(&request(vec![
            ("pad", "SM".into()),
            ("border", "THIN".into()),
        ]));
        assert_eq!(
            key.as_str(),
            "Control.BUTTON.role=PRIMARY.shade=MID.border=THIN.pad=SM"
        );
    }

    #[test]
    fn identical_requests_share_a_key() {
        let a = request(vec![("border", "THIN".into())]);
        let b = request(vec![("border", "THIN".into())]);
        assert_eq!(StyleKey::build(&a), StyleKey::build(&b));
    }

    #[test]
    fn extras_order_does_not_matter() {
        let a = request(vec![
            ("flags", "B".into()),
            ("size", "BODY".into()),
        ]);
        let b = request(vec![
            ("size", "BODY".into()),
            ("flags", "B".into()),
        ]);
        assert_eq!(StyleKey::build(&a), StyleKey::build(&b));
    }

    #[test]
    fn differing_shade_differs() {
        let mut a = request(vec![]);
        let mut b = request(vec![]);
        a.shade = Shade::Mid;
        b.shade = Shade::Dark;
        assert_ne!(StyleKey::build(&a), StyleKey::build(&b));
    }

    #[test]
    fn differing_extra_value_differs() {
        let a = request(vec![("pad", "SM".into())]);
        let b = request(vec![("pad", "MD".into())]);
        assert_ne!(StyleKey::build(&a), StyleKey::build(&b));
    }

    #[test]
    fn missing_extra_differs_from_present() {
        let a = request(vec![("pad", "SM".into())]);
        let b = request(vec![]);
        assert_ne!(StyleKey::build(&a), StyleKey::build(&b));
    }

    #[test]
    fn category_segment_differs() {
        let a = StyleRequest { category: Category::Text, ..request(vec![]) };
        let b = StyleRequest { category: Category::Input, ..request(vec![]) };
        assert_ne!(StyleKey::build(&a), StyleKey::build(&b));
    }

    #[test]
    fn separator_in_value_cannot_forge_structure() {
        // A role containing the separator must not produce the same key as
        // a role/extra split at that separator.
        let tricky = StyleRequest {
            role: "PRIMARY.pad=SM".into(),
            ..request(vec![])
        };
        let honest = StyleRequest {
            role: "PRIMARY".into(),
            ..request(vec![("pad", "SM".into())])
        };
        assert_ne!(StyleKey::build(&tricky), StyleKey::build(&honest));
    }

    #[test]
    fn escape_is_itself_injective() {
        // "%2E" literal in a value must not collide with an escaped ".".
        let a = StyleRequest { role: "A%2EB".into(), ..request(vec![]) };
        let b = StyleRequest { role: "A.B".into(), ..request(vec![]) };
        assert_ne!(StyleKey::build(&a), StyleKey::build(&b));
    }

    #[test]
    fn display_matches_as_str() {
        let key = StyleKey::build(&request(vec![]));
        assert_eq!(format!("{key}"), key.as_str());
    }
}
