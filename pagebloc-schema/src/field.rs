//! Field declarations and format constraints.

use serde::{Deserialize, Serialize};

/// The data type of a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// A string; required text fields must additionally be non-empty.
    Text,
    /// A URL; only `https` is accepted.
    Url,
    /// A CSS color in `#RGB` or `#RRGGBB` form, case-insensitive.
    Color,
    /// A JSON number, optionally range-constrained.
    Number,
    /// A JSON boolean.
    Bool,
}

/// Declaration of a single settings field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    /// Inclusive numeric range. Only meaningful when `field_type` is Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
    /// When set, an invalid value in this field degrades to the ambient
    /// theme default at render time instead of invalidating the entry.
    /// Only meaningful for optional Color fields.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub theme_fallback: bool,
}

impl FieldSpec {
    fn simple(name: &str, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
            range: None,
            theme_fallback: false,
        }
    }

    /// A required, non-empty text field.
    pub fn text(name: &str) -> Self {
        Self::simple(name, FieldType::Text, true)
    }

    /// An optional text field.
    pub fn optional_text(name: &str) -> Self {
        Self::simple(name, FieldType::Text, false)
    }

    /// A required https URL field.
    pub fn url(name: &str) -> Self {
        Self::simple(name, FieldType::Url, true)
    }

    /// An optional https URL field.
    pub fn optional_url(name: &str) -> Self {
        Self::simple(name, FieldType::Url, false)
    }

    /// An optional color field that falls back to the ambient theme when
    /// its value is malformed.
    pub fn theme_color(name: &str) -> Self {
        Self {
            theme_fallback: true,
            ..Self::simple(name, FieldType::Color, false)
        }
    }

    /// A required color field with no theme fallback.
    pub fn color(name: &str) -> Self {
        Self::simple(name, FieldType::Color, true)
    }

    /// An optional boolean field.
    pub fn bool(name: &str) -> Self {
        Self::simple(name, FieldType::Bool, false)
    }

    /// An optional number field constrained to an inclusive range.
    pub fn number_in(name: &str, min: f64, max: f64) -> Self {
        Self {
            range: Some((min, max)),
            ..Self::simple(name, FieldType::Number, false)
        }
    }
}

/// Checks the `#RGB` / `#RRGGBB` color form, case-insensitive.
///
/// Nothing else is accepted: no named colors, no `rgb()`, no alpha.
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Checks that a URL uses the secure transport scheme and has a host part.
#[must_use]
pub fn is_secure_url(value: &str) -> bool {
    value
        .strip_prefix("https://")
        .is_some_and(|rest| !rest.is_empty())
}
