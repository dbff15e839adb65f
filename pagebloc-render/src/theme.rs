//! Ambient theme context.

use pagebloc_schema::is_valid_color;
use serde::{Deserialize, Serialize};

/// Shop-wide colors and fonts, resolved once per page render.
///
/// Produced by the theme supplier outside this subsystem; every entry's
/// renderer sees the same instance for the duration of one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeContext {
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub heading_font: String,
    pub body_font: String,
}

impl ThemeContext {
    /// Resolves a color setting against an ambient default.
    ///
    /// Accepts `#RGB`/`#RRGGBB` (case-insensitive) and nothing else; a
    /// missing or malformed value yields the ambient default. This is the
    /// field-level fallback: it never invalidates the owning entry.
    #[must_use]
    pub fn resolve_color<'a>(&self, value: Option<&'a str>, ambient: &'a str) -> &'a str {
        match value {
            Some(v) if is_valid_color(v) => v,
            _ => ambient,
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            primary_color: "#1A6FB8".to_string(),
            background_color: "#FFFFFF".to_string(),
            text_color: "#1F1F1F".to_string(),
            heading_font: "Inter".to_string(),
            body_font: "Inter".to_string(),
        }
    }
}
