use pagebloc_types::ComponentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_variant() -> String {
    "default".to_string()
}

/// A single addressable unit in a page layout.
///
/// The `settings` field holds arbitrary JSON whose structure is defined by
/// the component kind's schema. It is carried verbatim through every
/// read/write round trip, including when it fails schema validation, so an
/// author can inspect and fix a broken entry instead of losing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Stable identity within the owning layout; the render key.
    pub id: ComponentId,

    /// Selects which schema and renderer apply. Old persisted data may
    /// reference kinds the current registry no longer knows.
    #[serde(rename = "type")]
    pub kind: String,

    /// Presentation sub-mode of the kind. Advisory at parse time,
    /// enforced against the schema's declared set at render time.
    #[serde(default = "default_variant")]
    pub variant: String,

    /// Open key/value bag, shape defined per kind. The storefront boundary
    /// spells this field `properties`; both names are the same semantic
    /// field (see `Layout::to_storefront_value`).
    #[serde(default, alias = "properties")]
    pub settings: Map<String, Value>,
}

impl ComponentConfig {
    /// Creates a configuration with a fresh id and empty settings.
    #[must_use]
    pub fn new(kind: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            id: ComponentId::new(),
            kind: kind.into(),
            variant: variant.into(),
            settings: Map::new(),
        }
    }

    /// Builder-style setter for a single settings key.
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Extracts a string setting.
    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(|v| v.as_str())
    }

    /// Extracts a boolean setting.
    pub fn setting_bool(&self, key: &str) -> Option<bool> {
        self.settings.get(key).and_then(|v| v.as_bool())
    }

    /// Extracts a numeric setting.
    pub fn setting_number(&self, key: &str) -> Option<f64> {
        self.settings.get(key).and_then(|v| v.as_f64())
    }

    /// True if the two configurations carry the same content, ignoring ids.
    ///
    /// Ids are render keys, not content identity: two independent resets
    /// produce layouts that are equal under this comparison.
    #[must_use]
    pub fn content_eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.variant == other.variant && self.settings == other.settings
    }
}
