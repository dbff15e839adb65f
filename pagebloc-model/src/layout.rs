use crate::ComponentConfig;
use pagebloc_types::ComponentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Field name for the settings bag at the definition/storage boundary.
pub const SETTINGS_KEY: &str = "settings";

/// Field name the storefront render path expects for the same bag.
pub const STOREFRONT_SETTINGS_KEY: &str = "properties";

/// Structural problems that make a layout impossible to address.
///
/// These are the only construction failures: an entry whose settings are
/// wrong for its schema is still a perfectly constructible entry. Each
/// variant names the entry index so the caller can point the author at
/// the exact offender.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("layout must be a JSON array, got {found}")]
    NotAnArray { found: &'static str },

    #[error("entry {index} is not a JSON object")]
    EntryNotAnObject { index: usize },

    #[error("entry {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("entry {index} is malformed: {reason}")]
    MalformedEntry { index: usize, reason: String },

    #[error("entry {index} duplicates component id {id}")]
    DuplicateId { index: usize, id: ComponentId },
}

/// An ordered sequence of component configurations; the unit of
/// persistence and replacement for one page.
///
/// Order is semantically meaningful (top-to-bottom render order) and is
/// preserved through every read/write round trip. Zero entries is a valid
/// layout (an empty page).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    entries: Vec<ComponentConfig>,
}

impl Layout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a layout from an ordered list of entries.
    ///
    /// Callers constructing layouts in code are trusted to keep ids
    /// unique; untyped input goes through [`Layout::from_value`], which
    /// checks.
    #[must_use]
    pub fn from_entries(entries: Vec<ComponentConfig>) -> Self {
        Self { entries }
    }

    /// Constructs a layout from untyped JSON.
    ///
    /// Never rejects structurally-plausible input: entries with settings
    /// that fail schema validation, unknown kinds, or undeclared variants
    /// all construct fine. The hard failures are collected, not
    /// fail-fast, so the caller gets every problem in one pass:
    /// - the value is not an array
    /// - an entry is not an object, or lacks `id`/`type` entirely
    /// - an entry's `id` does not parse, or `type` is not a string
    /// - two entries share an id
    pub fn from_value(value: &Value) -> Result<Self, Vec<StructuralError>> {
        let Some(items) = value.as_array() else {
            return Err(vec![StructuralError::NotAnArray {
                found: json_type_name(value),
            }]);
        };

        let mut errors = Vec::new();
        let mut entries = Vec::with_capacity(items.len());
        let mut seen = HashSet::new();

        for (index, raw) in items.iter().enumerate() {
            let Some(obj) = raw.as_object() else {
                errors.push(StructuralError::EntryNotAnObject { index });
                continue;
            };

            let mut missing = false;
            for field in ["id", "type"] {
                if !obj.contains_key(field) {
                    errors.push(StructuralError::MissingField { index, field });
                    missing = true;
                }
            }
            if missing {
                continue;
            }

            match serde_json::from_value::<ComponentConfig>(raw.clone()) {
                Ok(cfg) => {
                    if seen.insert(cfg.id) {
                        entries.push(cfg);
                    } else {
                        errors.push(StructuralError::DuplicateId { index, id: cfg.id });
                    }
                }
                Err(e) => {
                    errors.push(StructuralError::MalformedEntry {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(Self { entries })
        } else {
            Err(errors)
        }
    }

    /// Serializes to the canonical stored form: an ordered array of
    /// `{id, type, variant, settings}` objects.
    ///
    /// `from_value(to_value(layout))` reproduces the layout exactly,
    /// including entries whose settings are schema-invalid; raw settings
    /// are never dropped or normalized.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.to_value_with_settings_key(SETTINGS_KEY)
    }

    /// Serializes to the storefront-facing form, which spells the
    /// settings bag `properties`.
    ///
    /// This is a pure renaming transform: ordering, ids, and settings
    /// content are untouched. The two spellings are one semantic field;
    /// nothing downstream may treat them as independent data.
    #[must_use]
    pub fn to_storefront_value(&self) -> Value {
        self.to_value_with_settings_key(STOREFRONT_SETTINGS_KEY)
    }

    fn to_value_with_settings_key(&self, settings_key: &str) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|e| {
                    let mut obj = Map::new();
                    obj.insert("id".to_string(), Value::String(e.id.to_string()));
                    obj.insert("type".to_string(), Value::String(e.kind.clone()));
                    obj.insert("variant".to_string(), Value::String(e.variant.clone()));
                    obj.insert(settings_key.to_string(), Value::Object(e.settings.clone()));
                    Value::Object(obj)
                })
                .collect(),
        )
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the layout has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in render order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentConfig> {
        self.entries.iter()
    }

    /// Entries in render order, as a slice.
    #[must_use]
    pub fn entries(&self) -> &[ComponentConfig] {
        &self.entries
    }

    /// Consumes the layout, yielding its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ComponentConfig> {
        self.entries
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: ComponentId) -> Option<&ComponentConfig> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ComponentConfig) {
        self.entries.push(entry);
    }

    /// True if both layouts carry the same `type`/`variant`/`settings`
    /// sequence, ignoring ids.
    ///
    /// Two independent `reset_to_default` calls yield layouts that are
    /// equal under this comparison but carry distinct ids.
    #[must_use]
    pub fn content_eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(other.entries.iter())
                .all(|(a, b)| a.content_eq(b))
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a ComponentConfig;
    type IntoIter = std::slice::Iter<'a, ComponentConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
