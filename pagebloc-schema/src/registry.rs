//! Schema registry and settings validation.
//!
//! The registry is built once at process start and never mutated
//! afterwards; it is safe to share behind an `Arc` across any number of
//! concurrent requests. Lookups are deterministic (BTreeMap) and an
//! absent kind is a first-class outcome, not an exception path.

use crate::field::{is_secure_url, is_valid_color, FieldSpec, FieldType};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while building a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("component kind already registered: {0}")]
    DuplicateKind(String),

    #[error("component kind `{0}` declares no variants")]
    NoVariants(String),
}

/// A single settings-validation failure, addressed to the offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field `{field}` is missing")]
    MissingField { field: String },

    #[error("field `{field}` has the wrong type, expected {expected:?}")]
    WrongType { field: String, expected: FieldType },

    #[error("field `{field}` must not be empty")]
    EmptyText { field: String },

    #[error("field `{field}` must be an https URL, got `{value}`")]
    InsecureUrl { field: String, value: String },

    #[error("field `{field}` is not a #RGB or #RRGGBB color: `{value}`")]
    InvalidColor { field: String, value: String },

    #[error("field `{field}` value {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("variant `{variant}` is not declared for this kind (allowed: {allowed:?})")]
    UndeclaredVariant {
        variant: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// The settings field this error is addressed to, if any.
    /// Variant errors concern the entry as a whole.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::WrongType { field, .. }
            | ValidationError::EmptyText { field }
            | ValidationError::InsecureUrl { field, .. }
            | ValidationError::InvalidColor { field, .. }
            | ValidationError::OutOfRange { field, .. } => Some(field),
            ValidationError::UndeclaredVariant { .. } => None,
        }
    }
}

/// Validation outcome for one layout entry. Terminal for render purposes.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryStatus {
    /// Kind known, variant declared, settings satisfy the schema.
    Valid,
    /// Kind absent from the registry (retired or not-yet-known).
    UnknownKind,
    /// Kind known but variant or settings fail the schema.
    SchemaInvalid(Vec<ValidationError>),
}

/// Per-kind definition of the accepted configuration shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSchema {
    kind: String,
    variants: Vec<String>,
    fields: Vec<FieldSpec>,
}

impl ComponentSchema {
    /// Starts a schema declaration for a component kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            variants: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Declares an allowed variant. The first declared variant is the
    /// kind's default.
    #[must_use]
    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.variants.push(name.into());
        self
    }

    /// Declares a settings field.
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// The component kind this schema describes.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Declared variants, in declaration order.
    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// The kind's default variant.
    #[must_use]
    pub fn default_variant(&self) -> &str {
        self.variants.first().map(String::as_str).unwrap_or("default")
    }

    /// Declared fields.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field declaration by name.
    #[must_use]
    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates a variant and settings bag against this schema.
    ///
    /// Pure function: no side effects, no registry mutation. Returns every
    /// failure rather than stopping at the first, so the editor can show
    /// all of them at once. Keys in the bag that the schema does not
    /// declare are ignored; unknown data is preserved, not rejected.
    #[must_use]
    pub fn validate(&self, variant: &str, settings: &Map<String, Value>) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.variants.iter().any(|v| v == variant) {
            errors.push(ValidationError::UndeclaredVariant {
                variant: variant.to_string(),
                allowed: self.variants.clone(),
            });
        }

        for spec in &self.fields {
            match settings.get(&spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        errors.push(ValidationError::MissingField {
                            field: spec.name.clone(),
                        });
                    }
                }
                Some(value) => validate_field(spec, value, &mut errors),
            }
        }

        errors
    }

    /// True if this failure may degrade at render time instead of
    /// invalidating the whole entry: either the field is optional (an
    /// unusable value renders the same as an absent one) or it carries a
    /// theme fallback.
    #[must_use]
    pub fn is_degradable(&self, error: &ValidationError) -> bool {
        match error.field().and_then(|f| self.field_spec(f)) {
            Some(spec) => !spec.required || spec.theme_fallback,
            None => false,
        }
    }
}

fn validate_field(spec: &FieldSpec, value: &Value, errors: &mut Vec<ValidationError>) {
    match spec.field_type {
        FieldType::Text => match value.as_str() {
            Some(s) => {
                if spec.required && s.trim().is_empty() {
                    errors.push(ValidationError::EmptyText {
                        field: spec.name.clone(),
                    });
                }
            }
            None => errors.push(ValidationError::WrongType {
                field: spec.name.clone(),
                expected: FieldType::Text,
            }),
        },
        FieldType::Url => match value.as_str() {
            Some(s) => {
                if !is_secure_url(s) {
                    errors.push(ValidationError::InsecureUrl {
                        field: spec.name.clone(),
                        value: s.to_string(),
                    });
                }
            }
            None => errors.push(ValidationError::WrongType {
                field: spec.name.clone(),
                expected: FieldType::Url,
            }),
        },
        FieldType::Color => match value.as_str() {
            Some(s) => {
                if !is_valid_color(s) {
                    errors.push(ValidationError::InvalidColor {
                        field: spec.name.clone(),
                        value: s.to_string(),
                    });
                }
            }
            None => errors.push(ValidationError::WrongType {
                field: spec.name.clone(),
                expected: FieldType::Color,
            }),
        },
        FieldType::Number => match value.as_f64() {
            Some(n) => {
                if let Some((min, max)) = spec.range {
                    if n < min || n > max {
                        errors.push(ValidationError::OutOfRange {
                            field: spec.name.clone(),
                            value: n,
                            min,
                            max,
                        });
                    }
                }
            }
            None => errors.push(ValidationError::WrongType {
                field: spec.name.clone(),
                expected: FieldType::Number,
            }),
        },
        FieldType::Bool => {
            if !value.is_boolean() {
                errors.push(ValidationError::WrongType {
                    field: spec.name.clone(),
                    expected: FieldType::Bool,
                });
            }
        }
    }
}

/// A registry of component schemas keyed by kind.
///
/// Populated once at startup, read-only afterwards. Both the authoring
/// advisory check and the render-time check consult the same instance;
/// there is no second copy to drift from.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, ComponentSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema. Fails on duplicate kinds and on schemas with
    /// no declared variants.
    pub fn register(&mut self, schema: ComponentSchema) -> RegistryResult<()> {
        if schema.variants.is_empty() {
            return Err(RegistryError::NoVariants(schema.kind.clone()));
        }
        if self.schemas.contains_key(&schema.kind) {
            return Err(RegistryError::DuplicateKind(schema.kind.clone()));
        }
        self.schemas.insert(schema.kind.clone(), schema);
        Ok(())
    }

    /// Looks up the schema for a kind. Absence is an expected, handled
    /// outcome; retired kinds linger in persisted layouts.
    #[must_use]
    pub fn lookup(&self, kind: &str) -> Option<&ComponentSchema> {
        self.schemas.get(kind)
    }

    /// Classifies one entry's kind/variant/settings.
    #[must_use]
    pub fn check(&self, kind: &str, variant: &str, settings: &Map<String, Value>) -> EntryStatus {
        match self.lookup(kind) {
            None => EntryStatus::UnknownKind,
            Some(schema) => {
                let errors = schema.validate(variant, settings);
                if errors.is_empty() {
                    EntryStatus::Valid
                } else {
                    EntryStatus::SchemaInvalid(errors)
                }
            }
        }
    }

    /// Classifies a layout entry. Convenience over [`SchemaRegistry::check`].
    #[must_use]
    pub fn check_entry(&self, entry: &pagebloc_model::ComponentConfig) -> EntryStatus {
        self.check(&entry.kind, &entry.variant, &entry.settings)
    }

    /// Registered kinds in deterministic order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True if no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
