//! The component dispatch table.
//!
//! Replaces "look the component class up by string" with a typed table
//! built once at startup: kind -> {schema, renderer}. An unknown kind is
//! a checked, first-class outcome, never an exception. Building the
//! table is also where drift is caught: a renderer without a schema, or
//! a schema without a renderer, refuses to build.

use crate::theme::ThemeContext;
use pagebloc_model::ComponentConfig;
use pagebloc_schema::{ComponentSchema, SchemaRegistry};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("renderer registered for kind `{0}`, which has no schema")]
    RendererWithoutSchema(String),

    #[error("schema registered for kind `{0}`, which has no renderer")]
    MissingRenderer(String),

    #[error("renderer already registered for kind `{0}`")]
    DuplicateRenderer(String),
}

/// Renders one valid component configuration into resolved props.
///
/// Implementations receive settings that already passed schema validation
/// (minus any degraded optional fields) and the ambient theme. They must
/// not fail: producing props for a valid entry is total.
pub trait ComponentRenderer: Send + Sync {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value>;
}

struct RegisteredComponent {
    renderer: Box<dyn ComponentRenderer>,
}

/// The kind -> {schema, renderer} dispatch table.
///
/// Holds the one `SchemaRegistry` both validation sites share; read-only
/// after `build`, safe behind an `Arc` across requests.
pub struct ComponentCatalog {
    registry: Arc<SchemaRegistry>,
    components: BTreeMap<String, RegisteredComponent>,
}

impl ComponentCatalog {
    /// Starts building a catalog over a schema registry.
    #[must_use]
    pub fn builder(registry: Arc<SchemaRegistry>) -> CatalogBuilder {
        CatalogBuilder {
            registry,
            components: BTreeMap::new(),
        }
    }

    /// The shared schema registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }

    /// Looks up the schema and renderer for a kind. `None` means the
    /// kind is unknown to this process, an expected outcome for
    /// persisted layouts that outlived their components.
    #[must_use]
    pub fn dispatch(&self, kind: &str) -> Option<(&ComponentSchema, &dyn ComponentRenderer)> {
        let schema = self.registry.lookup(kind)?;
        let component = self.components.get(kind)?;
        Some((schema, component.renderer.as_ref()))
    }

    /// Registered kinds in deterministic order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }
}

/// Builder enforcing schema/renderer agreement at startup.
pub struct CatalogBuilder {
    registry: Arc<SchemaRegistry>,
    components: BTreeMap<String, RegisteredComponent>,
}

impl CatalogBuilder {
    /// Registers the renderer for a kind. The kind must have a schema.
    pub fn renderer(
        mut self,
        kind: &str,
        renderer: Box<dyn ComponentRenderer>,
    ) -> CatalogResult<Self> {
        if self.registry.lookup(kind).is_none() {
            return Err(CatalogError::RendererWithoutSchema(kind.to_string()));
        }
        if self.components.contains_key(kind) {
            return Err(CatalogError::DuplicateRenderer(kind.to_string()));
        }
        self.components
            .insert(kind.to_string(), RegisteredComponent { renderer });
        Ok(self)
    }

    /// Finishes the catalog; every schema kind must have a renderer.
    pub fn build(self) -> CatalogResult<ComponentCatalog> {
        for kind in self.registry.kinds() {
            if !self.components.contains_key(kind) {
                return Err(CatalogError::MissingRenderer(kind.to_string()));
            }
        }
        Ok(ComponentCatalog {
            registry: self.registry,
            components: self.components,
        })
    }
}
