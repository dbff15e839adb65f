//! Builtin renderers for the builtin component catalog.
//!
//! Renderers emit resolved props, not markup; markup belongs to the
//! storefront templates, outside this subsystem. "Resolved" means
//! ambient theme colors and fonts are already applied and unusable
//! optional values are already gone, so a template can consume the props
//! without re-validating anything.

use crate::catalog::{CatalogResult, ComponentCatalog, ComponentRenderer};
use crate::theme::ThemeContext;
use pagebloc_model::ComponentConfig;
use pagebloc_schema::{builtin_registry, ComponentSchema};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Builds the catalog of builtin components: the builtin schema registry
/// plus one renderer per kind.
pub fn builtin_catalog() -> CatalogResult<ComponentCatalog> {
    ComponentCatalog::builder(Arc::new(builtin_registry()))
        .renderer("header", Box::new(HeaderRenderer))?
        .renderer("hero", Box::new(HeroRenderer))?
        .renderer("heading", Box::new(HeadingRenderer))?
        .renderer("text", Box::new(TextRenderer))?
        .renderer("image", Box::new(ImageRenderer))?
        .renderer("product_grid", Box::new(ProductGridRenderer))?
        .renderer("product_detail", Box::new(ProductDetailRenderer))?
        .renderer("contact_form", Box::new(ContactFormRenderer))?
        .renderer("footer", Box::new(FooterRenderer))?
        .build()
}

/// Copies every schema-declared field that is present into the props.
/// Renderers then layer defaults and theme resolution on top.
fn declared_fields(entry: &ComponentConfig, schema: &ComponentSchema) -> Map<String, Value> {
    let mut props = Map::new();
    for spec in schema.fields() {
        if let Some(value) = entry.settings.get(&spec.name) {
            if !value.is_null() {
                props.insert(spec.name.clone(), value.clone());
            }
        }
    }
    props
}

struct HeaderRenderer;

impl ComponentRenderer for HeaderRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value> {
        let mut props = declared_fields(entry, schema);
        props.insert(
            "background_color".into(),
            json!(theme.resolve_color(
                entry.setting_str("background_color"),
                &theme.background_color
            )),
        );
        props
            .entry("show_navigation".to_string())
            .or_insert(json!(true));
        props.insert("font".into(), json!(theme.heading_font));
        props
    }
}

struct HeroRenderer;

impl ComponentRenderer for HeroRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value> {
        let mut props = declared_fields(entry, schema);
        props.insert(
            "overlay_color".into(),
            json!(theme.resolve_color(entry.setting_str("overlay_color"), &theme.primary_color)),
        );
        props.insert("font".into(), json!(theme.heading_font));
        props
    }
}

struct HeadingRenderer;

impl ComponentRenderer for HeadingRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value> {
        let mut props = declared_fields(entry, schema);
        props.insert(
            "color".into(),
            json!(theme.resolve_color(entry.setting_str("color"), &theme.text_color)),
        );
        props.insert("font".into(), json!(theme.heading_font));
        props
    }
}

struct TextRenderer;

impl ComponentRenderer for TextRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value> {
        let mut props = declared_fields(entry, schema);
        props.insert("color".into(), json!(theme.text_color));
        props.insert("font".into(), json!(theme.body_font));
        props
    }
}

struct ImageRenderer;

impl ComponentRenderer for ImageRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        _theme: &ThemeContext,
    ) -> Map<String, Value> {
        declared_fields(entry, schema)
    }
}

struct ProductGridRenderer;

impl ComponentRenderer for ProductGridRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value> {
        let mut props = declared_fields(entry, schema);
        props.entry("columns".to_string()).or_insert(json!(3));
        props.entry("max_items".to_string()).or_insert(json!(12));
        props.insert("accent_color".into(), json!(theme.primary_color));
        props
    }
}

struct ProductDetailRenderer;

impl ComponentRenderer for ProductDetailRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value> {
        let mut props = declared_fields(entry, schema);
        props
            .entry("show_related".to_string())
            .or_insert(json!(true));
        props.insert(
            "accent_color".into(),
            json!(theme.resolve_color(entry.setting_str("accent_color"), &theme.primary_color)),
        );
        props
    }
}

struct ContactFormRenderer;

impl ComponentRenderer for ContactFormRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value> {
        let mut props = declared_fields(entry, schema);
        props
            .entry("heading".to_string())
            .or_insert(json!("Contact us"));
        props
            .entry("success_message".to_string())
            .or_insert(json!("Thanks for your message. We'll be in touch."));
        props.insert("font".into(), json!(theme.body_font));
        props
    }
}

struct FooterRenderer;

impl ComponentRenderer for FooterRenderer {
    fn render(
        &self,
        entry: &ComponentConfig,
        schema: &ComponentSchema,
        theme: &ThemeContext,
    ) -> Map<String, Value> {
        let mut props = declared_fields(entry, schema);
        props.insert(
            "background_color".into(),
            json!(theme.resolve_color(
                entry.setting_str("background_color"),
                &theme.background_color
            )),
        );
        props.entry("show_social".to_string()).or_insert(json!(false));
        props
    }
}
