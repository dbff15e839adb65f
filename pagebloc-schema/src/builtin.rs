//! The builtin component catalog.
//!
//! Variants are strictly presentational: a component whose data shape
//! differs gets its own kind (`hero` carries its own image and
//! call-to-action fields instead of being an image-background variant of
//! `heading`). This keeps every schema a function of the kind alone.

use crate::field::FieldSpec;
use crate::registry::{ComponentSchema, SchemaRegistry};

/// Builds the registry of builtin component kinds.
///
/// Called once at startup; the result is shared read-only for the life of
/// the process.
#[must_use]
pub fn builtin_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    for schema in builtin_schemas() {
        // Kinds below are distinct by construction.
        let _ = registry.register(schema);
    }
    registry
}

fn builtin_schemas() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("header")
            .variant("standard")
            .variant("centered")
            .variant("minimal")
            .field(FieldSpec::text("title"))
            .field(FieldSpec::optional_url("logo_url"))
            .field(FieldSpec::theme_color("background_color"))
            .field(FieldSpec::bool("show_navigation")),
        ComponentSchema::new("hero")
            .variant("image")
            .variant("split")
            .field(FieldSpec::text("title"))
            .field(FieldSpec::optional_text("subtitle"))
            .field(FieldSpec::url("image_url"))
            .field(FieldSpec::optional_text("cta_label"))
            .field(FieldSpec::optional_url("cta_link"))
            .field(FieldSpec::theme_color("overlay_color")),
        ComponentSchema::new("heading")
            .variant("page")
            .variant("section")
            .field(FieldSpec::text("text"))
            .field(FieldSpec::theme_color("color")),
        ComponentSchema::new("text")
            .variant("paragraph")
            .variant("lead")
            .variant("quote")
            .field(FieldSpec::text("content")),
        ComponentSchema::new("image")
            .variant("full_width")
            .variant("inset")
            .field(FieldSpec::url("url"))
            .field(FieldSpec::optional_text("alt_text"))
            .field(FieldSpec::optional_text("caption")),
        ComponentSchema::new("product_grid")
            .variant("grid")
            .variant("carousel")
            .field(FieldSpec::optional_text("title"))
            .field(FieldSpec::number_in("columns", 1.0, 6.0))
            .field(FieldSpec::number_in("max_items", 1.0, 48.0)),
        ComponentSchema::new("product_detail")
            .variant("standard")
            .variant("gallery_left")
            .field(FieldSpec::bool("show_related"))
            .field(FieldSpec::theme_color("accent_color")),
        ComponentSchema::new("contact_form")
            .variant("simple")
            .variant("detailed")
            .field(FieldSpec::optional_text("heading"))
            .field(FieldSpec::optional_text("success_message")),
        ComponentSchema::new("footer")
            .variant("standard")
            .variant("minimal")
            .field(FieldSpec::optional_text("text"))
            .field(FieldSpec::bool("show_social"))
            .field(FieldSpec::theme_color("background_color")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_all_kinds() {
        let reg = builtin_registry();
        assert_eq!(
            reg.kinds(),
            vec![
                "contact_form",
                "footer",
                "header",
                "heading",
                "hero",
                "image",
                "product_detail",
                "product_grid",
                "text",
            ]
        );
    }

    #[test]
    fn every_builtin_kind_declares_variants() {
        let reg = builtin_registry();
        for kind in reg.kinds() {
            let schema = reg.lookup(kind).unwrap();
            assert!(!schema.variants().is_empty(), "{kind} has no variants");
        }
    }
}
