//! Canonical default page layouts.
//!
//! This crate is the only place default-layout content lives. Shop
//! provisioning, test fixtures, and "reset this page" all call
//! [`default_layout`], never an inline copy of the same literal content.
//! Two consumers with separately-maintained copies of a default layout
//! silently diverge the first time the default changes; routing every
//! caller through one function makes that impossible.
//!
//! Content is deterministic per page kind. Ids are not: every call mints
//! fresh component ids, because ids are render keys scoped to one page,
//! not content identity shared across shops.

use pagebloc_model::{ComponentConfig, Layout};
use pagebloc_types::PageKind;

/// Produces the canonical default layout for a page kind.
///
/// Same kind, same `type`/`variant`/`settings` sequence on every call;
/// fresh ids on every call.
#[must_use]
pub fn default_layout(kind: PageKind) -> Layout {
    match kind {
        PageKind::Home => home_layout(),
        PageKind::Catalog => catalog_layout(),
        PageKind::Product => product_layout(),
        PageKind::Contact => contact_layout(),
    }
}

fn home_layout() -> Layout {
    Layout::from_entries(vec![
        ComponentConfig::new("header", "standard")
            .with_setting("title", "My Shop")
            .with_setting("show_navigation", true),
        ComponentConfig::new("hero", "image")
            .with_setting("title", "Welcome to my shop")
            .with_setting("subtitle", "Handpicked products, delivered to your door")
            .with_setting("image_url", "https://cdn.pagebloc.app/defaults/hero.jpg")
            .with_setting("cta_label", "Browse the catalog"),
        ComponentConfig::new("product_grid", "grid")
            .with_setting("title", "Featured products")
            .with_setting("columns", 3)
            .with_setting("max_items", 6),
        ComponentConfig::new("footer", "standard")
            .with_setting("show_social", true),
    ])
}

fn catalog_layout() -> Layout {
    Layout::from_entries(vec![
        ComponentConfig::new("header", "standard")
            .with_setting("title", "My Shop")
            .with_setting("show_navigation", true),
        ComponentConfig::new("heading", "page").with_setting("text", "Our products"),
        ComponentConfig::new("product_grid", "grid")
            .with_setting("columns", 4)
            .with_setting("max_items", 24),
        ComponentConfig::new("footer", "standard")
            .with_setting("show_social", true),
    ])
}

fn product_layout() -> Layout {
    Layout::from_entries(vec![
        ComponentConfig::new("header", "standard")
            .with_setting("title", "My Shop")
            .with_setting("show_navigation", true),
        ComponentConfig::new("product_detail", "standard")
            .with_setting("show_related", true),
        ComponentConfig::new("footer", "minimal"),
    ])
}

fn contact_layout() -> Layout {
    Layout::from_entries(vec![
        ComponentConfig::new("header", "standard")
            .with_setting("title", "My Shop")
            .with_setting("show_navigation", true),
        ComponentConfig::new("heading", "page").with_setting("text", "Get in touch"),
        ComponentConfig::new("text", "paragraph").with_setting(
            "content",
            "We would love to hear from you. Send us a message and we will reply \
             as soon as we can.",
        ),
        ComponentConfig::new("heading", "section").with_setting("text", "Opening hours"),
        ComponentConfig::new("text", "paragraph")
            .with_setting("content", "Monday to Friday, 9:00 – 17:00."),
    ])
}

/// True if a settings value equals the given JSON literal.
/// Test-support helper used by the fixture assertions.
#[doc(hidden)]
pub fn setting_is(cfg: &ComponentConfig, key: &str, expected: serde_json::Value) -> bool {
    cfg.settings.get(key) == Some(&expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_default_is_the_documented_five_entry_sequence() {
        let layout = default_layout(PageKind::Contact);
        let kinds: Vec<&str> = layout.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["header", "heading", "text", "heading", "text"]);
    }

    #[test]
    fn repeated_calls_are_content_identical_with_fresh_ids() {
        for kind in PageKind::ALL {
            let a = default_layout(kind);
            let b = default_layout(kind);
            assert!(a.content_eq(&b), "{kind} defaults diverged");
            for (ea, eb) in a.iter().zip(b.iter()) {
                assert_ne!(ea.id, eb.id, "{kind} reused a component id");
            }
        }
    }

    #[test]
    fn no_default_layout_is_empty() {
        for kind in PageKind::ALL {
            assert!(!default_layout(kind).is_empty(), "{kind} default is empty");
        }
    }

    #[test]
    fn home_hero_uses_a_secure_image_url() {
        let layout = default_layout(PageKind::Home);
        let hero = layout.iter().find(|e| e.kind == "hero").unwrap();
        assert!(setting_is(
            hero,
            "image_url",
            json!("https://cdn.pagebloc.app/defaults/hero.jpg")
        ));
    }
}
