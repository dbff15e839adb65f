use pagebloc_defaults::default_layout;
use pagebloc_schema::{builtin_registry, EntryStatus};
use pagebloc_types::PageKind;
use pretty_assertions::assert_eq;

// ── Defaults validate against the builtin registry ───────────────

#[test]
fn every_default_entry_is_schema_valid() {
    let registry = builtin_registry();
    for kind in PageKind::ALL {
        let layout = default_layout(kind);
        for entry in &layout {
            assert_eq!(
                registry.check_entry(entry),
                EntryStatus::Valid,
                "default {kind} entry `{}` failed validation",
                entry.kind
            );
        }
    }
}

// ── Round trip through the persisted form ────────────────────────

#[test]
fn default_layouts_round_trip_losslessly() {
    for kind in PageKind::ALL {
        let layout = default_layout(kind);
        let restored =
            pagebloc_model::Layout::from_value(&layout.to_value()).expect("round trip failed");
        assert_eq!(restored, layout);
    }
}

// ── Determinism of content ───────────────────────────────────────

#[test]
fn provisioning_and_reset_paths_see_identical_content() {
    // Both paths call through `default_layout`; this pins the contract
    // that there is no second copy of the canonical content anywhere.
    for kind in PageKind::ALL {
        let provisioned = default_layout(kind);
        let reset = default_layout(kind);
        assert!(provisioned.content_eq(&reset));
    }
}

#[test]
fn home_default_opens_with_header_and_hero() {
    let layout = default_layout(PageKind::Home);
    let kinds: Vec<&str> = layout.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec!["header", "hero", "product_grid", "footer"]);
}
