use pagebloc_model::{ComponentConfig, Layout};
use pagebloc_render::{
    builtin_catalog, DiagnosticReason, InstructionBody, RenderEngine, RenderMode, ThemeContext,
};
use pagebloc_types::PageKind;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn engine() -> RenderEngine {
    RenderEngine::new(Arc::new(builtin_catalog().unwrap()))
}

fn preview_engine() -> RenderEngine {
    RenderEngine::with_mode(Arc::new(builtin_catalog().unwrap()), RenderMode::Preview)
}

fn valid_heading(text: &str) -> ComponentConfig {
    ComponentConfig::new("heading", "page").with_setting("text", text)
}

// ── Order preservation under degradation ─────────────────────────

#[test]
fn skipped_entries_never_shift_the_survivors() {
    let a = valid_heading("A");
    let b = ComponentConfig::new("retired_widget", "default");
    let c = valid_heading("C");
    let layout = Layout::from_entries(vec![a.clone(), b.clone(), c.clone()]);

    let plan = engine().render(&layout, &ThemeContext::default());

    assert_eq!(plan.rendered_ids(), vec![a.id, c.id]);
    assert_eq!(plan.diagnostics.len(), 1);
    assert_eq!(plan.diagnostics[0].component_id, b.id);
    assert_eq!(plan.diagnostics[0].reason, DiagnosticReason::UnknownKind);
}

#[test]
fn empty_layout_renders_an_empty_plan() {
    let plan = engine().render(&Layout::new(), &ThemeContext::default());
    assert!(plan.instructions.is_empty());
    assert!(plan.diagnostics.is_empty());
}

// ── Unknown kinds ────────────────────────────────────────────────

#[test]
fn unknown_kind_is_invisible_but_diagnosed() {
    let layout = Layout::from_entries(vec![ComponentConfig::new("retired_widget", "default")]);
    let plan = engine().render(&layout, &ThemeContext::default());

    assert!(plan.instructions.is_empty());
    assert!(plan.has_skips());
}

// ── Schema-invalid entries ───────────────────────────────────────

#[test]
fn invalid_entry_is_skipped_in_public_mode() {
    // heading without its required text
    let broken = ComponentConfig::new("heading", "page");
    let ok = valid_heading("still here");
    let layout = Layout::from_entries(vec![broken.clone(), ok.clone()]);

    let plan = engine().render(&layout, &ThemeContext::default());

    assert_eq!(plan.rendered_ids(), vec![ok.id]);
    assert!(matches!(
        plan.diagnostics[0].reason,
        DiagnosticReason::SchemaInvalid(_)
    ));
}

#[test]
fn invalid_entry_becomes_a_placeholder_in_preview_mode() {
    let broken = ComponentConfig::new("heading", "page");
    let layout = Layout::from_entries(vec![broken.clone()]);

    let plan = preview_engine().render(&layout, &ThemeContext::default());

    assert_eq!(plan.instructions.len(), 1);
    assert_eq!(plan.instructions[0].component_id, broken.id);
    let InstructionBody::Placeholder { errors } = &plan.instructions[0].body else {
        panic!("expected a placeholder");
    };
    assert!(!errors.is_empty());
    // The diagnostic is still emitted alongside the placeholder.
    assert!(plan.has_skips());
}

#[test]
fn undeclared_variant_invalidates_the_entry() {
    let layout = Layout::from_entries(vec![
        ComponentConfig::new("heading", "marquee").with_setting("text", "hi"),
    ]);
    let plan = engine().render(&layout, &ThemeContext::default());
    assert!(plan.instructions.is_empty());
}

// ── Field-level degradation ──────────────────────────────────────

#[test]
fn malformed_theme_color_falls_back_without_skipping() {
    let entry = valid_heading("Title").with_setting("color", "not-a-color");
    let layout = Layout::from_entries(vec![entry.clone()]);
    let theme = ThemeContext::default();

    let plan = engine().render(&layout, &theme);

    assert_eq!(plan.rendered_ids(), vec![entry.id]);
    let InstructionBody::Component { props } = &plan.instructions[0].body else {
        panic!("expected a component");
    };
    assert_eq!(props["color"], serde_json::json!(theme.text_color));
    assert!(matches!(
        plan.diagnostics[0].reason,
        DiagnosticReason::FieldDegraded(_)
    ));
}

#[test]
fn valid_color_overrides_the_ambient_default() {
    let entry = valid_heading("Title").with_setting("color", "#AB12CD");
    let layout = Layout::from_entries(vec![entry]);

    let plan = engine().render(&layout, &ThemeContext::default());

    let InstructionBody::Component { props } = &plan.instructions[0].body else {
        panic!("expected a component");
    };
    assert_eq!(props["color"], serde_json::json!("#AB12CD"));
}

#[test]
fn insecure_optional_url_renders_as_no_image() {
    let entry = ComponentConfig::new("header", "standard")
        .with_setting("title", "My Shop")
        .with_setting("logo_url", "http://cdn.example.com/logo.png");
    let layout = Layout::from_entries(vec![entry.clone()]);

    let plan = engine().render(&layout, &ThemeContext::default());

    assert_eq!(plan.rendered_ids(), vec![entry.id]);
    let InstructionBody::Component { props } = &plan.instructions[0].body else {
        panic!("expected a component");
    };
    assert!(!props.contains_key("logo_url"));
}

#[test]
fn insecure_required_url_invalidates_the_entry() {
    let layout = Layout::from_entries(vec![ComponentConfig::new("image", "inset")
        .with_setting("url", "http://example.com/photo.jpg")]);

    let plan = engine().render(&layout, &ThemeContext::default());

    assert!(plan.instructions.is_empty());
    assert!(plan.has_skips());
}

// ── Ambient theme cascade ────────────────────────────────────────

#[test]
fn theme_is_ambient_to_every_entry() {
    let theme = ThemeContext {
        background_color: "#0A0A0A".to_string(),
        ..ThemeContext::default()
    };
    let layout = Layout::from_entries(vec![
        ComponentConfig::new("header", "standard").with_setting("title", "Shop"),
        ComponentConfig::new("footer", "standard"),
    ]);

    let plan = engine().render(&layout, &theme);

    for instruction in &plan.instructions {
        let InstructionBody::Component { props } = &instruction.body else {
            panic!("expected components");
        };
        assert_eq!(props["background_color"], serde_json::json!("#0A0A0A"));
    }
}

// ── Defaults render cleanly ──────────────────────────────────────

#[test]
fn every_default_layout_renders_without_diagnostics() {
    let engine = engine();
    let theme = ThemeContext::default();
    for kind in PageKind::ALL {
        let layout = pagebloc_defaults::default_layout(kind);
        let plan = engine.render(&layout, &theme);
        assert_eq!(
            plan.instructions.len(),
            layout.len(),
            "{kind} default did not fully render"
        );
        assert!(plan.diagnostics.is_empty(), "{kind} default produced diagnostics");
    }
}
