//! The per-entry render pipeline.

use crate::catalog::ComponentCatalog;
use crate::plan::{
    DiagnosticReason, InstructionBody, RenderDiagnostic, RenderInstruction, RenderMode, RenderPlan,
};
use crate::theme::ThemeContext;
use pagebloc_model::Layout;
use std::sync::Arc;
use tracing::{debug, warn};

/// Renders layouts into plans, one entry at a time.
///
/// Each entry moves `Pending -> {Valid, UnknownKind, SchemaInvalid}`
/// independently; one bad entry never takes the page down. Entries
/// render in layout order, and skipping one does not shift the relative
/// order of the survivors.
pub struct RenderEngine {
    catalog: Arc<ComponentCatalog>,
    mode: RenderMode,
}

impl RenderEngine {
    /// Creates a public-mode engine.
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self::with_mode(catalog, RenderMode::Public)
    }

    /// Creates an engine for the given mode. Preview mode substitutes
    /// visible placeholders for invalid entries; it is only ever used in
    /// authoring contexts, never on the public render path.
    pub fn with_mode(catalog: Arc<ComponentCatalog>, mode: RenderMode) -> Self {
        Self { catalog, mode }
    }

    /// The engine's render mode.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Produces the render plan for a layout under an ambient theme.
    ///
    /// The theme is resolved once per call and shared by every entry's
    /// renderer. Schema and ambient-value problems are absorbed here:
    /// they surface as diagnostics and fallbacks, never as errors to the
    /// caller.
    #[must_use]
    pub fn render(&self, layout: &Layout, theme: &ThemeContext) -> RenderPlan {
        let mut plan = RenderPlan::default();

        for entry in layout {
            let Some((schema, renderer)) = self.catalog.dispatch(&entry.kind) else {
                warn!(
                    "Skipping component {} with unknown kind `{}`",
                    entry.id, entry.kind
                );
                plan.diagnostics.push(RenderDiagnostic {
                    component_id: entry.id,
                    kind: entry.kind.clone(),
                    reason: DiagnosticReason::UnknownKind,
                });
                continue;
            };

            let errors = schema.validate(&entry.variant, &entry.settings);
            let fatal: Vec<_> = errors
                .iter()
                .filter(|e| !schema.is_degradable(e))
                .cloned()
                .collect();

            if !fatal.is_empty() {
                debug!(
                    "Component {} ({}) failed validation: {} error(s)",
                    entry.id,
                    entry.kind,
                    errors.len()
                );
                if self.mode == RenderMode::Preview {
                    plan.instructions.push(RenderInstruction {
                        component_id: entry.id,
                        kind: entry.kind.clone(),
                        variant: entry.variant.clone(),
                        body: InstructionBody::Placeholder {
                            errors: errors.iter().map(ToString::to_string).collect(),
                        },
                    });
                }
                plan.diagnostics.push(RenderDiagnostic {
                    component_id: entry.id,
                    kind: entry.kind.clone(),
                    reason: DiagnosticReason::SchemaInvalid(errors),
                });
                continue;
            }

            // Degradable failures: drop the field so the renderer treats
            // it as absent (theme fallback or render-without), and record
            // what happened.
            let mut entry = entry.clone();
            for error in errors {
                if let Some(field) = error.field() {
                    entry.settings.remove(field);
                }
                plan.diagnostics.push(RenderDiagnostic {
                    component_id: entry.id,
                    kind: entry.kind.clone(),
                    reason: DiagnosticReason::FieldDegraded(error),
                });
            }

            let props = renderer.render(&entry, schema, theme);
            plan.instructions.push(RenderInstruction {
                component_id: entry.id,
                kind: entry.kind.clone(),
                variant: entry.variant.clone(),
                body: InstructionBody::Component { props },
            });
        }

        plan
    }
}
