//! Render plan types.

use pagebloc_schema::ValidationError;
use pagebloc_types::ComponentId;
use serde::Serialize;
use serde_json::{Map, Value};

/// Who the render is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// The public storefront: invalid entries are invisible.
    #[default]
    Public,
    /// The authoring preview: invalid entries render as visible
    /// placeholder markers so the author can find them.
    Preview,
}

/// One instruction in the plan, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderInstruction {
    pub component_id: ComponentId,
    pub kind: String,
    pub variant: String,
    pub body: InstructionBody,
}

/// What to render for an instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "render", rename_all = "snake_case")]
pub enum InstructionBody {
    /// A component with fully resolved props: ambient colors applied,
    /// unusable optional values dropped.
    Component { props: Map<String, Value> },
    /// A visible marker standing in for an invalid entry. Preview only.
    Placeholder { errors: Vec<String> },
}

/// Why an entry was skipped or degraded. Developer-visible, never shown
/// to storefront visitors.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticReason {
    /// The kind has no schema in the current registry.
    UnknownKind,
    /// The entry failed schema validation and could not degrade.
    SchemaInvalid(Vec<ValidationError>),
    /// A single field was dropped or replaced by an ambient fallback;
    /// the entry itself still rendered.
    FieldDegraded(ValidationError),
}

/// A diagnostic for one entry, addressed so the editor can deep-link to
/// the offender.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDiagnostic {
    pub component_id: ComponentId,
    pub kind: String,
    pub reason: DiagnosticReason,
}

/// The ordered output of one page render.
///
/// Instructions appear in layout order; skipping an entry never shifts
/// the relative order of the survivors.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    pub instructions: Vec<RenderInstruction>,
    pub diagnostics: Vec<RenderDiagnostic>,
}

impl RenderPlan {
    /// Component ids that produced instructions, in render order.
    #[must_use]
    pub fn rendered_ids(&self) -> Vec<ComponentId> {
        self.instructions.iter().map(|i| i.component_id).collect()
    }

    /// True if any entry was skipped outright (not merely degraded).
    #[must_use]
    pub fn has_skips(&self) -> bool {
        self.diagnostics.iter().any(|d| {
            matches!(
                d.reason,
                DiagnosticReason::UnknownKind | DiagnosticReason::SchemaInvalid(_)
            )
        })
    }
}
