//! Render-plan engine for pagebloc layouts.
//!
//! Consumes a persisted layout (possibly stale, partially invalid, or
//! authored against an older component set) and produces an ordered
//! render plan. The contract is graceful degradation per entry, never
//! failure per page:
//!
//! - unknown component kinds are skipped with a developer diagnostic
//! - schema-invalid entries are skipped in public renders, or replaced
//!   by a visible placeholder in preview renders
//! - a malformed color in a theme-backed field falls back to the ambient
//!   theme color; an insecure image URL renders as no image
//! - surviving entries keep their original relative order
//!
//! Theme context is resolved once per page and made ambient to every
//! entry's renderer; it is never passed per-entry by the caller.

mod builtin;
mod catalog;
mod engine;
mod plan;
mod theme;

pub use builtin::builtin_catalog;
pub use catalog::{CatalogBuilder, CatalogError, CatalogResult, ComponentCatalog, ComponentRenderer};
pub use engine::RenderEngine;
pub use plan::{
    DiagnosticReason, InstructionBody, RenderDiagnostic, RenderInstruction, RenderMode, RenderPlan,
};
pub use theme::ThemeContext;
