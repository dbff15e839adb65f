//! Layout authoring service.
//!
//! Orchestrates read/replace/reset operations on a page's layout, scoped
//! by `(owner, page kind)`. Ownership resolution is a precondition check
//! on every operation, never a best-effort filter: an owner can only ever
//! address their own shop's pages.
//!
//! The asymmetry at this boundary is deliberate: structural problems
//! (not a list, entries without `id`/`type`, duplicate ids) are rejected
//! before persistence, but schema validity is not a precondition for
//! saving; authors save half-finished work, and only the render engine
//! enforces schemas. [`AuthoringService::inspect`] gives the editor an
//! advisory view using the same registry the renderer uses, so the two
//! can never disagree.

mod service;

pub use service::{
    AuthoringError, AuthoringResult, AuthoringService, EntryReport, OwnerResolver,
};
