//! Core type definitions for pagebloc.
//!
//! This crate defines the fundamental, component-agnostic types used
//! throughout the layout engine:
//! - Component and Shop identifiers (UUID v7)
//! - The closed set of page kinds a shop owns
//! - Millisecond wall-clock timestamps for page rows
//!
//! Everything component-specific (schemas, settings shapes, renderers)
//! belongs in the schema and render crates, not here.

mod ids;
mod page_kind;
mod timestamp;

pub use ids::{ComponentId, ShopId};
pub use page_kind::PageKind;
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unknown page kind: {0}")]
    UnknownPageKind(String),
}
