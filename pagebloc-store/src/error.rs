//! Error types for the storage layer.

use pagebloc_types::{PageKind, ShopId};
use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Shop not found.
    #[error("shop not found: {0}")]
    ShopNotFound(ShopId),

    /// Page not found for a provisioned shop. Should not happen given
    /// atomic provisioning, but is surfaced rather than papered over.
    #[error("page not found: shop {shop_id}, kind {kind}")]
    PageNotFound { shop_id: ShopId, kind: PageKind },

    /// An owner already has a shop; one shop per owner.
    #[error("owner already has a shop: {0}")]
    OwnerHasShop(String),

    /// Stored data that cannot be interpreted.
    #[error("invalid stored data: {0}")]
    InvalidData(String),
}
