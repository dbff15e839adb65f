//! SQLite storage layer for pagebloc.
//!
//! Persists shops and their pages. Layouts are stored as JSON blobs in a
//! TEXT column; the schema is created on open.
//!
//! # Architecture
//!
//! - A shop and its four pages are provisioned in one transaction;
//!   partial provisioning is a defect state this layer makes impossible.
//! - Page seeds come from `pagebloc_defaults::default_layout`, the single
//!   source of canonical content; this crate never carries its own copy.
//! - Replacing a layout is a single conditional `UPDATE` keyed by
//!   `(shop_id, kind)`, not a read-modify-write, so concurrent replaces
//!   degenerate to last-write-wins without torn states.
//! - Pages are deleted only by cascade when their shop is deleted.

mod error;
mod page_store;

pub use error::{StoreError, StoreResult};
pub use page_store::PageStore;
