//! Layout value objects for pagebloc.
//!
//! A page layout is an ordered sequence of typed component configurations
//! persisted as a JSON blob. The types here are deliberately tolerant:
//! construction from untyped input only rejects input that cannot be
//! addressed at all (not an array, entries without `id`/`type`, duplicate
//! ids). Whether a component's settings actually satisfy its schema is a
//! separate question answered by `pagebloc-schema`, and only enforced at
//! render time; authors are allowed to save half-finished work.

mod component;
mod layout;
mod page;

pub use component::ComponentConfig;
pub use layout::{Layout, StructuralError, SETTINGS_KEY, STOREFRONT_SETTINGS_KEY};
pub use page::Page;
