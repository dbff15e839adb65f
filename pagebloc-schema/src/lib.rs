//! Component schema registry for pagebloc.
//!
//! Every component kind declares the shape its settings bag must have:
//! which fields exist, which are required, and the format constraints on
//! each (https-only URLs, `#RGB`/`#RRGGBB` colors, non-empty strings,
//! numeric ranges). The [`SchemaRegistry`] built from these declarations
//! is the single validation authority: the authoring advisory check and
//! the render-time check both consult the same registry instance, so the
//! two can never disagree about what "valid" means.
//!
//! An unknown component kind is an expected outcome, not an error:
//! schemas evolve and persisted layouts outlive the kinds they mention.

mod builtin;
mod field;
mod registry;

pub use builtin::builtin_registry;
pub use field::{is_secure_url, is_valid_color, FieldSpec, FieldType};
pub use registry::{
    ComponentSchema, EntryStatus, RegistryError, RegistryResult, SchemaRegistry, ValidationError,
};
