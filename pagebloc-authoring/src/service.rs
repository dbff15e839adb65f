use pagebloc_defaults::default_layout;
use pagebloc_model::{Layout, StructuralError};
use pagebloc_schema::{EntryStatus, SchemaRegistry};
use pagebloc_store::{PageStore, StoreError};
use pagebloc_types::{ComponentId, PageKind, ShopId};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Result type for authoring operations.
pub type AuthoringResult<T> = Result<T, AuthoringError>;

/// Errors surfaced to the layer above the authoring service.
#[derive(Debug, thiserror::Error)]
pub enum AuthoringError {
    /// The caller has no provisioned shop.
    #[error("owner has no shop")]
    NoShop,

    /// The shop exists but the page for this kind is missing. Atomic
    /// provisioning should make this impossible; it is still handled,
    /// distinguishable from "layout exists but is empty".
    #[error("page not found: {kind}")]
    PageNotFound { kind: PageKind },

    /// The submitted layout is structurally malformed. Carries the full
    /// field-addressable error list.
    #[error("malformed layout: {} structural error(s)", .0.len())]
    MalformedLayout(Vec<StructuralError>),

    /// Ownership resolution itself failed (not "no shop": the resolver
    /// could not answer).
    #[error("ownership resolution failed: {0}")]
    Resolver(String),

    /// Persistence failure, surfaced as-is; this layer does not retry.
    #[error(transparent)]
    Store(StoreError),
}

/// Resolves an authenticated caller to the shop it owns.
///
/// Implemented by the store for the common case; HTTP layers with their
/// own identity systems provide their own implementation.
pub trait OwnerResolver: Send + Sync {
    /// Returns the owned shop, `None` for "no shop", or an error message
    /// when resolution itself failed.
    fn shop_for(&self, owner: &str) -> Result<Option<ShopId>, String>;
}

impl OwnerResolver for PageStore {
    fn shop_for(&self, owner: &str) -> Result<Option<ShopId>, String> {
        self.shop_for_owner(owner).map_err(|e| e.to_string())
    }
}

/// Per-entry advisory validation result, for the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryReport {
    pub id: ComponentId,
    pub kind: String,
    pub status: EntryStatus,
}

/// Orchestrates layout read/replace/reset for one store.
pub struct AuthoringService {
    store: Arc<PageStore>,
    resolver: Arc<dyn OwnerResolver>,
    registry: Arc<SchemaRegistry>,
}

impl AuthoringService {
    /// Creates a service that resolves owners through the store itself.
    pub fn new(store: Arc<PageStore>, registry: Arc<SchemaRegistry>) -> Self {
        let resolver: Arc<dyn OwnerResolver> = store.clone();
        Self {
            store,
            resolver,
            registry,
        }
    }

    /// Creates a service with an external ownership resolver.
    pub fn with_resolver(
        store: Arc<PageStore>,
        resolver: Arc<dyn OwnerResolver>,
        registry: Arc<SchemaRegistry>,
    ) -> Self {
        Self {
            store,
            resolver,
            registry,
        }
    }

    /// Reads the layout of the caller's page.
    ///
    /// Returns the literal saved state, including entries that are
    /// currently schema-invalid, so the author sees exactly what they
    /// saved.
    pub fn get(&self, owner: &str, kind: PageKind) -> AuthoringResult<Layout> {
        let shop_id = self.resolve(owner)?;
        let page = self.store.get_page(shop_id, kind).map_err(map_store)?;
        Ok(page.layout)
    }

    /// Fully replaces the caller's page layout from untyped input.
    ///
    /// Structural validation (array shape, `id`/`type` presence, unique
    /// ids) happens before persistence; per-entry schema validity is
    /// intentionally not checked here.
    pub fn replace(&self, owner: &str, kind: PageKind, input: &Value) -> AuthoringResult<Layout> {
        let shop_id = self.resolve(owner)?;
        let layout = Layout::from_value(input).map_err(AuthoringError::MalformedLayout)?;
        let page = self
            .store
            .set_layout(shop_id, kind, &layout)
            .map_err(map_store)?;
        info!(
            "Replaced {kind} layout for shop {shop_id} ({} entries)",
            page.layout.len()
        );
        Ok(page.layout)
    }

    /// Resets the caller's page to the canonical default layout.
    ///
    /// Content-idempotent: repeated calls converge to identical
    /// `type`/`variant`/`settings` sequences; ids differ per call because
    /// ids are render keys, not content identity.
    pub fn reset_to_default(&self, owner: &str, kind: PageKind) -> AuthoringResult<Layout> {
        let shop_id = self.resolve(owner)?;
        let layout = default_layout(kind);
        let page = self
            .store
            .set_layout(shop_id, kind, &layout)
            .map_err(map_store)?;
        info!("Reset {kind} layout to default for shop {shop_id}");
        Ok(page.layout)
    }

    /// Advisory per-entry validation for the editor.
    ///
    /// Consults the same registry the render engine uses. Does not block
    /// anything (saving invalid entries is allowed); this exists so the
    /// editor can flag them.
    #[must_use]
    pub fn inspect(&self, layout: &Layout) -> Vec<EntryReport> {
        layout
            .iter()
            .map(|entry| EntryReport {
                id: entry.id,
                kind: entry.kind.clone(),
                status: self.registry.check_entry(entry),
            })
            .collect()
    }

    fn resolve(&self, owner: &str) -> AuthoringResult<ShopId> {
        match self.resolver.shop_for(owner) {
            Ok(Some(shop_id)) => {
                debug!("Resolved owner to shop {shop_id}");
                Ok(shop_id)
            }
            Ok(None) => Err(AuthoringError::NoShop),
            Err(msg) => Err(AuthoringError::Resolver(msg)),
        }
    }
}

fn map_store(err: StoreError) -> AuthoringError {
    match err {
        StoreError::PageNotFound { kind, .. } => AuthoringError::PageNotFound { kind },
        other => AuthoringError::Store(other),
    }
}
