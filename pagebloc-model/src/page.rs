use crate::Layout;
use pagebloc_types::{PageKind, ShopId, Timestamp};
use serde::{Deserialize, Serialize};

/// A shop page: one layout per `(shop, kind)` pair.
///
/// Pages are created as a unit at shop provisioning time (all four kinds in
/// one transaction, each seeded from the default-layout provider) and only
/// ever deleted together with their shop. The timestamps belong to the page
/// row, not to the layout value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub shop_id: ShopId,
    pub kind: PageKind,
    pub layout: Layout,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Page {
    /// Creates a page with both timestamps set to now.
    #[must_use]
    pub fn new(shop_id: ShopId, kind: PageKind, layout: Layout) -> Self {
        let now = Timestamp::now();
        Self {
            shop_id,
            kind,
            layout,
            created_at: now,
            updated_at: now,
        }
    }
}
