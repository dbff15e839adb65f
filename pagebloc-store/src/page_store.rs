//! Shop and page persistence.

use crate::{StoreError, StoreResult};
use pagebloc_defaults::default_layout;
use pagebloc_model::{Layout, Page};
use pagebloc_types::{PageKind, ShopId, Timestamp};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::{debug, info};

/// SQLite-backed store for shops and their pages.
///
/// All operations are synchronous; each runs to completion within one
/// request. The connection is serialized behind a mutex; the contention
/// here is a single author editing their own shop, not a throughput
/// concern.
pub struct PageStore {
    conn: Mutex<Connection>,
}

impl PageStore {
    /// Opens (creating if necessary) a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Opens an in-memory store. Used by tests and previews.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;

             CREATE TABLE IF NOT EXISTS shops (
                 id         TEXT PRIMARY KEY,
                 owner      TEXT NOT NULL UNIQUE,
                 name       TEXT NOT NULL,
                 created_at INTEGER NOT NULL
             );

             CREATE TABLE IF NOT EXISTS pages (
                 shop_id    TEXT NOT NULL REFERENCES shops(id) ON DELETE CASCADE,
                 kind       TEXT NOT NULL,
                 layout     TEXT NOT NULL,
                 created_at INTEGER NOT NULL,
                 updated_at INTEGER NOT NULL,
                 PRIMARY KEY (shop_id, kind)
             );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates a shop and all four of its pages in one transaction.
    ///
    /// Every page is seeded from the default-layout provider. Either the
    /// shop exists with a complete page set afterwards, or nothing was
    /// written.
    pub fn provision_shop(&self, owner: &str, name: &str) -> StoreResult<ShopId> {
        let shop_id = ShopId::new();
        let now = Timestamp::now();

        let mut conn = self.lock_conn();
        let tx = conn.transaction()?;

        let existing: Option<String> = tx
            .query_row(
                "SELECT id FROM shops WHERE owner = ?1",
                params![owner],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(StoreError::OwnerHasShop(owner.to_string()));
        }

        tx.execute(
            "INSERT INTO shops (id, owner, name, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![shop_id.to_string(), owner, name, now.as_millis()],
        )?;

        for kind in PageKind::ALL {
            let layout = default_layout(kind);
            tx.execute(
                "INSERT INTO pages (shop_id, kind, layout, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    shop_id.to_string(),
                    kind.as_str(),
                    serde_json::to_string(&layout)?,
                    now.as_millis(),
                    now.as_millis(),
                ],
            )?;
        }

        tx.commit()?;
        info!("Provisioned shop {shop_id} for owner {owner}");
        Ok(shop_id)
    }

    /// Resolves the shop owned by the given identity, if any.
    pub fn shop_for_owner(&self, owner: &str) -> StoreResult<Option<ShopId>> {
        let conn = self.lock_conn();
        let id: Option<String> = conn
            .query_row(
                "SELECT id FROM shops WHERE owner = ?1",
                params![owner],
                |row| row.get(0),
            )
            .optional()?;
        match id {
            None => Ok(None),
            Some(raw) => {
                let shop_id = ShopId::parse(&raw)
                    .map_err(|e| StoreError::InvalidData(format!("shop id `{raw}`: {e}")))?;
                Ok(Some(shop_id))
            }
        }
    }

    /// Reads the page for `(shop, kind)`.
    pub fn get_page(&self, shop_id: ShopId, kind: PageKind) -> StoreResult<Page> {
        let conn = self.lock_conn();
        let row: Option<(String, i64, i64)> = conn
            .query_row(
                "SELECT layout, created_at, updated_at
                 FROM pages WHERE shop_id = ?1 AND kind = ?2",
                params![shop_id.to_string(), kind.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((layout_json, created_at, updated_at)) = row else {
            return Err(StoreError::PageNotFound { shop_id, kind });
        };

        Ok(Page {
            shop_id,
            kind,
            layout: serde_json::from_str(&layout_json)?,
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        })
    }

    /// Fully replaces the stored layout for `(shop, kind)`.
    ///
    /// A single conditional `UPDATE`; there is no read-modify-write
    /// window for another request to interleave with. The previous layout
    /// is discarded atomically and `updated_at` moves forward.
    pub fn set_layout(
        &self,
        shop_id: ShopId,
        kind: PageKind,
        layout: &Layout,
    ) -> StoreResult<Page> {
        let now = Timestamp::now();
        let layout_json = serde_json::to_string(layout)?;

        let conn = self.lock_conn();
        let created_at: Option<i64> = conn
            .query_row(
                "UPDATE pages SET layout = ?1, updated_at = ?2
                 WHERE shop_id = ?3 AND kind = ?4
                 RETURNING created_at",
                params![layout_json, now.as_millis(), shop_id.to_string(), kind.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(created_at) = created_at else {
            return Err(StoreError::PageNotFound { shop_id, kind });
        };

        debug!(
            "Replaced {kind} layout for shop {shop_id} ({} entries)",
            layout.len()
        );
        Ok(Page {
            shop_id,
            kind,
            layout: layout.clone(),
            created_at: Timestamp::from_millis(created_at),
            updated_at: now,
        })
    }

    /// Deletes a shop; its pages go with it by cascade.
    pub fn delete_shop(&self, shop_id: ShopId) -> StoreResult<()> {
        let conn = self.lock_conn();
        let deleted = conn.execute(
            "DELETE FROM shops WHERE id = ?1",
            params![shop_id.to_string()],
        )?;
        if deleted == 0 {
            return Err(StoreError::ShopNotFound(shop_id));
        }
        info!("Deleted shop {shop_id}");
        Ok(())
    }

    /// Page kinds present for a shop, in provisioning order.
    /// A provisioned shop always reports all four.
    pub fn page_kinds(&self, shop_id: ShopId) -> StoreResult<Vec<PageKind>> {
        let conn = self.lock_conn();
        let mut stmt = conn.prepare("SELECT kind FROM pages WHERE shop_id = ?1")?;
        let mut kinds: Vec<PageKind> = stmt
            .query_map(params![shop_id.to_string()], |row| {
                row.get::<_, String>(0)
            })?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|raw| {
                PageKind::from_str(&raw)
                    .map_err(|_| StoreError::InvalidData(format!("page kind `{raw}`")))
            })
            .collect::<StoreResult<_>>()?;
        kinds.sort_by_key(|k| PageKind::ALL.iter().position(|a| a == k));
        Ok(kinds)
    }

    fn lock_conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A poisoned mutex means another request panicked mid-statement;
        // the connection itself is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}
