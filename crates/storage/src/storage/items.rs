use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{OptionalExtension as _, params, params_from_iter};
use trash_cleaner_core::{ItemId, TRASH_STATUS};

use super::{Storage, count_to_u64, get_conn};
use crate::error::StorageError;

impl Storage {
    /// Count trashed items.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn count_trashed(&self) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM items WHERE status = ?1",
            params![TRASH_STATUS],
            |row| row.get(0),
        )?;
        count_to_u64(count)
    }

    /// Oldest trashed item id outside `exclude`, if any.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn find_one_trashed(&self, exclude: &[ItemId]) -> Result<Option<ItemId>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let filter = if exclude.is_empty() {
            String::new()
        } else {
            format!(" AND id NOT IN ({})", vec!["?"; exclude.len()].join(", "))
        };
        let sql = format!("SELECT id FROM items WHERE status = ?{filter} ORDER BY id ASC LIMIT 1");
        let bound = std::iter::once(Value::from(TRASH_STATUS.to_owned()))
            .chain(exclude.iter().map(|id| Value::from(id.0)));
        let id = conn
            .query_row(&sql, params_from_iter(bound), |row| row.get::<_, i64>(0))
            .optional()?;
        Ok(id.map(ItemId))
    }

    /// Permanently delete a trashed item. Metadata goes with it via `ON DELETE CASCADE`.
    ///
    /// Only rows still in the trash are removed, so an item restored between
    /// lookup and delete is left alone and `false` is returned.
    ///
    /// # Errors
    /// Returns error if the database write fails.
    pub fn delete_permanently(&self, id: ItemId) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let deleted = conn.execute(
            "DELETE FROM items WHERE id = ?1 AND status = ?2",
            params![id.0, TRASH_STATUS],
        )?;
        Ok(deleted > 0)
    }

    /// Insert a content item with the given status.
    ///
    /// # Errors
    /// Returns error if the database insert fails.
    pub fn insert_item(&self, title: &str, status: &str) -> Result<ItemId, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO items (title, status, created_at) VALUES (?1, ?2, ?3)",
            params![title, status, Utc::now().to_rfc3339()],
        )?;
        Ok(ItemId(conn.last_insert_rowid()))
    }

    /// Attach a metadata entry to an item.
    ///
    /// # Errors
    /// Returns error if the database insert fails (e.g. unknown item).
    pub fn add_item_meta(&self, id: ItemId, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO item_meta (item_id, meta_key, meta_value) VALUES (?1, ?2, ?3)",
            params![id.0, key, value],
        )?;
        Ok(())
    }

    /// Change an item's status, e.g. move it to or restore it from the trash.
    ///
    /// # Errors
    /// Returns error if the database update fails.
    pub fn set_item_status(&self, id: ItemId, status: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let updated =
            conn.execute("UPDATE items SET status = ?1 WHERE id = ?2", params![status, id.0])?;
        Ok(updated > 0)
    }

    /// Trash `count` freshly created items. Returns their ids in insertion order.
    ///
    /// # Errors
    /// Returns error if any insert fails; earlier inserts are rolled back.
    pub fn seed_trashed(&self, count: u64) -> Result<Vec<ItemId>, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let now = Utc::now().to_rfc3339();
        let mut ids = Vec::new();
        {
            let mut stmt = tx.prepare(
                "INSERT INTO items (title, status, created_at) VALUES (?1, ?2, ?3)",
            )?;
            for n in 0..count {
                stmt.execute(params![format!("trashed item {n}"), TRASH_STATUS, now])?;
                ids.push(ItemId(tx.last_insert_rowid()));
            }
        }
        tx.commit()?;
        Ok(ids)
    }
}
