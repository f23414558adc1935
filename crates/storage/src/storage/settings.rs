use rusqlite::{OptionalExtension as _, params};

use super::{Storage, get_conn};
use crate::error::StorageError;

impl Storage {
    /// Read a setting value.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let value = conn
            .query_row("SELECT value FROM settings WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Insert or overwrite a setting.
    ///
    /// # Errors
    /// Returns error if the database write fails.
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
               ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Insert a setting only when the key is absent.
    ///
    /// # Errors
    /// Returns error if the database write fails.
    pub fn add_setting(&self, key: &str, value: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(inserted > 0)
    }
}
