//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use trash_cleaner_core::ItemId;

use crate::error::StorageError;
use crate::traits::{ItemStore, SettingsStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Migration(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Open the configured backend: PostgreSQL when built with `postgres` and
    /// `DATABASE_URL` is set, otherwise `SQLite` at [`trash_cleaner_core::db_path`].
    pub async fn from_env() -> Result<Self, StorageError> {
        #[cfg(feature = "postgres")]
        {
            if let Some(url) = trash_cleaner_core::env_non_empty("DATABASE_URL") {
                return Self::new_postgres(&url).await;
            }
        }
        Self::open_local()
    }

    #[cfg(feature = "sqlite")]
    fn open_local() -> Result<Self, StorageError> {
        Self::new_sqlite(&trash_cleaner_core::db_path())
    }

    #[cfg(not(feature = "sqlite"))]
    fn open_local() -> Result<Self, StorageError> {
        Err(StorageError::Migration("DATABASE_URL must be set for PostgreSQL".to_owned()))
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match *self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── SettingsStore ────────────────────────────────────────────────

#[async_trait]
impl SettingsStore for StorageBackend {
    async fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        dispatch!(self, SettingsStore, get_setting(key))
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        dispatch!(self, SettingsStore, set_setting(key, value))
    }

    async fn add_setting(&self, key: &str, value: &str) -> Result<bool, StorageError> {
        dispatch!(self, SettingsStore, add_setting(key, value))
    }
}

// ── ItemStore ────────────────────────────────────────────────────

#[async_trait]
impl ItemStore for StorageBackend {
    async fn count_trashed(&self) -> Result<u64, StorageError> {
        dispatch!(self, ItemStore, count_trashed())
    }

    async fn find_one_trashed(&self, exclude: &[ItemId]) -> Result<Option<ItemId>, StorageError> {
        dispatch!(self, ItemStore, find_one_trashed(exclude))
    }

    async fn delete_permanently(&self, id: ItemId) -> Result<bool, StorageError> {
        dispatch!(self, ItemStore, delete_permanently(id))
    }
}
