//! Async trait implementations for `SQLite` `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use trash_cleaner_core::ItemId;

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{ItemStore, SettingsStore};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Join(format!("spawn_blocking join error: {e}")))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
/// - `@slice arg`: `.to_vec()` a `&[T]`, pass as `&arg`
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture val $arg:ident) => { };
    (@capture slice $arg:ident) => { let $arg = $arg.to_vec(); };
    (@pass str $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
    (@pass slice $arg:ident) => { &$arg };
}

// ── SettingsStore ────────────────────────────────────────────────

#[async_trait]
impl SettingsStore for Storage {
    async fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        delegate!(self, get_setting, @str key)
    }
    async fn set_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        delegate!(self, set_setting, @str key, @str value)
    }
    async fn add_setting(&self, key: &str, value: &str) -> Result<bool, StorageError> {
        delegate!(self, add_setting, @str key, @str value)
    }
}

// ── ItemStore ────────────────────────────────────────────────────

#[async_trait]
impl ItemStore for Storage {
    async fn count_trashed(&self) -> Result<u64, StorageError> {
        delegate!(self, count_trashed)
    }
    async fn find_one_trashed(&self, exclude: &[ItemId]) -> Result<Option<ItemId>, StorageError> {
        delegate!(self, find_one_trashed, @slice exclude)
    }
    async fn delete_permanently(&self, id: ItemId) -> Result<bool, StorageError> {
        delegate!(self, delete_permanently, @val id)
    }
}
