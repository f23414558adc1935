use async_trait::async_trait;
use trash_cleaner_core::ItemId;

use crate::error::StorageError;

/// Content item store holding the trash bin.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Number of items currently in trashed state (single aggregate query).
    async fn count_trashed(&self) -> Result<u64, StorageError>;

    /// Identifier of one trashed item not in `exclude`, re-queried against
    /// live state.
    async fn find_one_trashed(&self, exclude: &[ItemId]) -> Result<Option<ItemId>, StorageError>;

    /// Permanently delete a trashed item and its metadata.
    ///
    /// Returns `false` when the store refuses, e.g. the item is gone or was
    /// restored from the trash in the meantime.
    async fn delete_permanently(&self, id: ItemId) -> Result<bool, StorageError>;
}
