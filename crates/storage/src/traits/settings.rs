use async_trait::async_trait;

use crate::error::StorageError;

/// Durable key-value settings, visible to every invocation.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a setting. `None` when the key was never written.
    async fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a setting.
    async fn set_setting(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Insert a setting only if the key is absent. Returns whether it was written.
    async fn add_setting(&self, key: &str, value: &str) -> Result<bool, StorageError>;
}
