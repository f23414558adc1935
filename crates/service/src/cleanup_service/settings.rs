//! Typed access to the persisted campaign settings.

use std::sync::Arc;

use trash_cleaner_core::{LAST_RUN_NEVER, SettingKey, decode_bool, decode_count, encode_bool};
use trash_cleaner_storage::SettingsStore;

use crate::ServiceError;

/// Campaign settings over an injected key-value store.
#[derive(Clone)]
pub struct CampaignSettings {
    store: Arc<dyn SettingsStore>,
}

impl CampaignSettings {
    #[must_use]
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    async fn get(&self, key: SettingKey) -> Result<Option<String>, ServiceError> {
        Ok(self.store.get_setting(key.as_str()).await?)
    }

    async fn set(&self, key: SettingKey, value: &str) -> Result<(), ServiceError> {
        Ok(self.store.set_setting(key.as_str(), value).await?)
    }

    /// Write defaults for keys that do not exist yet. Returns how many were added.
    pub async fn install_defaults(&self) -> Result<usize, ServiceError> {
        let mut added = 0;
        for key in SettingKey::ALL {
            if self.store.add_setting(key.as_str(), key.default_value()).await? {
                added += 1;
            }
        }
        Ok(added)
    }

    pub async fn is_enabled(&self) -> Result<bool, ServiceError> {
        Ok(self.get(SettingKey::EnableAutoClean).await?.as_deref().is_some_and(decode_bool))
    }

    pub async fn set_enabled(&self, enabled: bool) -> Result<(), ServiceError> {
        self.set(SettingKey::EnableAutoClean, encode_bool(enabled)).await
    }

    /// Stored baseline. A value that does not parse reads as "no baseline".
    pub async fn baseline(&self) -> Result<u64, ServiceError> {
        let Some(raw) = self.get(SettingKey::TotalTrash).await? else {
            return Ok(0);
        };
        Ok(decode_count(SettingKey::TotalTrash, &raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unreadable baseline, treating as unset");
            0
        }))
    }

    pub async fn set_baseline(&self, total: u64) -> Result<(), ServiceError> {
        self.set(SettingKey::TotalTrash, &total.to_string()).await
    }

    pub async fn last_run(&self) -> Result<String, ServiceError> {
        Ok(self
            .get(SettingKey::LastRun)
            .await?
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| LAST_RUN_NEVER.to_owned()))
    }

    pub async fn set_last_run(&self, summary: &str) -> Result<(), ServiceError> {
        self.set(SettingKey::LastRun, summary).await
    }
}
