use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use trash_cleaner_core::CleanerConfig;
use trash_cleaner_service::{CleanupService, TokioScheduler};
use trash_cleaner_storage::{SettingsStore, StorageBackend};

pub(crate) mod campaign;
pub(crate) mod seed;
pub(crate) mod serve;

/// Open the configured store and wire a cleanup service over it.
pub(crate) async fn open_service() -> Result<(Arc<CleanupService>, mpsc::UnboundedReceiver<String>)>
{
    let backend = Arc::new(StorageBackend::from_env().await?);
    tracing::debug!(backend = backend.kind(), "storage opened");
    let (scheduler, events) = TokioScheduler::new();
    let service = CleanupService::new(
        Arc::clone(&backend) as Arc<dyn SettingsStore>,
        backend,
        Arc::new(scheduler),
        CleanerConfig::from_env(),
    );
    Ok((Arc::new(service), events))
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
