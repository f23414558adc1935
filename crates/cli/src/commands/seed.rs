use anyhow::{Result, bail};
use trash_cleaner_storage::StorageBackend;

pub(crate) async fn run(count: u64) -> Result<()> {
    let backend = StorageBackend::from_env().await?;
    #[allow(unreachable_patterns, reason = "only reachable with the postgres backend compiled in")]
    let ids = match &backend {
        StorageBackend::Sqlite(storage) => storage.seed_trashed(count)?,
        _ => bail!("seeding is only supported for the local SQLite store"),
    };
    tracing::info!(count = ids.len(), "seeded trashed items");
    println!("trashed {} items", ids.len());
    Ok(())
}
