//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p trash-cleaner-storage --features postgres -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use trash_cleaner_storage::PgStorage;
use trash_cleaner_storage::traits::{ItemStore, SettingsStore};

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_key(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}

#[tokio::test]
#[ignore]
async fn pg_settings_add_does_not_overwrite() {
    let storage = create_pg_storage().await;
    let key = unique_key("enable_auto_clean");

    assert!(storage.add_setting(&key, "0").await.unwrap());
    storage.set_setting(&key, "1").await.unwrap();
    assert!(!storage.add_setting(&key, "0").await.unwrap());
    assert_eq!(storage.get_setting(&key).await.unwrap().as_deref(), Some("1"));
}

#[tokio::test]
#[ignore]
async fn pg_delete_only_trashed_rows() {
    let storage = create_pg_storage().await;
    let title = unique_key("item");

    let trashed: i64 = sqlx::query_scalar(
        "INSERT INTO items (title, status) VALUES ($1, 'trash') RETURNING id",
    )
    .bind(&title)
    .fetch_one(storage.pool())
    .await
    .unwrap();
    let published: i64 =
        sqlx::query_scalar("INSERT INTO items (title, status) VALUES ($1, 'publish') RETURNING id")
            .bind(&title)
            .fetch_one(storage.pool())
            .await
            .unwrap();
    sqlx::query("INSERT INTO item_meta (item_id, meta_key, meta_value) VALUES ($1, 'k', 'v')")
        .bind(trashed)
        .execute(storage.pool())
        .await
        .unwrap();

    let before = storage.count_trashed().await.unwrap();
    assert!(before >= 1);
    assert!(storage.find_one_trashed(&[]).await.unwrap().is_some());
    assert_ne!(
        storage.find_one_trashed(&[trash_cleaner_core::ItemId(trashed)]).await.unwrap(),
        Some(trash_cleaner_core::ItemId(trashed))
    );

    assert!(storage.delete_permanently(trash_cleaner_core::ItemId(trashed)).await.unwrap());
    assert!(!storage.delete_permanently(trash_cleaner_core::ItemId(published)).await.unwrap());

    let meta: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM item_meta WHERE item_id = $1")
        .bind(trashed)
        .fetch_one(storage.pool())
        .await
        .unwrap();
    assert_eq!(meta, 0);
}
