//! ItemStore implementation for PgStorage.

use async_trait::async_trait;
use trash_cleaner_core::{ItemId, TRASH_STATUS};

use super::{PgStorage, count_to_u64};
use crate::error::StorageError;
use crate::traits::ItemStore;

#[async_trait]
impl ItemStore for PgStorage {
    async fn count_trashed(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE status = $1")
            .bind(TRASH_STATUS)
            .fetch_one(&self.pool)
            .await?;
        count_to_u64(count)
    }

    async fn find_one_trashed(&self, exclude: &[ItemId]) -> Result<Option<ItemId>, StorageError> {
        let exclude: Vec<i64> = exclude.iter().map(|id| id.0).collect();
        let id: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM items WHERE status = $1 AND NOT (id = ANY($2)) ORDER BY id ASC LIMIT 1",
        )
        .bind(TRASH_STATUS)
        .bind(&exclude)
        .fetch_optional(&self.pool)
        .await?;
        Ok(id.map(ItemId))
    }

    async fn delete_permanently(&self, id: ItemId) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1 AND status = $2")
            .bind(id.0)
            .bind(TRASH_STATUS)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
