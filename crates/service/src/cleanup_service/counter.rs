use std::sync::Arc;

use trash_cleaner_storage::ItemStore;

use crate::ServiceError;

/// Live count of trashed items. Never cached.
#[derive(Clone)]
pub struct Counter {
    items: Arc<dyn ItemStore>,
}

impl Counter {
    #[must_use]
    pub fn new(items: Arc<dyn ItemStore>) -> Self {
        Self { items }
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.items.count_trashed().await?)
    }
}
