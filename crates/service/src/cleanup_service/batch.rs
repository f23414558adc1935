//! Bounded one-at-a-time deletion of trashed items.

use std::sync::Arc;

use serde::Serialize;
use trash_cleaner_core::ItemId;
use trash_cleaner_storage::ItemStore;

/// Result of one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Items permanently deleted; never exceeds the cap.
    pub deleted: u64,
    /// Deletions the store refused or errored on. Not counted as deleted.
    pub failed: u64,
    /// The store re-offered an item that was excluded after failing in this batch.
    pub stalled: bool,
    /// Looking up the next item failed; the batch ended early.
    pub interrupted: bool,
}

/// Deletes up to `cap` trashed items per run.
#[derive(Clone)]
pub struct BatchDeleter {
    items: Arc<dyn ItemStore>,
    cap: u64,
}

impl BatchDeleter {
    /// A cap of zero is raised to one.
    #[must_use]
    pub fn new(items: Arc<dyn ItemStore>, cap: u64) -> Self {
        Self { items, cap: cap.max(1) }
    }

    #[must_use]
    pub const fn cap(&self) -> u64 {
        self.cap
    }

    /// Fetch one trashed item at a time and delete it until the cap is
    /// reached or the trash is empty. Refused items are excluded from later
    /// lookups in the same batch. Errors are logged, never returned.
    pub async fn run(&self) -> BatchReport {
        let mut report = BatchReport::default();
        let mut refused: Vec<ItemId> = Vec::new();

        while report.deleted < self.cap && report.failed < self.cap {
            let id = match self.items.find_one_trashed(&refused).await {
                Ok(Some(id)) => id,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to look up trashed item, ending batch");
                    report.interrupted = true;
                    break;
                },
            };

            if refused.contains(&id) {
                tracing::warn!(item = %id, "store ignored the exclusion list, ending batch");
                report.stalled = true;
                break;
            }

            match self.items.delete_permanently(id).await {
                Ok(true) => report.deleted += 1,
                Ok(false) => {
                    tracing::warn!(item = %id, "delete refused, skipping");
                    report.failed += 1;
                    refused.push(id);
                },
                Err(e) => {
                    tracing::warn!(item = %id, error = %e, "delete failed, skipping");
                    report.failed += 1;
                    refused.push(id);
                },
            }
        }

        tracing::debug!(
            deleted = report.deleted,
            failed = report.failed,
            stalled = report.stalled,
            "batch finished"
        );
        report
    }
}
