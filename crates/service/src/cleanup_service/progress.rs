//! Baseline bookkeeping and percent-complete.

use trash_cleaner_core::Progress;

use super::{CampaignSettings, Counter};
use crate::ServiceError;

#[derive(Clone)]
pub struct ProgressTracker {
    settings: CampaignSettings,
    counter: Counter,
}

impl ProgressTracker {
    #[must_use]
    pub const fn new(settings: CampaignSettings, counter: Counter) -> Self {
        Self { settings, counter }
    }

    /// Capture the current count as baseline if none is set. Returns the baseline in effect.
    pub async fn ensure_baseline(&self) -> Result<u64, ServiceError> {
        let baseline = self.settings.baseline().await?;
        if baseline > 0 {
            return Ok(baseline);
        }
        let count = self.counter.count().await?;
        self.settings.set_baseline(count).await?;
        tracing::info!(baseline = count, "captured campaign baseline");
        Ok(count)
    }

    /// Progress against the baseline.
    ///
    /// When no baseline is stored but trash exists, the current count is
    /// persisted as the baseline so later polls measure against it.
    pub async fn progress(&self) -> Result<Progress, ServiceError> {
        let remaining = self.counter.count().await?;
        let mut total = self.settings.baseline().await?;
        if total == 0 && remaining > 0 {
            self.settings.set_baseline(remaining).await?;
            tracing::info!(baseline = remaining, "baseline missing, re-seeded from live count");
            total = remaining;
        }
        Ok(Progress::from_counts(total, remaining))
    }

    pub async fn reset(&self) -> Result<(), ServiceError> {
        self.settings.set_baseline(0).await
    }

    /// Replace the baseline with the current count.
    pub async fn rebaseline(&self) -> Result<u64, ServiceError> {
        let count = self.counter.count().await?;
        self.settings.set_baseline(count).await?;
        Ok(count)
    }
}
