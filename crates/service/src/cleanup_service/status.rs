use std::sync::Arc;

use trash_cleaner_core::{CLEANUP_EVENT, CampaignState, Progress, StatusSnapshot};

use super::{CampaignSettings, ProgressTracker};
use crate::{Scheduler, ServiceError};

/// Read side for the dashboard.
#[derive(Clone)]
pub struct StatusReporter {
    settings: CampaignSettings,
    tracker: ProgressTracker,
    scheduler: Arc<dyn Scheduler>,
}

impl StatusReporter {
    #[must_use]
    pub fn new(
        settings: CampaignSettings,
        tracker: ProgressTracker,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self { settings, tracker, scheduler }
    }

    pub async fn snapshot(&self) -> Result<StatusSnapshot, ServiceError> {
        let enabled = self.settings.is_enabled().await?;
        Ok(StatusSnapshot {
            enabled,
            state: CampaignState::from_enabled(enabled),
            last_run: self.settings.last_run().await?,
            next_run: self.scheduler.next_fire_time(CLEANUP_EVENT),
        })
    }

    pub async fn progress_snapshot(&self) -> Result<Progress, ServiceError> {
        self.tracker.progress().await
    }
}
