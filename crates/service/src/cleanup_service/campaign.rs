//! Post-batch transition of the campaign state machine.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use trash_cleaner_core::CLEANUP_EVENT;

use super::{CampaignSettings, Counter, ProgressTracker};
use crate::Scheduler;

/// What the campaign does after a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum NextStep {
    /// Trash remains (or the count is unknown); a one-shot run was requested.
    FollowUp { remaining: Option<u64> },
    /// Trash is empty; baseline cleared and campaign disabled.
    Finished,
}

#[derive(Clone)]
pub struct RunScheduler {
    settings: CampaignSettings,
    counter: Counter,
    tracker: ProgressTracker,
    scheduler: Arc<dyn Scheduler>,
    follow_up_delay: Duration,
}

impl RunScheduler {
    #[must_use]
    pub fn new(
        settings: CampaignSettings,
        counter: Counter,
        tracker: ProgressTracker,
        scheduler: Arc<dyn Scheduler>,
        follow_up_delay: Duration,
    ) -> Self {
        Self { settings, counter, tracker, scheduler, follow_up_delay }
    }

    /// Decide between a follow-up run and finishing the campaign.
    ///
    /// An unknown count keeps the campaign running.
    pub async fn after_batch(&self) -> NextStep {
        match self.counter.count().await {
            Ok(0) => {
                self.finish().await;
                NextStep::Finished
            },
            Ok(remaining) => {
                self.follow_up();
                NextStep::FollowUp { remaining: Some(remaining) }
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not count remaining trash, keeping campaign running");
                self.follow_up();
                NextStep::FollowUp { remaining: None }
            },
        }
    }

    fn follow_up(&self) {
        if self.scheduler.schedule_once(CLEANUP_EVENT, self.follow_up_delay) {
            tracing::debug!(delay_secs = self.follow_up_delay.as_secs(), "follow-up scheduled");
        }
    }

    async fn finish(&self) {
        if let Err(e) = self.tracker.reset().await {
            tracing::warn!(error = %e, "failed to clear baseline");
        }
        if let Err(e) = self.settings.set_enabled(false).await {
            tracing::warn!(error = %e, "failed to disable finished campaign");
            return;
        }
        tracing::info!("trash empty, campaign finished");
    }
}
