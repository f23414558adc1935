//! Cleanup campaign orchestration.
//!
//! Wires the counter, batch deleter, progress tracker, run scheduler and
//! status reporter over injected stores and a scheduler.

mod batch;
mod campaign;
mod counter;
mod progress;
mod settings;
mod status;

use std::sync::Arc;

use chrono::Local;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};
use trash_cleaner_core::{CLEANUP_EVENT, CleanerConfig, Progress, StatusSnapshot, format_last_run};
use trash_cleaner_storage::{ItemStore, SettingsStore};

pub use batch::{BatchDeleter, BatchReport};
pub use campaign::{NextStep, RunScheduler};
pub use counter::Counter;
pub use progress::ProgressTracker;
pub use settings::CampaignSettings;
pub use status::StatusReporter;

use crate::{Scheduler, ServiceError};

/// Result of invoking the batch entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Campaign disabled; nothing touched.
    Skipped,
    /// Another batch is in flight.
    Busy,
    /// Settings or item store could not be read; retried on the next tick.
    StoreUnavailable,
    Ran { report: BatchReport, next: NextStep },
}

impl RunOutcome {
    #[must_use]
    pub const fn deleted(&self) -> u64 {
        match *self {
            Self::Ran { report, .. } => report.deleted,
            _ => 0,
        }
    }
}

pub struct CleanupService {
    settings: CampaignSettings,
    tracker: ProgressTracker,
    deleter: BatchDeleter,
    run_scheduler: RunScheduler,
    reporter: StatusReporter,
    scheduler: Arc<dyn Scheduler>,
    config: CleanerConfig,
    run_lock: Mutex<()>,
}

impl CleanupService {
    #[must_use]
    pub fn new(
        settings_store: Arc<dyn SettingsStore>,
        items: Arc<dyn ItemStore>,
        scheduler: Arc<dyn Scheduler>,
        config: CleanerConfig,
    ) -> Self {
        let settings = CampaignSettings::new(settings_store);
        let counter = Counter::new(Arc::clone(&items));
        let tracker = ProgressTracker::new(settings.clone(), counter.clone());
        let deleter = BatchDeleter::new(items, config.batch_cap);
        let run_scheduler = RunScheduler::new(
            settings.clone(),
            counter,
            tracker.clone(),
            Arc::clone(&scheduler),
            config.follow_up_delay,
        );
        let reporter = StatusReporter::new(settings.clone(), tracker.clone(), Arc::clone(&scheduler));
        Self {
            settings,
            tracker,
            deleter,
            run_scheduler,
            reporter,
            scheduler,
            config,
            run_lock: Mutex::new(()),
        }
    }

    /// Write missing setting defaults and register the recurring tick.
    /// Safe to call on every start.
    pub async fn install(&self) -> Result<(), ServiceError> {
        let added = self.settings.install_defaults().await?;
        let registered =
            self.scheduler.schedule_recurring(CLEANUP_EVENT, self.config.recurring_interval);
        tracing::info!(defaults_added = added, registered, "cleaner installed");
        Ok(())
    }

    /// Cancel every scheduled cleanup event. Settings are kept.
    pub fn uninstall(&self) {
        self.scheduler.cancel(CLEANUP_EVENT);
    }

    /// Start or stop the campaign. Takes effect at the next batch boundary.
    pub async fn set_enabled(&self, enabled: bool) -> Result<(), ServiceError> {
        self.settings.set_enabled(enabled).await?;
        tracing::info!(enabled, "auto clean toggled");
        Ok(())
    }

    /// Entry point for scheduler ticks and follow-ups. Never fails.
    pub async fn run_scheduled(&self) -> RunOutcome {
        let Ok(guard) = self.run_lock.try_lock() else {
            tracing::debug!("batch already in flight, skipping trigger");
            return RunOutcome::Busy;
        };
        self.run_locked(guard).await
    }

    /// Re-baseline to the current count, then run the entry point.
    ///
    /// Does not enable the campaign; a disabled campaign is only re-baselined.
    pub async fn trigger_manual(&self) -> Result<RunOutcome, ServiceError> {
        let Ok(guard) = self.run_lock.try_lock() else {
            return Ok(RunOutcome::Busy);
        };
        let baseline = self.tracker.rebaseline().await?;
        tracing::info!(baseline, "manual cleanup triggered");
        Ok(self.run_locked(guard).await)
    }

    async fn run_locked(&self, _guard: MutexGuard<'_, ()>) -> RunOutcome {
        match self.settings.is_enabled().await {
            Ok(true) => {},
            Ok(false) => return RunOutcome::Skipped,
            Err(e) => {
                tracing::warn!(error = %e, "settings unavailable, skipping run");
                return RunOutcome::StoreUnavailable;
            },
        }

        if let Err(e) = self.tracker.ensure_baseline().await {
            tracing::warn!(error = %e, "item store unavailable, skipping run");
            return RunOutcome::StoreUnavailable;
        }

        let report = self.deleter.run().await;
        let summary = format_last_run(Local::now(), report.deleted);
        if let Err(e) = self.settings.set_last_run(&summary).await {
            tracing::warn!(error = %e, "failed to record last run");
        }

        let next = self.run_scheduler.after_batch().await;
        tracing::info!(deleted = report.deleted, failed = report.failed, ?next, "cleanup batch done");
        RunOutcome::Ran { report, next }
    }

    pub async fn status(&self) -> Result<StatusSnapshot, ServiceError> {
        self.reporter.snapshot().await
    }

    pub async fn progress(&self) -> Result<Progress, ServiceError> {
        self.reporter.progress_snapshot().await
    }
}
