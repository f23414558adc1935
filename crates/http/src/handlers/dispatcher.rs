use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use trash_cleaner_core::CLEANUP_EVENT;
use trash_cleaner_service::RunOutcome;

use crate::AppState;

/// Spawns the task that runs the cleanup entry point for every fired
/// scheduler event. Ends when the scheduler is dropped.
pub fn start_event_dispatcher(
    state: Arc<AppState>,
    mut events: mpsc::UnboundedReceiver<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            if event != CLEANUP_EVENT {
                tracing::debug!(event = %event, "ignoring unknown scheduler event");
                continue;
            }
            match state.cleanup_service.run_scheduled().await {
                RunOutcome::Ran { report, next } => {
                    tracing::debug!(deleted = report.deleted, ?next, "scheduled cleanup ran");
                },
                RunOutcome::Skipped => tracing::trace!("campaign idle"),
                RunOutcome::Busy => tracing::debug!("previous batch still running"),
                RunOutcome::StoreUnavailable => {
                    tracing::warn!("store unavailable, waiting for next tick");
                },
            }
        }
        tracing::info!("scheduler channel closed, event dispatcher stopped");
    })
}
