//! Scheduler abstraction for the cleanup entry point.
//!
//! A fired event is delivered by name over an mpsc channel; the consumer
//! (the HTTP dispatcher or a CLI loop) maps it to a service call.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;

/// Timer collaborator for the run scheduler.
pub trait Scheduler: Send + Sync {
    /// Fire `event` once after `delay`. Ignored (returns `false`) while a
    /// one-shot for the same event is still pending.
    fn schedule_once(&self, event: &str, delay: Duration) -> bool;

    /// Fire `event` every `interval`, starting now. Returns `false` if a
    /// recurring job for the event already exists.
    fn schedule_recurring(&self, event: &str, interval: Duration) -> bool;

    /// Drop every pending job for `event`.
    fn cancel(&self, event: &str);

    /// Earliest pending fire time of `event`, one-shot or recurring.
    fn next_fire_time(&self, event: &str) -> Option<DateTime<Utc>>;
}

#[derive(Debug)]
struct Job {
    generation: u64,
    next_fire: DateTime<Utc>,
    handle: AbortHandle,
}

#[derive(Debug, Default)]
struct EventJobs {
    once: Option<Job>,
    recurring: Option<Job>,
}

impl EventJobs {
    fn is_empty(&self) -> bool {
        self.once.is_none() && self.recurring.is_none()
    }
}

type JobTable = Arc<Mutex<HashMap<String, EventJobs>>>;

fn lock(jobs: &JobTable) -> MutexGuard<'_, HashMap<String, EventJobs>> {
    jobs.lock().unwrap_or_else(PoisonError::into_inner)
}

fn fire_time(delay: Duration) -> DateTime<Utc> {
    let delta = chrono::Duration::from_std(delay).unwrap_or(chrono::Duration::MAX);
    Utc::now().checked_add_signed(delta).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// In-process scheduler built on tokio timers.
///
/// Must be used from within a tokio runtime. Jobs live as long as the
/// process; durability is the settings store's concern, not this one's.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    jobs: JobTable,
    generation: Arc<AtomicU64>,
    tx: mpsc::UnboundedSender<String>,
}

impl TokioScheduler {
    /// Create a scheduler and the receiving end of its fired-event channel.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            jobs: Arc::new(Mutex::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
            tx,
        };
        (scheduler, rx)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, event: &str, delay: Duration) -> bool {
        let mut jobs = lock(&self.jobs);
        let entry = jobs.entry(event.to_owned()).or_default();
        if entry.once.is_some() {
            tracing::debug!(event, "one-shot already pending, ignoring");
            return false;
        }

        let generation = self.next_generation();
        let table = Arc::clone(&self.jobs);
        let tx = self.tx.clone();
        let name = event.to_owned();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut jobs = lock(&table);
                if let Some(entry) = jobs.get_mut(&name) {
                    if entry.once.as_ref().is_some_and(|j| j.generation == generation) {
                        entry.once = None;
                    }
                    if entry.is_empty() {
                        jobs.remove(&name);
                    }
                }
            }
            if tx.send(name).is_err() {
                tracing::debug!("event receiver dropped, one-shot discarded");
            }
        });

        entry.once = Some(Job { generation, next_fire: fire_time(delay), handle: task.abort_handle() });
        tracing::debug!(event, delay_secs = delay.as_secs(), "scheduled one-shot");
        true
    }

    fn schedule_recurring(&self, event: &str, interval: Duration) -> bool {
        let mut jobs = lock(&self.jobs);
        let entry = jobs.entry(event.to_owned()).or_default();
        if entry.recurring.is_some() {
            return false;
        }

        let generation = self.next_generation();
        let table = Arc::clone(&self.jobs);
        let tx = self.tx.clone();
        let name = event.to_owned();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Some(job) = lock(&table)
                    .get_mut(&name)
                    .and_then(|e| e.recurring.as_mut())
                    .filter(|j| j.generation == generation)
                {
                    job.next_fire = fire_time(interval);
                }
                if tx.send(name.clone()).is_err() {
                    tracing::debug!("event receiver dropped, stopping recurring job");
                    break;
                }
            }
        });

        entry.recurring =
            Some(Job { generation, next_fire: Utc::now(), handle: task.abort_handle() });
        tracing::info!(event, interval_secs = interval.as_secs(), "registered recurring event");
        true
    }

    fn cancel(&self, event: &str) {
        if let Some(entry) = lock(&self.jobs).remove(event) {
            for job in [entry.once, entry.recurring].into_iter().flatten() {
                job.handle.abort();
            }
            tracing::info!(event, "cancelled scheduled events");
        }
    }

    fn next_fire_time(&self, event: &str) -> Option<DateTime<Utc>> {
        let jobs = lock(&self.jobs);
        let entry = jobs.get(event)?;
        [entry.once.as_ref(), entry.recurring.as_ref()].into_iter().flatten().map(|j| j.next_fire).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn one_shot_fires_after_delay() {
        let (scheduler, mut rx) = TokioScheduler::new();
        assert!(scheduler.schedule_once("cleanup", Duration::from_secs(60)));
        assert!(scheduler.next_fire_time("cleanup").is_some());

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("cleanup"));
        assert!(scheduler.next_fire_time("cleanup").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn pending_one_shot_is_not_duplicated() {
        let (scheduler, mut rx) = TokioScheduler::new();
        assert!(scheduler.schedule_once("cleanup", Duration::from_secs(60)));
        assert!(!scheduler.schedule_once("cleanup", Duration::from_secs(10)));

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("cleanup"));
        assert!(rx.try_recv().is_err());

        // once fired, a new follow-up may be queued
        assert!(scheduler.schedule_once("cleanup", Duration::from_secs(60)));
    }

    #[tokio::test(start_paused = true)]
    async fn recurring_fires_immediately_then_every_interval() {
        let (scheduler, mut rx) = TokioScheduler::new();
        assert!(scheduler.schedule_recurring("cleanup", Duration::from_secs(1500)));
        assert!(!scheduler.schedule_recurring("cleanup", Duration::from_secs(1500)));

        assert_eq!(rx.recv().await.as_deref(), Some("cleanup"));
        tokio::time::sleep(Duration::from_secs(1501)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("cleanup"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_all_jobs() {
        let (scheduler, mut rx) = TokioScheduler::new();
        scheduler.schedule_once("cleanup", Duration::from_secs(60));
        scheduler.cancel("cleanup");
        assert!(scheduler.next_fire_time("cleanup").is_none());

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn next_fire_time_is_earliest_job() {
        let (scheduler, _rx) = TokioScheduler::new();
        scheduler.schedule_once("cleanup", Duration::from_secs(60));
        let once = scheduler.next_fire_time("cleanup");
        assert!(once.is_some());
        assert!(scheduler.next_fire_time("other").is_none());
    }
}
