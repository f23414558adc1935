//! Shared constants for trash-cleaner.
//!
//! Defaults for the cleanup campaign and storage tuning live here so the
//! service, the HTTP layer and the CLI agree on them.

/// Maximum number of items permanently deleted per batch invocation.
pub const DEFAULT_BATCH_CAP: u64 = 250;

/// Delay before the follow-up run when trashed items remain after a batch.
pub const DEFAULT_FOLLOW_UP_DELAY_SECS: u64 = 60;

/// Interval of the recurring background tick (25 minutes).
pub const DEFAULT_RECURRING_INTERVAL_SECS: u64 = 1500;

/// Scheduler event name shared by the recurring tick and one-shot follow-ups.
pub const CLEANUP_EVENT: &str = "trash_cleanup";

/// Status value marking an item as trashed in the item store.
pub const TRASH_STATUS: &str = "trash";

/// Value of the `last_run` setting before the first batch ever ran.
pub const LAST_RUN_NEVER: &str = "Never";

/// `SQLite` connection pool: default maximum connections.
pub const SQLITE_POOL_MAX_CONNECTIONS: u32 = 8;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
