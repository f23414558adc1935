//! Runtime configuration for the cleanup campaign.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BATCH_CAP, DEFAULT_FOLLOW_UP_DELAY_SECS, DEFAULT_RECURRING_INTERVAL_SECS,
    SQLITE_POOL_MAX_CONNECTIONS,
};
use crate::env_config::{env_non_empty, env_parse_with_default};
use crate::error::CoreError;

pub const ENV_BATCH_SIZE: &str = "TRASH_CLEANER_BATCH_SIZE";
pub const ENV_FOLLOW_UP_SECS: &str = "TRASH_CLEANER_FOLLOW_UP_SECS";
pub const ENV_INTERVAL_SECS: &str = "TRASH_CLEANER_INTERVAL_SECS";
pub const ENV_DB_PATH: &str = "TRASH_CLEANER_DB_PATH";
pub const ENV_DB_POOL_SIZE: &str = "TRASH_CLEANER_DB_POOL_SIZE";

/// Tunables of the batch worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanerConfig {
    /// Deletions per batch; always at least one.
    pub batch_cap: u64,
    /// Delay before the follow-up run while trash remains.
    pub follow_up_delay: Duration,
    /// Period of the recurring background tick.
    pub recurring_interval: Duration,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            batch_cap: DEFAULT_BATCH_CAP,
            follow_up_delay: Duration::from_secs(DEFAULT_FOLLOW_UP_DELAY_SECS),
            recurring_interval: Duration::from_secs(DEFAULT_RECURRING_INTERVAL_SECS),
        }
    }
}

impl CleanerConfig {
    /// Build from `TRASH_CLEANER_*` variables, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let batch_cap = env_parse_with_default(ENV_BATCH_SIZE, DEFAULT_BATCH_CAP);
        let follow_up = env_parse_with_default(ENV_FOLLOW_UP_SECS, DEFAULT_FOLLOW_UP_DELAY_SECS);
        let interval = env_parse_with_default(ENV_INTERVAL_SECS, DEFAULT_RECURRING_INTERVAL_SECS);
        Self::new(batch_cap, Duration::from_secs(follow_up), Duration::from_secs(interval))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid cleaner configuration, using defaults");
                Self::default()
            })
    }

    pub fn new(
        batch_cap: u64,
        follow_up_delay: Duration,
        recurring_interval: Duration,
    ) -> Result<Self, CoreError> {
        if batch_cap == 0 {
            return Err(CoreError::InvalidConfig("batch cap must be at least 1".to_owned()));
        }
        if recurring_interval.is_zero() {
            return Err(CoreError::InvalidConfig("recurring interval must be non-zero".to_owned()));
        }
        Ok(Self { batch_cap, follow_up_delay, recurring_interval })
    }
}

/// Location of the `SQLite` database: `TRASH_CLEANER_DB_PATH` or the local data dir.
#[must_use]
pub fn db_path() -> PathBuf {
    env_non_empty(ENV_DB_PATH).map(PathBuf::from).unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trash-cleaner")
            .join("cleaner.db")
    })
}

/// `SQLite` pool size from `TRASH_CLEANER_DB_POOL_SIZE`.
#[must_use]
pub fn db_pool_size() -> u32 {
    env_parse_with_default(ENV_DB_POOL_SIZE, SQLITE_POOL_MAX_CONNECTIONS).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_schedule() {
        let config = CleanerConfig::default();
        assert_eq!(config.batch_cap, 250);
        assert_eq!(config.follow_up_delay, Duration::from_secs(60));
        assert_eq!(config.recurring_interval, Duration::from_secs(1500));
    }

    #[test]
    fn zero_batch_cap_rejected() {
        let err = CleanerConfig::new(0, Duration::from_secs(60), Duration::from_secs(1500))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn zero_follow_up_delay_allowed() {
        let config =
            CleanerConfig::new(10, Duration::ZERO, Duration::from_secs(5)).unwrap();
        assert_eq!(config.follow_up_delay, Duration::ZERO);
    }
}
