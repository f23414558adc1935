//! Typed error enum for the service layer.
//!
//! Unifies storage and configuration failures so callers (HTTP handlers,
//! the CLI) can map them without downcasting.

use thiserror::Error;
use trash_cleaner_core::CoreError;
use trash_cleaner_storage::StorageError;

/// Service-layer error unifying storage and configuration failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Settings or item store operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Invalid configuration or persisted value.
    #[error("config: {0}")]
    Config(#[from] CoreError),
}

impl ServiceError {
    /// Whether this error is likely transient (the next tick may succeed).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Config(_) => false,
        }
    }
}
