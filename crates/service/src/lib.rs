//! Service layer for trash-cleaner
//!
//! The batched deletion and progress-accounting state machine, plus the
//! scheduler abstraction that drives it.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod cleanup_service;
mod error;
mod scheduler;

pub use cleanup_service::{
    BatchDeleter, BatchReport, CampaignSettings, CleanupService, Counter, NextStep,
    ProgressTracker, RunOutcome, RunScheduler, StatusReporter,
};
pub use error::ServiceError;
pub use scheduler::{Scheduler, TokioScheduler};
