//! Core types for trash-cleaner
//!
//! Domain types, persisted setting keys, progress arithmetic and runtime
//! configuration shared by every other crate.

mod campaign;
mod config;
mod constants;
mod env_config;
mod error;
mod progress;

pub use campaign::*;
pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use progress::*;
