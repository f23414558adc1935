//! Storage backend trait abstraction
//!
//! Async domain traits for the two collaborators the cleaner depends on:
//! a durable key-value settings store and the content item store.

pub mod items;
pub mod settings;

pub use items::ItemStore;
pub use settings::SettingsStore;
