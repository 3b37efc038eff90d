//! Application Layer - Counter view model
//!
//! Orchestrates optimistic counter updates over the store trait.

pub mod config;
pub mod view_model;

// Re-exports
pub use config::CounterConfig;
pub use view_model::{CounterSnapshot, CounterViewModel};
