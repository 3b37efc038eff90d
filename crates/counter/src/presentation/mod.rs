//! Presentation Layer

pub mod dto;

// Re-exports
pub use dto::{CounterView, LeaderboardEntry};
