//! Counter Module
//!
//! Clean Architecture structure:
//! - `domain/` - CounterRecord entity, store trait
//! - `application/` - View model with optimistic updates, configuration
//! - `infra/` - Document-backed store implementation
//! - `presentation/` - DTOs
//!
//! ## Behavior Model
//! - One counter document per principal, keyed by the principal id
//! - Saves are upserts: `createdAt` is written once, later saves touch only
//!   the count and `lastUpdated`
//! - The view model applies updates optimistically and reverts the
//!   displayed count when the write fails
//! - Absent and cleared documents read as zero

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CounterConfig;
pub use application::view_model::{CounterSnapshot, CounterViewModel};
pub use domain::entities::CounterRecord;
pub use domain::repository::CounterStore;
pub use error::{CounterError, CounterResult};
pub use infra::document::DocumentCounterStore;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::document::DocumentCounterStore;
    pub use platform::memory::MemoryDocumentStore;
}
