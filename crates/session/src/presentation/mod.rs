//! Presentation Layer

pub mod dto;
pub mod guard;

// Re-exports
pub use dto::SessionView;
pub use guard::{GuardState, RouteAccess, SessionGuard};
