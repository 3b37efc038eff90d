//! Session (Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Principal entity, identity-provider contract
//! - `application/` - Credential use cases, session store
//! - `infra/` - In-memory identity provider
//! - `presentation/` - Route guard, DTOs
//!
//! ## Behavior Model
//! - The identity provider is the single authority on who is signed in;
//!   credential operations never set the principal, the push stream does
//! - Session state is a watch channel: `principal` / `loading` / `error`
//! - The subscription has an explicit lifecycle: `start()` once,
//!   `dispose()` on teardown
//! - Provider failure messages are recorded verbatim for display and also
//!   returned as typed errors

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::session_store::{SessionSnapshot, SessionStore};
pub use domain::entity::principal::Principal;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryIdentityProvider;
pub use presentation::guard::{GuardState, RouteAccess, SessionGuard};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod provider {
    pub use crate::domain::provider::*;
    pub use crate::infra::memory::MemoryIdentityProvider;
}

#[cfg(test)]
mod tests;
