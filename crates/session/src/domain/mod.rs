//! Domain Layer
//!
//! Contains the principal entity and the identity-provider contract.

pub mod entity;
pub mod provider;

// Re-exports
pub use entity::principal::Principal;
pub use provider::IdentityProvider;
