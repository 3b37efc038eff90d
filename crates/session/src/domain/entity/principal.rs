//! Principal Entity

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::PrincipalId;

/// The signed-in user as reported by the identity provider
///
/// A read-only view of the current authenticated identity. The provider
/// owns it: it appears when a sign-in succeeds, is replaced when the
/// account changes, and disappears on sign-out. Nothing in this crate
/// constructs one outside of provider implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Provider-assigned identifier, also used as the counter document key
    pub id: PrincipalId,
    /// Email the account was registered with
    pub email: Email,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// Create a fresh principal for a newly registered account
    pub fn new(email: Email) -> Self {
        Self {
            id: PrincipalId::new(),
            email,
            created_at: Utc::now(),
        }
    }
}
