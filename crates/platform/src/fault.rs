//! Provider Fault Model
//!
//! Failures from the hosted backend surface as `{code, message}` pairs: a
//! stable machine-readable code plus a human-readable message. Both the
//! identity provider and the document database report failures in this shape,
//! and the message is what upper layers show to the user verbatim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Well-known fault codes
///
/// Codes in the `auth/` namespace come from the identity provider; the rest
/// come from the document database.
pub mod code {
    /// Signup with an email that already has an account
    pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";
    /// Wrong email/password combination
    pub const INVALID_CREDENTIAL: &str = "auth/invalid-credential";
    /// Password rejected by the provider's policy
    pub const WEAK_PASSWORD: &str = "auth/weak-password";
    /// Sensitive operation attempted without a fresh sign-in
    pub const REQUIRES_RECENT_LOGIN: &str = "auth/requires-recent-login";
    /// Operation referenced an account that does not exist
    pub const USER_NOT_FOUND: &str = "auth/user-not-found";
    /// Unexpected failure inside the identity provider
    pub const INTERNAL_ERROR: &str = "auth/internal-error";
    /// Caller lacks access to the document
    pub const PERMISSION_DENIED: &str = "permission-denied";
    /// Backend temporarily unreachable
    pub const UNAVAILABLE: &str = "unavailable";
    /// Document or resource does not exist
    pub const NOT_FOUND: &str = "not-found";
}

/// A failure reported by the hosted backend
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ProviderFault {
    code: String,
    message: String,
}

impl ProviderFault {
    /// Create a fault with an explicit code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    // ========================================================================
    // Constructors for the well-known faults
    // ========================================================================

    pub fn email_already_in_use() -> Self {
        Self::new(
            code::EMAIL_ALREADY_IN_USE,
            "An account already exists for this email address",
        )
    }

    pub fn invalid_credential() -> Self {
        Self::new(code::INVALID_CREDENTIAL, "Invalid email or password")
    }

    pub fn weak_password(min_length: usize) -> Self {
        Self::new(
            code::WEAK_PASSWORD,
            format!("Password should be at least {} characters", min_length),
        )
    }

    pub fn requires_recent_login() -> Self {
        Self::new(
            code::REQUIRES_RECENT_LOGIN,
            "This operation requires a recent sign-in",
        )
    }

    pub fn user_not_found() -> Self {
        Self::new(code::USER_NOT_FOUND, "No account exists for this user")
    }

    pub fn permission_denied() -> Self {
        Self::new(code::PERMISSION_DENIED, "Missing or insufficient permissions")
    }

    pub fn unavailable() -> Self {
        Self::new(code::UNAVAILABLE, "The service is currently unavailable")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(code::NOT_FOUND, message)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Machine-readable fault code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message, shown to the user as-is
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this fault came from the identity provider
    pub fn is_auth_fault(&self) -> bool {
        self.code.starts_with("auth/")
    }

    pub fn is_permission_denied(&self) -> bool {
        self.code == code::PERMISSION_DENIED
    }

    pub fn is_unavailable(&self) -> bool {
        self.code == code::UNAVAILABLE
    }

    pub fn is_not_found(&self) -> bool {
        self.code == code::NOT_FOUND
    }
}
