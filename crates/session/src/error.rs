//! Session Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::fault::{self, ProviderFault};
use platform::password::PasswordPolicyError;
use thiserror::Error;

/// Session-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Session-specific error variants
///
/// `Display` renders the message the UI shows for the failure. For
/// provider faults that is the provider's own message, passed through
/// verbatim.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// An operation that requires a signed-in user ran without one
    #[error("No user logged in")]
    NotSignedIn,

    /// The email was rejected before reaching the provider
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// The password was rejected by the provider password policy
    #[error("{0}")]
    WeakPassword(#[from] PasswordPolicyError),

    /// The identity provider reported a fault
    #[error("{}", .0.message())]
    Provider(#[from] ProviderFault),

    /// The auth-state stream ended or produced an impossible transition
    #[error("Session state error: {0}")]
    SessionState(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Map to the kernel error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::NotSignedIn => ErrorKind::AuthenticationFailed,
            AuthError::InvalidEmail(_) => ErrorKind::ValidationFailed,
            AuthError::WeakPassword(_) => ErrorKind::ValidationFailed,
            AuthError::Provider(fault) => {
                if fault.code() == fault::code::EMAIL_ALREADY_IN_USE {
                    ErrorKind::Conflict
                } else if fault.is_permission_denied() {
                    ErrorKind::PermissionDenied
                } else if fault.is_unavailable() {
                    ErrorKind::StorageUnavailable
                } else if fault.is_not_found() {
                    ErrorKind::NotFound
                } else if fault.is_auth_fault() {
                    ErrorKind::AuthenticationFailed
                } else {
                    ErrorKind::InternalError
                }
            }
            AuthError::SessionState(_) => ErrorKind::InternalError,
            AuthError::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// Convert to the kernel `AppError`
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log with a severity appropriate to the variant
    pub(crate) fn log(&self) {
        match self {
            AuthError::Provider(fault) if fault.is_auth_fault() => {
                tracing::warn!(code = %fault.code(), "Identity provider rejected the operation");
            }
            AuthError::Provider(fault) => {
                tracing::error!(code = %fault.code(), message = %fault.message(), "Identity provider fault");
            }
            AuthError::SessionState(_) | AuthError::Internal(_) => {
                tracing::error!(error = %self, "Session failure");
            }
            AuthError::NotSignedIn => {
                tracing::warn!("Operation attempted with no signed-in user");
            }
            _ => {
                tracing::debug!(error = %self, "Credential validation failed");
            }
        }
    }
}
