//! Counter Error Types
//!
//! Counter-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::fault::ProviderFault;
use thiserror::Error;

/// Counter-specific result type alias
pub type CounterResult<T> = Result<T, CounterError>;

/// Counter-specific error variants
#[derive(Debug, Clone, Error)]
pub enum CounterError {
    /// The document backend reported a fault
    #[error("{}", .0.message())]
    Storage(#[from] ProviderFault),

    /// A stored document does not parse as a counter record
    #[error("Corrupt counter document {document}: {reason}")]
    Corrupt { document: String, reason: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CounterError {
    pub(crate) fn corrupt(document: impl Into<String>, reason: impl Into<String>) -> Self {
        CounterError::Corrupt {
            document: document.into(),
            reason: reason.into(),
        }
    }

    /// Map to the kernel error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            CounterError::Storage(fault) => {
                if fault.is_permission_denied() {
                    ErrorKind::PermissionDenied
                } else if fault.is_unavailable() {
                    ErrorKind::StorageUnavailable
                } else if fault.is_not_found() {
                    ErrorKind::NotFound
                } else {
                    ErrorKind::InternalError
                }
            }
            CounterError::Corrupt { .. } => ErrorKind::InternalError,
            CounterError::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// Convert to the kernel `AppError`
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log with a severity appropriate to the variant
    pub(crate) fn log(&self) {
        match self {
            CounterError::Storage(fault) if fault.is_permission_denied() => {
                tracing::warn!(code = %fault.code(), "Document backend denied access");
            }
            CounterError::Storage(fault) => {
                tracing::error!(code = %fault.code(), message = %fault.message(), "Document backend fault");
            }
            CounterError::Corrupt { document, reason } => {
                tracing::warn!(document = %document, reason = %reason, "Skipping corrupt counter document");
            }
            CounterError::Internal(_) => {
                tracing::error!(error = %self, "Counter failure");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_fault_display_is_message_only() {
        let err = CounterError::from(ProviderFault::permission_denied());
        assert_eq!(err.to_string(), "Missing or insufficient permissions");
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_unavailable_kind() {
        let err = CounterError::from(ProviderFault::unavailable());
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
    }

    #[test]
    fn test_corrupt_is_internal() {
        let err = CounterError::corrupt("users/abc", "missing email");
        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert!(err.to_string().contains("users/abc"));
    }

    #[test]
    fn test_to_app_error_round_trip() {
        let err = CounterError::from(ProviderFault::unavailable());
        let app = err.to_app_error();
        assert_eq!(app.kind(), ErrorKind::StorageUnavailable);
        assert_eq!(app.message(), "The service is currently unavailable");
    }
}
