//! Email Value Object
//!
//! Represents a validated email address, shared by the session and counter
//! domains (the counter record stores the owner's email alongside the count).
//! Basic structural validation only - actual verification is the identity
//! provider's job.

use crate::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of the local part (before `@`)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
///
/// Canonical form is NFKC-normalized and lowercased, so addresses typed with
/// full-width characters or mixed case compare equal to their plain form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email: String = email.into().nfkc().collect();
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::validation("Email cannot be empty"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        Self::validate_structure(&email)?;

        Ok(Self(email))
    }

    /// Structural validation: one `@`, non-empty local part, dotted domain
    fn validate_structure(email: &str) -> AppResult<()> {
        let Some((local, domain)) = email.split_once('@') else {
            return Err(AppError::validation("Invalid email format"));
        };

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return Err(AppError::validation("Invalid email format"));
        }
        if local.contains("..") {
            return Err(AppError::validation("Invalid email format"));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        let valid_domain_chars = domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
        if !valid_domain_chars {
            return Err(AppError::validation("Invalid email format"));
        }
        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
            return Err(AppError::validation("Invalid email format"));
        }

        Ok(())
    }

    /// Create from a stored value (assumed already validated)
    pub fn from_stored(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part of the email
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }

    /// Get the local part of the email
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
