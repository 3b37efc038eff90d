//! Domain Entities
//!
//! Core entities for the counter domain.

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::PrincipalId;
use platform::document::Fields;
use serde_json::Value;

use crate::error::{CounterError, CounterResult};

/// Document field names, shared between the record codec and the store
/// adapter's partial updates
pub mod field {
    pub const USER_ID: &str = "userId";
    pub const EMAIL: &str = "email";
    pub const CLICK_COUNT: &str = "clickCount";
    pub const CREATED_AT: &str = "createdAt";
    pub const LAST_UPDATED: &str = "lastUpdated";
}

/// CounterRecord entity - one user's click tally
///
/// Stored as a document keyed by the principal id. `created_at` is written
/// once when the document first appears and never changes afterwards;
/// `last_updated` moves on every save.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRecord {
    pub user_id: PrincipalId,
    pub email: Email,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl CounterRecord {
    /// Create a fresh record for a user's first save
    pub fn new(user_id: PrincipalId, email: Email, click_count: u64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            email,
            click_count,
            created_at: now,
            last_updated: now,
        }
    }

    /// Encode as document fields
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(field::USER_ID.into(), Value::from(self.user_id.to_string()));
        fields.insert(field::EMAIL.into(), Value::from(self.email.as_str()));
        fields.insert(field::CLICK_COUNT.into(), Value::from(self.click_count));
        fields.insert(
            field::CREATED_AT.into(),
            Value::from(self.created_at.to_rfc3339()),
        );
        fields.insert(
            field::LAST_UPDATED.into(),
            Value::from(self.last_updated.to_rfc3339()),
        );
        fields
    }

    /// Decode from a stored document
    ///
    /// `document_id` is the collection key, which is the principal id.
    /// A missing or non-numeric click count reads as zero; everything else
    /// is required.
    pub fn from_fields(document_id: &str, fields: &Fields) -> CounterResult<Self> {
        let user_id: PrincipalId = document_id
            .parse()
            .map_err(|_| CounterError::corrupt(document_id, "document key is not a valid id"))?;

        let email = fields
            .get(field::EMAIL)
            .and_then(Value::as_str)
            .map(Email::from_stored)
            .ok_or_else(|| CounterError::corrupt(document_id, "missing email"))?;

        let click_count = fields
            .get(field::CLICK_COUNT)
            .and_then(Value::as_u64)
            .unwrap_or(0);

        let created_at = parse_timestamp(fields, field::CREATED_AT)
            .ok_or_else(|| CounterError::corrupt(document_id, "missing createdAt"))?;
        let last_updated = parse_timestamp(fields, field::LAST_UPDATED)
            .ok_or_else(|| CounterError::corrupt(document_id, "missing lastUpdated"))?;

        Ok(Self {
            user_id,
            email,
            click_count,
            created_at,
            last_updated,
        })
    }
}

fn parse_timestamp(fields: &Fields, name: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(name)?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
