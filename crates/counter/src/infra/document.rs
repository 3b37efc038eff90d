//! Document-Backed Store Implementation
//!
//! Implements the counter store over the document-database contract. One
//! document per principal, keyed by the principal id inside the configured
//! collection.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use kernel::email::Email;
use kernel::id::PrincipalId;
use platform::document::{DocumentStore, Fields};

use crate::application::config::CounterConfig;
use crate::domain::entities::{CounterRecord, field};
use crate::domain::repository::CounterStore;
use crate::error::CounterResult;

/// Document-backed counter store
pub struct DocumentCounterStore<D>
where
    D: DocumentStore,
{
    backend: Arc<D>,
    config: CounterConfig,
}

impl<D> DocumentCounterStore<D>
where
    D: DocumentStore,
{
    pub fn new(backend: Arc<D>, config: CounterConfig) -> Self {
        Self { backend, config }
    }

    fn collection(&self) -> &str {
        &self.config.collection
    }
}

impl<D> CounterStore for DocumentCounterStore<D>
where
    D: DocumentStore + Sync,
{
    async fn load(&self, user_id: PrincipalId) -> CounterResult<u64> {
        let document = self
            .backend
            .get_document(self.collection(), &user_id.to_string())
            .await?;

        // Absent and cleared documents both read as zero
        let count = document
            .and_then(|doc| doc.fields.get(field::CLICK_COUNT).and_then(Value::as_u64))
            .unwrap_or(0);
        Ok(count)
    }

    async fn save(&self, user_id: PrincipalId, email: &Email, count: u64) -> CounterResult<()> {
        let id = user_id.to_string();
        let existing = self.backend.get_document(self.collection(), &id).await?;

        if existing.is_some() {
            // Touch only the mutable fields so createdAt survives
            let mut patch = Fields::new();
            patch.insert(field::CLICK_COUNT.into(), Value::from(count));
            patch.insert(
                field::LAST_UPDATED.into(),
                Value::from(Utc::now().to_rfc3339()),
            );
            self.backend
                .update_document(self.collection(), &id, patch)
                .await?;
        } else {
            let record = CounterRecord::new(user_id, email.clone(), count);
            self.backend
                .set_document(self.collection(), &id, record.to_fields())
                .await?;
        }

        tracing::debug!(user_id = %user_id, count, "Saved counter document");
        Ok(())
    }

    async fn list_all(&self) -> CounterResult<Vec<CounterRecord>> {
        let documents = self.backend.query_collection(self.collection()).await?;

        let mut records: Vec<CounterRecord> = documents
            .iter()
            .filter_map(|doc| match CounterRecord::from_fields(&doc.id, &doc.fields) {
                Ok(record) => Some(record),
                Err(err) => {
                    // Cleared or foreign documents drop out of the listing
                    err.log();
                    None
                }
            })
            .collect();

        // Highest tally first; ties keep backend order
        records.sort_by(|a, b| b.click_count.cmp(&a.click_count));
        Ok(records)
    }

    async fn clear(&self, user_id: PrincipalId) -> CounterResult<()> {
        // Overwrite with an empty document: the key stays, the data goes
        self.backend
            .set_document(self.collection(), &user_id.to_string(), Fields::new())
            .await?;

        tracing::info!(user_id = %user_id, "Cleared counter document");
        Ok(())
    }
}
