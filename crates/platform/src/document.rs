//! Document Database Contract
//!
//! Interface over the hosted document database: named collections of
//! JSON-field documents addressed by string keys. Implementations live in
//! infrastructure layers; the in-memory one is in [`crate::memory`].

use crate::fault::ProviderFault;
use serde_json::Value;

/// Field map of a single document
pub type Fields = serde_json::Map<String, Value>;

/// A stored document with its key
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Whether the document carries no fields (e.g. after a clear)
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Document database trait
#[trait_variant::make(DocumentStore: Send)]
pub trait LocalDocumentStore {
    /// Fetch a single document; `None` if the key does not exist
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, ProviderFault>;

    /// Create or fully overwrite a document
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), ProviderFault>;

    /// Merge fields into an existing document; fails if the key does not exist
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), ProviderFault>;

    /// Fetch every document in a collection, in no guaranteed order
    async fn query_collection(&self, collection: &str) -> Result<Vec<Document>, ProviderFault>;
}
