//! In-Memory Document Store
//!
//! Stand-in for the hosted document database, used in development and tests
//! the way the emulator suite stands in for the hosted stack. Fault injection
//! switches let failure paths be exercised deterministically.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::document::{Document, DocumentStore, Fields};
use crate::fault::ProviderFault;

/// In-memory document store
///
/// Collections are maps of document key to field map. Reads clone the stored
/// fields, so callers never observe later mutations through a stale handle.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Fields>>>,
    deny_writes: AtomicBool,
    unavailable: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Fault injection
    // ========================================================================

    /// Make every write fail with a permission fault
    pub fn deny_writes(&self, deny: bool) {
        self.deny_writes.store(deny, Ordering::SeqCst);
    }

    /// Simulate the backend being unreachable (all calls fail)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), ProviderFault> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ProviderFault::unavailable());
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<(), ProviderFault> {
        if self.deny_writes.load(Ordering::SeqCst) {
            return Err(ProviderFault::permission_denied());
        }
        Ok(())
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, ProviderFault> {
        self.check_available()?;

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), ProviderFault> {
        self.check_available()?;
        self.check_writable()?;

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), ProviderFault> {
        self.check_available()?;
        self.check_writable()?;

        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| {
                ProviderFault::not_found(format!("No document to update: {}/{}", collection, id))
            })?;

        // Top-level field merge
        for (key, value) in fields {
            doc.insert(key, value);
        }
        Ok(())
    }

    async fn query_collection(&self, collection: &str) -> Result<Vec<Document>, ProviderFault> {
        self.check_available()?;

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}
