//! Store Trait
//!
//! Interface for counter persistence. Implementation is in the
//! infrastructure layer.

use kernel::email::Email;
use kernel::id::PrincipalId;

use crate::domain::entities::CounterRecord;
use crate::error::CounterResult;

/// Counter store trait
#[trait_variant::make(CounterStore: Send)]
pub trait LocalCounterStore {
    /// Load a user's tally; absent or cleared documents read as zero
    async fn load(&self, user_id: PrincipalId) -> CounterResult<u64>;

    /// Persist a user's tally with upsert semantics
    ///
    /// Creates the document with `createdAt` on first save; later saves
    /// touch only the count and `lastUpdated`.
    async fn save(&self, user_id: PrincipalId, email: &Email, count: u64) -> CounterResult<()>;

    /// All counter records, highest tally first
    async fn list_all(&self) -> CounterResult<Vec<CounterRecord>>;

    /// Drop a user's data while keeping the document key
    async fn clear(&self, user_id: PrincipalId) -> CounterResult<()>;
}
