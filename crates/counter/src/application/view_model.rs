//! Counter View Model
//!
//! Optimistic tally updates for one signed-in principal. The displayed
//! count moves first, the write follows, and a failed write puts the
//! previous count back.

use std::sync::Arc;

use kernel::email::Email;
use kernel::id::PrincipalId;
use tokio::sync::watch;

use crate::domain::repository::CounterStore;
use crate::error::CounterResult;

/// Reactive counter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// Displayed tally, which may be ahead of storage while syncing
    pub count: u64,
    /// A save is in flight
    pub syncing: bool,
}

/// Counter view model
///
/// Bound to one principal for its whole lifetime; a sign-out tears it down
/// together with the protected view that owns it.
pub struct CounterViewModel<S>
where
    S: CounterStore,
{
    store: Arc<S>,
    user_id: PrincipalId,
    email: Email,
    state: watch::Sender<CounterSnapshot>,
}

impl<S> CounterViewModel<S>
where
    S: CounterStore,
{
    /// Create a view model showing zero until hydrated
    pub fn new(store: Arc<S>, user_id: PrincipalId, email: Email) -> Self {
        let (state, _) = watch::channel(CounterSnapshot::default());
        Self {
            store,
            user_id,
            email,
            state,
        }
    }

    /// Load the persisted tally into the view
    ///
    /// On failure the displayed count is left untouched.
    pub async fn hydrate(&self) -> CounterResult<u64> {
        let count = match self.store.load(self.user_id).await {
            Ok(count) => count,
            Err(err) => {
                err.log();
                return Err(err);
            }
        };
        self.state.send_modify(|snapshot| snapshot.count = count);
        Ok(count)
    }

    /// Count one click
    pub async fn increment(&self) -> CounterResult<u64> {
        let target = self.state.borrow().count.saturating_add(1);
        self.apply(target).await
    }

    /// Put the tally back to zero
    pub async fn reset(&self) -> CounterResult<u64> {
        self.apply(0).await
    }

    /// Show `target` immediately, then persist it; revert on failure
    async fn apply(&self, target: u64) -> CounterResult<u64> {
        let previous = self.state.borrow().count;
        self.state.send_modify(|snapshot| {
            snapshot.count = target;
            snapshot.syncing = true;
        });

        match self.store.save(self.user_id, &self.email, target).await {
            Ok(()) => {
                self.state.send_modify(|snapshot| snapshot.syncing = false);
                Ok(target)
            }
            Err(err) => {
                err.log();
                tracing::warn!(from = target, back_to = previous, "Reverting unsaved counter update");
                self.state.send_modify(|snapshot| {
                    snapshot.count = previous;
                    snapshot.syncing = false;
                });
                Err(err)
            }
        }
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Observe counter-state changes
    pub fn subscribe(&self) -> watch::Receiver<CounterSnapshot> {
        self.state.subscribe()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> CounterSnapshot {
        *self.state.borrow()
    }

    /// Currently displayed count
    pub fn count(&self) -> u64 {
        self.state.borrow().count
    }
}
