//! Route Guard
//!
//! Classifies session snapshots into a three-state machine and yields
//! access decisions for protected views. The guard never renders protected
//! content while the initial auth check is still in flight, so a signed-in
//! user refreshing the page sees a wait indicator, not a login prompt.

use derive_more::Display;
use tokio::sync::watch;

use crate::application::session_store::SessionSnapshot;
use crate::domain::entity::principal::Principal;
use crate::error::{AuthError, AuthResult};

/// Route-level session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GuardState {
    /// Initial auth check still in flight
    #[display("checking")]
    Checking,
    /// Resolved with no principal
    #[display("anonymous")]
    Anonymous,
    /// Resolved with a signed-in principal
    #[display("authenticated")]
    Authenticated,
}

impl GuardState {
    /// Classify a snapshot
    pub fn classify(snapshot: &SessionSnapshot) -> Self {
        if snapshot.loading {
            GuardState::Checking
        } else if snapshot.principal.is_some() {
            GuardState::Authenticated
        } else {
            GuardState::Anonymous
        }
    }

    /// Whether `next` is a legal successor of this state
    ///
    /// `Checking` can resolve either way, `Anonymous` and `Authenticated`
    /// flip between each other, and every state may repeat. Nothing returns
    /// to `Checking`: the initial check happens once per subscription.
    pub fn admits(self, next: GuardState) -> bool {
        match (self, next) {
            (a, b) if a == b => true,
            (GuardState::Checking, _) => true,
            (GuardState::Anonymous, GuardState::Authenticated) => true,
            (GuardState::Authenticated, GuardState::Anonymous) => true,
            _ => false,
        }
    }
}

/// Access decision for a protected view
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAccess {
    /// Render a wait indicator, nothing else
    Wait,
    /// Render the login prompt in place of the content
    Prompt,
    /// Mount the protected view for this principal
    Allow(Principal),
}

/// Route guard over a session-state stream
///
/// Holds the last snapshot it processed, so decisions are stable between
/// [`next`](Self::next) calls even while newer state is already queued.
pub struct SessionGuard {
    states: watch::Receiver<SessionSnapshot>,
    seen: SessionSnapshot,
    current: GuardState,
}

impl SessionGuard {
    /// Attach to a session-state stream, classifying its current value
    pub fn new(mut states: watch::Receiver<SessionSnapshot>) -> Self {
        let seen = states.borrow_and_update().clone();
        let current = GuardState::classify(&seen);
        Self {
            states,
            seen,
            current,
        }
    }

    /// Current guard state
    pub fn state(&self) -> GuardState {
        self.current
    }

    /// Error message recorded by the session store, for display next to
    /// the prompt
    pub fn error(&self) -> Option<&str> {
        self.seen.error.as_deref()
    }

    /// Access decision from the last processed snapshot
    pub fn access(&self) -> RouteAccess {
        match (self.current, &self.seen.principal) {
            (GuardState::Checking, _) => RouteAccess::Wait,
            (GuardState::Authenticated, Some(principal)) => RouteAccess::Allow(principal.clone()),
            _ => RouteAccess::Prompt,
        }
    }

    /// Wait for the next session-state change and apply it
    ///
    /// Fails when the stream ended (store disposed) or the change is not a
    /// legal transition.
    pub async fn next(&mut self) -> AuthResult<GuardState> {
        self.states
            .changed()
            .await
            .map_err(|_| AuthError::SessionState("session-state stream closed".to_string()))?;
        let snapshot = self.states.borrow_and_update().clone();
        self.apply(snapshot)
    }

    /// Drive the guard until it leaves `Checking`
    pub async fn resolved(&mut self) -> AuthResult<GuardState> {
        while self.current == GuardState::Checking {
            self.next().await?;
        }
        Ok(self.current)
    }

    fn apply(&mut self, snapshot: SessionSnapshot) -> AuthResult<GuardState> {
        let next = GuardState::classify(&snapshot);
        if !self.current.admits(next) {
            tracing::warn!(from = %self.current, to = %next, "Rejected session-state transition");
            return Err(AuthError::SessionState(format!(
                "illegal transition: {} -> {}",
                self.current, next
            )));
        }
        self.seen = snapshot;
        self.current = next;
        Ok(next)
    }
}
