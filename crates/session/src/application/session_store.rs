//! Session Store
//!
//! Owns the bridge between the identity provider's push stream and the
//! reactive session state that views consume. One store per application,
//! explicitly started and disposed instead of living as ambient global
//! state.
//!
//! ## Behavior Model
//! - Credential operations never set the principal themselves. The
//!   provider's push stream is the only writer of `principal`, including
//!   for the caller's own sign-in.
//! - `loading` starts `true` and flips to `false` on the first push.
//! - `error` holds the most recent failure message, cleared when the next
//!   operation starts.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::application::change_password::{ChangePasswordInput, ChangePasswordUseCase};
use crate::application::sign_in::{SignInInput, SignInOutput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::application::sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
use crate::domain::entity::principal::Principal;
use crate::domain::provider::IdentityProvider;
use crate::error::AuthResult;

/// Reactive session state
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Who is signed in, exactly as last pushed by the provider
    pub principal: Option<Principal>,
    /// `true` until the provider has reported the initial auth state
    pub loading: bool,
    /// Display message of the most recent failed operation
    pub error: Option<String>,
}

impl SessionSnapshot {
    /// State before the first provider push
    pub fn initial() -> Self {
        Self {
            principal: None,
            loading: true,
            error: None,
        }
    }

    /// Resolved with a signed-in principal
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.principal.is_some()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// Session store
///
/// Composes the credential use cases with the auth-state subscription and
/// publishes [`SessionSnapshot`] values over a watch channel.
pub struct SessionStore<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    state: watch::Sender<SessionSnapshot>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl<P> SessionStore<P>
where
    P: IdentityProvider,
{
    /// Create a store in the initial (loading) state
    ///
    /// No subscription exists until [`start`](Self::start) is called.
    pub fn new(provider: Arc<P>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::initial());
        Self {
            provider,
            state,
            listener: Mutex::new(None),
        }
    }

    // ========================================================================
    // Subscription lifecycle
    // ========================================================================

    /// Start the auth-state subscription
    ///
    /// Subscribes to the provider exactly once and spawns the listener task
    /// that folds pushes into the snapshot. A second call is a no-op.
    pub fn start(&self) {
        let mut listener = self.listener.lock().expect("listener lock poisoned");
        if listener.is_some() {
            tracing::warn!("Session store already started, ignoring duplicate start");
            return;
        }

        let mut pushes = self.provider.subscribe();
        let state = self.state.clone();
        let handle = tokio::spawn(async move {
            // The receiver carries the auth state as of subscription time;
            // fold that in first, then every change until the provider side
            // goes away.
            loop {
                let principal = pushes.borrow_and_update().clone();
                state.send_modify(|snapshot| {
                    snapshot.loading = false;
                    snapshot.principal = principal;
                });
                if pushes.changed().await.is_err() {
                    tracing::debug!("Auth-state stream closed");
                    break;
                }
            }
        });
        *listener = Some(handle);

        tracing::debug!("Session store started");
    }

    /// Release the subscription and stop the listener task
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn dispose(&self) {
        let handle = self.listener.lock().expect("listener lock poisoned").take();
        if let Some(handle) = handle {
            handle.abort();
            tracing::debug!("Session store disposed");
        }
    }

    /// Whether the subscription is currently held
    pub fn is_started(&self) -> bool {
        self.listener.lock().expect("listener lock poisoned").is_some()
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Observe session-state changes
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Current snapshot, for non-reactive callers
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    // ========================================================================
    // Credential operations
    // ========================================================================

    /// Register a new account
    pub async fn sign_up(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<SignUpOutput> {
        self.clear_error();
        let use_case = SignUpUseCase::new(self.provider.clone());
        let result = use_case
            .execute(SignUpInput {
                email: email.into(),
                password: password.into(),
            })
            .await;
        self.record_failure(result)
    }

    /// Sign in with existing credentials
    pub async fn sign_in(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<SignInOutput> {
        self.clear_error();
        let use_case = SignInUseCase::new(self.provider.clone());
        let result = use_case
            .execute(SignInInput {
                email: email.into(),
                password: password.into(),
            })
            .await;
        self.record_failure(result)
    }

    /// Sign out the current principal
    pub async fn sign_out(&self) -> AuthResult<()> {
        self.clear_error();
        let use_case = SignOutUseCase::new(self.provider.clone());
        let result = use_case.execute().await;
        self.record_failure(result)
    }

    /// Change the current principal's password
    ///
    /// Fails with `NotSignedIn` before reaching the provider when nobody
    /// is signed in.
    pub async fn change_password(&self, new_password: impl Into<String>) -> AuthResult<()> {
        self.clear_error();
        let current = self.state.borrow().principal.clone();
        let use_case = ChangePasswordUseCase::new(self.provider.clone());
        let result = use_case
            .execute(
                current.as_ref(),
                ChangePasswordInput {
                    new_password: new_password.into(),
                },
            )
            .await;
        self.record_failure(result)
    }

    // ========================================================================
    // Error recording
    // ========================================================================

    fn clear_error(&self) {
        self.state.send_modify(|snapshot| snapshot.error = None);
    }

    /// On failure, log and publish the display message, then hand the typed
    /// error back to the caller
    fn record_failure<T>(&self, result: AuthResult<T>) -> AuthResult<T> {
        if let Err(err) = &result {
            err.log();
            let message = err.to_string();
            self.state.send_modify(|snapshot| snapshot.error = Some(message));
        }
        result
    }
}

impl<P> Drop for SessionStore<P>
where
    P: IdentityProvider,
{
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_is_loading() {
        let snapshot = SessionSnapshot::initial();
        assert!(snapshot.loading);
        assert!(snapshot.principal.is_none());
        assert!(snapshot.error.is_none());
        assert!(!snapshot.is_authenticated());
    }

    #[test]
    fn test_is_authenticated_requires_resolved_state() {
        use kernel::email::Email;

        let mut snapshot = SessionSnapshot::initial();
        snapshot.principal = Some(Principal::new(Email::new("a@example.com").unwrap()));
        // Still loading, so not authenticated yet
        assert!(!snapshot.is_authenticated());

        snapshot.loading = false;
        assert!(snapshot.is_authenticated());
    }
}
