//! Unit tests for the session crate
//!
//! Exercises the store, provider, and guard together over the in-memory
//! identity provider, without sleeps: every assertion that depends on the
//! listener task awaits the watch channel instead of wall time.

#[cfg(test)]
mod session_store_tests {
    use std::sync::Arc;

    use tokio::sync::watch;

    use crate::application::session_store::{SessionSnapshot, SessionStore};
    use crate::error::AuthError;
    use crate::infra::memory::MemoryIdentityProvider;

    fn store() -> SessionStore<MemoryIdentityProvider> {
        SessionStore::new(Arc::new(MemoryIdentityProvider::new()))
    }

    async fn wait_until(
        states: &mut watch::Receiver<SessionSnapshot>,
        pred: impl Fn(&SessionSnapshot) -> bool,
    ) -> SessionSnapshot {
        loop {
            {
                let snapshot = states.borrow_and_update();
                if pred(&snapshot) {
                    return snapshot.clone();
                }
            }
            states.changed().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_store_resolves_anonymous_on_start() {
        let store = store();
        let mut states = store.subscribe();
        assert!(store.snapshot().loading);

        store.start();
        let snapshot = wait_until(&mut states, |s| !s.loading).await;
        assert!(snapshot.principal.is_none());
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_signup_then_login_with_same_credentials() {
        let store = store();
        let mut states = store.subscribe();
        store.start();

        let output = store.sign_up("alice@example.com", "secret1").await.unwrap();
        assert_eq!(output.email, "alice@example.com");
        let snapshot = wait_until(&mut states, |s| s.is_authenticated()).await;
        assert_eq!(
            snapshot.principal.unwrap().email.as_str(),
            "alice@example.com"
        );

        store.sign_out().await.unwrap();
        wait_until(&mut states, |s| !s.loading && s.principal.is_none()).await;

        store.sign_in("alice@example.com", "secret1").await.unwrap();
        let snapshot = wait_until(&mut states, |s| s.is_authenticated()).await;
        assert_eq!(
            snapshot.principal.unwrap().email.as_str(),
            "alice@example.com"
        );
    }

    #[tokio::test]
    async fn test_failed_login_records_provider_message() {
        let store = store();
        let mut states = store.subscribe();
        store.start();

        store.sign_up("bob@example.com", "secret1").await.unwrap();
        wait_until(&mut states, |s| s.is_authenticated()).await;
        store.sign_out().await.unwrap();
        wait_until(&mut states, |s| !s.loading && s.principal.is_none()).await;

        let err = store.sign_in("bob@example.com", "wrong99").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        // The same message is published on the snapshot for display
        assert_eq!(
            store.snapshot().error.as_deref(),
            Some("Invalid email or password")
        );

        // The failure pushes nothing, so nobody is signed in
        assert!(store.snapshot().principal.is_none());
    }

    #[tokio::test]
    async fn test_next_operation_clears_recorded_error() {
        let store = store();
        let mut states = store.subscribe();
        store.start();

        store.sign_up("carol@example.com", "secret1").await.unwrap();
        wait_until(&mut states, |s| s.is_authenticated()).await;
        store.sign_out().await.unwrap();

        store.sign_in("carol@example.com", "bad-pass").await.unwrap_err();
        assert!(store.snapshot().error.is_some());

        store.sign_in("carol@example.com", "secret1").await.unwrap();
        assert!(store.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_conflict() {
        let store = store();
        let mut states = store.subscribe();
        store.start();

        store.sign_up("dave@example.com", "secret1").await.unwrap();
        wait_until(&mut states, |s| s.is_authenticated()).await;

        let err = store.sign_up("dave@example.com", "other99").await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Conflict);
        assert_eq!(
            store.snapshot().error.as_deref(),
            Some("An account already exists for this email address")
        );
    }

    #[tokio::test]
    async fn test_short_password_rejected_before_provider() {
        let store = store();
        store.start();

        let err = store.sign_up("eve@example.com", "five5").await.unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
        assert_eq!(
            err.to_string(),
            "Password should be at least 6 characters (got 5)"
        );
    }

    #[tokio::test]
    async fn test_change_password_requires_signed_in_user() {
        let store = store();
        let mut states = store.subscribe();
        store.start();
        wait_until(&mut states, |s| !s.loading).await;

        // NotSignedIn can only come from the local check; the provider
        // reports unknown principals differently
        let err = store.change_password("fresh-pass").await.unwrap_err();
        assert!(matches!(err, AuthError::NotSignedIn));
        assert_eq!(err.to_string(), "No user logged in");
        assert_eq!(store.snapshot().error.as_deref(), Some("No user logged in"));
    }

    #[tokio::test]
    async fn test_change_password_round_trip() {
        let store = store();
        let mut states = store.subscribe();
        store.start();

        store.sign_up("frank@example.com", "oldpass").await.unwrap();
        wait_until(&mut states, |s| s.is_authenticated()).await;

        store.change_password("newpass").await.unwrap();
        store.sign_out().await.unwrap();
        wait_until(&mut states, |s| !s.loading && s.principal.is_none()).await;

        store.sign_in("frank@example.com", "oldpass").await.unwrap_err();
        store.sign_in("frank@example.com", "newpass").await.unwrap();
        wait_until(&mut states, |s| s.is_authenticated()).await;
    }

    #[tokio::test]
    async fn test_start_twice_is_noop() {
        let store = store();
        let mut states = store.subscribe();
        store.start();
        store.start();
        assert!(store.is_started());

        store.sign_up("grace@example.com", "secret1").await.unwrap();
        let snapshot = wait_until(&mut states, |s| s.is_authenticated()).await;
        assert_eq!(
            snapshot.principal.unwrap().email.as_str(),
            "grace@example.com"
        );
    }

    #[tokio::test]
    async fn test_dispose_stops_folding_pushes() {
        let provider = Arc::new(MemoryIdentityProvider::new());
        let store = SessionStore::new(provider.clone());
        let mut states = store.subscribe();
        store.start();
        wait_until(&mut states, |s| !s.loading).await;

        store.dispose();
        assert!(!store.is_started());

        // A push after dispose must not reach the snapshot
        use crate::domain::provider::IdentityProvider;
        use kernel::email::Email;
        use platform::password::ClearTextPassword;
        provider
            .create_account(
                &Email::new("late@example.com").unwrap(),
                &ClearTextPassword::new("secret1".to_string()).unwrap(),
            )
            .await
            .unwrap();

        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        assert!(store.snapshot().principal.is_none());

        // Second dispose is harmless
        store.dispose();
    }

    #[tokio::test]
    async fn test_dropping_store_closes_state_stream() {
        let store = store();
        let mut states = store.subscribe();
        store.start();
        wait_until(&mut states, |s| !s.loading).await;

        drop(store);
        assert!(states.changed().await.is_err());
    }
}

#[cfg(test)]
mod guard_flow_tests {
    use std::sync::Arc;

    use crate::application::session_store::SessionStore;
    use crate::infra::memory::MemoryIdentityProvider;
    use crate::presentation::guard::{GuardState, RouteAccess, SessionGuard};

    async fn advance_to(guard: &mut SessionGuard, target: GuardState) {
        while guard.state() != target {
            guard.next().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_guard_over_live_store() {
        let store = SessionStore::new(Arc::new(MemoryIdentityProvider::new()));
        let mut guard = SessionGuard::new(store.subscribe());
        assert_eq!(guard.state(), GuardState::Checking);
        assert_eq!(guard.access(), RouteAccess::Wait);

        store.start();
        assert_eq!(guard.resolved().await.unwrap(), GuardState::Anonymous);
        assert_eq!(guard.access(), RouteAccess::Prompt);

        store.sign_up("walk@example.com", "secret1").await.unwrap();
        advance_to(&mut guard, GuardState::Authenticated).await;
        match guard.access() {
            RouteAccess::Allow(principal) => {
                assert_eq!(principal.email.as_str(), "walk@example.com");
            }
            other => panic!("expected Allow, got {other:?}"),
        }

        store.sign_out().await.unwrap();
        advance_to(&mut guard, GuardState::Anonymous).await;
        assert_eq!(guard.access(), RouteAccess::Prompt);
    }

    #[tokio::test]
    async fn test_guard_shows_error_next_to_prompt() {
        let store = SessionStore::new(Arc::new(MemoryIdentityProvider::new()));
        let mut guard = SessionGuard::new(store.subscribe());
        store.start();
        guard.resolved().await.unwrap();

        store.sign_in("ghost@example.com", "secret1").await.unwrap_err();
        // Fold snapshots until the recorded message is visible
        while guard.error().is_none() {
            guard.next().await.unwrap();
        }
        assert_eq!(guard.state(), GuardState::Anonymous);
        assert_eq!(guard.error(), Some("Invalid email or password"));
    }
}
