//! In-Memory Identity Provider
//!
//! Stand-in for the hosted identity provider with real Argon2id credential
//! hashing and the same push behavior. Fills the role the auth emulator
//! plays in local development, and doubles as the test provider.

use std::collections::HashMap;

use tokio::sync::{RwLock, watch};

use kernel::email::Email;
use kernel::id::PrincipalId;
use platform::fault::{ProviderFault, code};
use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::entity::principal::Principal;
use crate::domain::provider::IdentityProvider;

/// One registered account
struct Account {
    principal: Principal,
    password: HashedPassword,
}

/// In-memory identity provider
///
/// Accounts are keyed by canonical email. The signed-in principal lives in
/// the watch channel itself; there is no separate "current user" field to
/// fall out of sync.
pub struct MemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    auth_state: watch::Sender<Option<Principal>>,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        let (auth_state, _) = watch::channel(None);
        Self {
            accounts: RwLock::new(HashMap::new()),
            auth_state,
        }
    }

    /// Number of registered accounts
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    fn push(&self, principal: Option<Principal>) {
        // send_replace updates the value even when nobody subscribed yet,
        // so a late subscriber still sees the current state
        self.auth_state.send_replace(principal);
    }

    fn hash_fault(err: impl std::fmt::Display) -> ProviderFault {
        ProviderFault::new(code::INTERNAL_ERROR, err.to_string())
    }
}

impl Default for MemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    async fn create_account(
        &self,
        email: &Email,
        password: &ClearTextPassword,
    ) -> Result<Principal, ProviderFault> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email.as_str()) {
            return Err(ProviderFault::email_already_in_use());
        }

        let hashed = password.hash().map_err(Self::hash_fault)?;
        let principal = Principal::new(email.clone());
        accounts.insert(
            email.as_str().to_string(),
            Account {
                principal: principal.clone(),
                password: hashed,
            },
        );
        drop(accounts);

        // The hosted provider signs a fresh account in immediately
        self.push(Some(principal.clone()));
        Ok(principal)
    }

    async fn sign_in(
        &self,
        email: &Email,
        password: &ClearTextPassword,
    ) -> Result<Principal, ProviderFault> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(email.as_str())
            .ok_or_else(ProviderFault::invalid_credential)?;
        if !account.password.verify(password) {
            return Err(ProviderFault::invalid_credential());
        }
        let principal = account.principal.clone();
        drop(accounts);

        self.push(Some(principal.clone()));
        Ok(principal)
    }

    async fn sign_out(&self) -> Result<(), ProviderFault> {
        self.push(None);
        Ok(())
    }

    async fn change_password(
        &self,
        principal_id: PrincipalId,
        new_password: &ClearTextPassword,
    ) -> Result<(), ProviderFault> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .values_mut()
            .find(|account| account.principal.id == principal_id)
            .ok_or_else(ProviderFault::user_not_found)?;
        account.password = new_password.hash().map_err(Self::hash_fault)?;
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Principal>> {
        self.auth_state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str) -> Email {
        Email::new(value).unwrap()
    }

    fn password(value: &str) -> ClearTextPassword {
        ClearTextPassword::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_account_pushes_principal() {
        let provider = MemoryIdentityProvider::new();
        let pushes = provider.subscribe();
        assert!(pushes.borrow().is_none());

        let principal = provider
            .create_account(&email("new@example.com"), &password("secret1"))
            .await
            .unwrap();

        let pushed = pushes.borrow().clone().unwrap();
        assert_eq!(pushed.id, principal.id);
        assert_eq!(pushed.email.as_str(), "new@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let provider = MemoryIdentityProvider::new();
        provider
            .create_account(&email("dup@example.com"), &password("secret1"))
            .await
            .unwrap();

        let err = provider
            .create_account(&email("dup@example.com"), &password("other99"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::EMAIL_ALREADY_IN_USE);
        assert_eq!(provider.account_count().await, 1);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_is_invalid_credential() {
        let provider = MemoryIdentityProvider::new();
        provider
            .create_account(&email("who@example.com"), &password("correct1"))
            .await
            .unwrap();

        let err = provider
            .sign_in(&email("who@example.com"), &password("wrong99"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::INVALID_CREDENTIAL);

        // Unknown account reports the same fault as a wrong password
        let err = provider
            .sign_in(&email("nobody@example.com"), &password("correct1"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::INVALID_CREDENTIAL);
    }

    #[tokio::test]
    async fn test_sign_out_pushes_none() {
        let provider = MemoryIdentityProvider::new();
        let pushes = provider.subscribe();

        provider
            .create_account(&email("out@example.com"), &password("secret1"))
            .await
            .unwrap();
        assert!(pushes.borrow().is_some());

        provider.sign_out().await.unwrap();
        assert!(pushes.borrow().is_none());
    }

    #[tokio::test]
    async fn test_change_password_takes_effect() {
        let provider = MemoryIdentityProvider::new();
        let principal = provider
            .create_account(&email("rotate@example.com"), &password("oldpass"))
            .await
            .unwrap();

        provider
            .change_password(principal.id, &password("newpass"))
            .await
            .unwrap();

        let err = provider
            .sign_in(&email("rotate@example.com"), &password("oldpass"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::INVALID_CREDENTIAL);

        provider
            .sign_in(&email("rotate@example.com"), &password("newpass"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_change_password_unknown_principal() {
        let provider = MemoryIdentityProvider::new();
        let err = provider
            .change_password(PrincipalId::new(), &password("whatever1"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::USER_NOT_FOUND);
    }
}
