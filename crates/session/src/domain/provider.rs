//! Identity Provider Contract
//!
//! Port over the hosted identity provider. Implementations own credential
//! verification and decide who is signed in; everything else in this crate
//! observes that decision through the push stream from [`subscribe`].
//!
//! [`subscribe`]: IdentityProvider::subscribe

use kernel::email::Email;
use kernel::id::PrincipalId;
use platform::fault::ProviderFault;
use platform::password::ClearTextPassword;
use tokio::sync::watch;

use crate::domain::entity::principal::Principal;

/// Identity provider operations
///
/// Credential operations return the affected principal for logging, but the
/// authoritative "who is signed in" answer always arrives through the
/// subscription stream, including for the caller's own operations.
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Register a new account and sign it in
    async fn create_account(
        &self,
        email: &Email,
        password: &ClearTextPassword,
    ) -> Result<Principal, ProviderFault>;

    /// Sign in with existing credentials
    async fn sign_in(
        &self,
        email: &Email,
        password: &ClearTextPassword,
    ) -> Result<Principal, ProviderFault>;

    /// Sign out whoever is currently signed in
    async fn sign_out(&self) -> Result<(), ProviderFault>;

    /// Replace the password of an existing account
    async fn change_password(
        &self,
        principal_id: PrincipalId,
        new_password: &ClearTextPassword,
    ) -> Result<(), ProviderFault>;

    /// Subscribe to auth-state pushes
    ///
    /// The receiver starts at the current signed-in principal (or `None`)
    /// and yields every change after that. Dropping the receiver ends the
    /// subscription.
    fn subscribe(&self) -> watch::Receiver<Option<Principal>>;
}
