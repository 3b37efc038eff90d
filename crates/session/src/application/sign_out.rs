//! Sign Out Use Case

use std::sync::Arc;

use crate::domain::provider::IdentityProvider;
use crate::error::AuthResult;

/// Sign out use case
///
/// Delegates to the provider; the resulting `None` principal arrives through
/// the auth-state stream like any other change.
pub struct SignOutUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignOutUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self) -> AuthResult<()> {
        self.provider.sign_out().await?;

        tracing::info!("User signed out");

        Ok(())
    }
}
