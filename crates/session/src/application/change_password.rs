//! Change Password Use Case
//!
//! Replaces the password of the currently signed-in principal.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::principal::Principal;
use crate::domain::provider::IdentityProvider;
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> ChangePasswordUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Execute the password change for `current`
    ///
    /// Fails with [`AuthError::NotSignedIn`] before touching the provider
    /// when no principal is signed in.
    pub async fn execute(
        &self,
        current: Option<&Principal>,
        input: ChangePasswordInput,
    ) -> AuthResult<()> {
        let principal = current.ok_or(AuthError::NotSignedIn)?;

        // The new password must meet the provider policy
        let password = ClearTextPassword::new(input.new_password)?;

        self.provider.change_password(principal.id, &password).await?;

        tracing::info!(principal_id = %principal.id, "Password changed");

        Ok(())
    }
}
