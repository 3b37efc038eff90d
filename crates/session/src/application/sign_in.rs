//! Sign In Use Case
//!
//! Authenticates existing credentials against the identity provider.

use std::sync::Arc;

use kernel::email::Email;
use platform::fault::ProviderFault;
use platform::password::ClearTextPassword;

use crate::domain::provider::IdentityProvider;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub principal_id: String,
    pub email: String,
}

/// Sign in use case
pub struct SignInUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignInUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Execute the sign-in flow
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Credentials that cannot belong to any account short-circuit as
        // invalid-credential, the same fault the provider would return.
        // Which part failed is not leaked.
        let email = Email::new(input.email)
            .map_err(|_| AuthError::Provider(ProviderFault::invalid_credential()))?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::Provider(ProviderFault::invalid_credential()))?;

        let principal = self.provider.sign_in(&email, &password).await?;

        tracing::info!(principal_id = %principal.id, "User signed in");

        Ok(SignInOutput {
            principal_id: principal.id.to_string(),
            email: principal.email.to_string(),
        })
    }
}
