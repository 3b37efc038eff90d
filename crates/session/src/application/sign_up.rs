//! Sign Up Use Case
//!
//! Registers a new account with the identity provider.

use std::sync::Arc;

use kernel::email::Email;
use platform::password::ClearTextPassword;

use crate::domain::provider::IdentityProvider;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub principal_id: String,
    pub email: String,
}

/// Sign up use case
pub struct SignUpUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignUpUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Execute the sign-up flow
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate email format
        let email = Email::new(input.email)
            .map_err(|e| AuthError::InvalidEmail(e.message().to_string()))?;

        // Enforce the provider password policy before going remote
        let password = ClearTextPassword::new(input.password)?;

        // The provider signs the fresh account in and pushes it on the
        // auth-state stream; the session store picks it up from there
        let principal = self.provider.create_account(&email, &password).await?;

        tracing::info!(principal_id = %principal.id, "Account created");

        Ok(SignUpOutput {
            principal_id: principal.id.to_string(),
            email: principal.email.to_string(),
        })
    }
}
