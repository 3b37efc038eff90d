//! Application Layer
//!
//! Credential use cases and the session store that owns the reactive state.

pub mod change_password;
pub mod session_store;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use session_store::{SessionSnapshot, SessionStore};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
