//! Error types for credential and session operations.
//!
//! Every fallible operation in this crate returns [`Error`]. The variants keep
//! the internal reason for a failure so it can be logged, while
//! [`Error::public`] reduces it to what an end user may be told.

use sea_orm::DbErr;

use crate::secure_random::EntropyError;

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures produced by [`CredentialStore`](crate::CredentialStore) and
/// [`SessionManager`](crate::SessionManager).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No principal with that email, or no session for that token.
    #[error("not found")]
    NotFound,

    /// The principal exists but the password did not verify.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A principal with the same normalized email already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The password hashing engine failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// A stored password digest could not be parsed or checked.
    #[error("password verification failed: {0}")]
    Verification(String),

    /// The secure random source could not produce a session token.
    #[error("token generation failed: {0}")]
    TokenGeneration(#[from] EntropyError),

    /// The backing store returned an error.
    #[error("persistence error: {0}")]
    Persistence(#[from] DbErr),

    /// Configuration was missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// What a caller outside the core is allowed to learn about a failure.
///
/// `NotFound` and `InvalidCredentials` both become
/// [`PublicError::AuthenticationFailed`] so a login form cannot be used to
/// probe which emails are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PublicError {
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("account already exists")]
    Conflict,
    #[error("internal server error")]
    Internal,
}

impl Error {
    /// Returns `true` for the expected failures of a login or token lookup.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Error::NotFound | Error::InvalidCredentials)
    }

    /// Collapses this error into its externally visible form.
    pub fn public(&self) -> PublicError {
        match self {
            Error::NotFound | Error::InvalidCredentials => PublicError::AuthenticationFailed,
            Error::Conflict(_) => PublicError::Conflict,
            Error::Hashing(_)
            | Error::Verification(_)
            | Error::TokenGeneration(_)
            | Error::Persistence(_)
            | Error::Config(_) => PublicError::Internal,
        }
    }
}
