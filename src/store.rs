//! The operations the surrounding web layer may call.
//!
//! Handlers should depend on these traits rather than on the concrete
//! SeaORM-backed types, so they can be exercised against another backend.

use async_trait::async_trait;

use crate::entity::{principal, session};
use crate::error::Result;

/// Creating and authenticating principals.
#[async_trait]
pub trait PrincipalStore: Send + Sync {
    /// Registers a principal under the normalized form of `email`.
    ///
    /// Fails with [`Error::Conflict`](crate::Error::Conflict) if the
    /// normalized email is already registered.
    async fn create_principal(&self, email: &str, password: &str) -> Result<principal::Model>;

    /// Checks an email and password pair.
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) for an unknown
    /// email and [`Error::InvalidCredentials`](crate::Error::InvalidCredentials)
    /// for a wrong password. Use [`Error::public`](crate::Error::public) before
    /// reporting either to a user.
    async fn authenticate_principal(&self, email: &str, password: &str)
        -> Result<principal::Model>;
}

/// Issuing, resolving and revoking opaque session tokens.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Issues a new session for `user_id`, replacing any existing one.
    ///
    /// Returns the raw token together with the stored row. The raw token is
    /// not kept anywhere and cannot be recovered later.
    async fn create_session(&self, user_id: i32) -> Result<(String, session::Model)>;

    /// Finds the principal owning `token`.
    ///
    /// Unknown, revoked, replaced and expired tokens all fail with
    /// [`Error::NotFound`](crate::Error::NotFound).
    async fn resolve_session(&self, token: &str) -> Result<principal::Model>;

    /// Deletes the session owning `token`. Unknown tokens are not an error.
    async fn revoke_session(&self, token: &str) -> Result<()>;
}

/// Bulk removal of sessions past their expiry.
#[async_trait]
pub trait ExpiredDeletion: Send + Sync {
    /// Deletes every expired session and returns how many were removed.
    async fn delete_expired(&self) -> Result<u64>;
}
