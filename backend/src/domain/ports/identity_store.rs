//! Driving port for registration and authentication use-cases.
//!
//! Inbound adapters call this port to resolve bearer tokens into actors
//! without knowing the backing repository, hasher, or token infrastructure,
//! which keeps handler tests deterministic with mock substitutes.

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::{Role, User};

/// Parameters for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    /// Login email; must not collide with an existing account.
    pub email: String,
    /// Display name shown on reviews.
    pub full_name: String,
    /// Plaintext credential; hashed before persistence.
    pub password: String,
    /// Marketplace role.
    pub role: Role,
}

/// Domain use-case port for identity management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Register a new account.
    ///
    /// Fails with `duplicate_email` when an existing account shares the
    /// email (exact, case-sensitive match over the full set).
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError>;

    /// Exchange credentials for a signed bearer token.
    ///
    /// Unknown email and wrong password are deliberately indistinguishable:
    /// both fail with `invalid_credentials`.
    async fn authenticate(&self, email: &str, password: &str) -> Result<String, DomainError>;

    /// Resolve a bearer token into the acting user.
    ///
    /// Fails with `unauthenticated` when the token is malformed, expired,
    /// carries a bad signature, or its subject no longer resolves.
    async fn resolve_actor(&self, token: &str) -> Result<User, DomainError>;
}
