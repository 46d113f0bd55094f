//! Identity service: registration, login, and actor resolution.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::ports::{
    CredentialError, CredentialHasher, IdentityStore, RegisterUserRequest, TokenError,
    TokenService, UserRepository, UserRepositoryError,
};
use crate::domain::user::{User, UserId};

/// Bearer token lifetime: seven days from issuance.
pub const TOKEN_TTL_DAYS: i64 = 7;

fn map_repository_error(error: UserRepositoryError) -> DomainError {
    DomainError::internal(format!("user repository error: {error}"))
}

fn map_credential_error(error: CredentialError) -> DomainError {
    DomainError::internal(format!("credential hashing error: {error}"))
}

/// Identity service implementing the [`IdentityStore`] driving port.
#[derive(Clone)]
pub struct IdentityService<R, H, T> {
    users: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R, H, T> IdentityService<R, H, T> {
    /// Create a new service over the user repository and the credential and
    /// token collaborators.
    pub fn new(users: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R, H, T> IdentityStore for IdentityService<R, H, T>
where
    R: UserRepository,
    H: CredentialHasher,
    T: TokenService,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        let existing = self
            .users
            .find_by_email(&request.email)
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            return Err(DomainError::duplicate_email(
                "user with this email already exists",
            ));
        }

        let password_hash = self
            .hasher
            .hash(&request.password)
            .map_err(map_credential_error)?;

        let now = Utc::now();
        let user = User {
            id: UserId::random(),
            email: request.email,
            full_name: request.full_name,
            password_hash,
            role: request.role,
            created_at: now,
            updated_at: now,
        };
        self.users.put(&user).await.map_err(map_repository_error)?;

        info!(user_id = %user.id, role = %user.role, "registered user");
        Ok(user)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<String, DomainError> {
        // Unknown email and wrong password collapse into one denial so the
        // endpoint cannot be used to enumerate accounts.
        let denied = || DomainError::invalid_credentials("incorrect email or password");

        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(denied)?;

        let matches = self
            .hasher
            .verify(password, &user.password_hash)
            .map_err(map_credential_error)?;
        if !matches {
            return Err(denied());
        }

        self.tokens
            .issue(&user.id, Duration::days(TOKEN_TTL_DAYS))
            .map_err(|error| DomainError::internal(format!("token issuance failed: {error}")))
    }

    async fn resolve_actor(&self, token: &str) -> Result<User, DomainError> {
        let subject = self.tokens.verify(token).map_err(|error| match error {
            TokenError::Expired | TokenError::Malformed { .. } | TokenError::BadSignature => {
                DomainError::unauthenticated("could not validate credentials")
            }
            TokenError::Issue { message } => {
                DomainError::internal(format!("token verification failed: {message}"))
            }
        })?;

        self.users
            .find_by_id(&subject)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| DomainError::unauthenticated("could not validate credentials"))
    }
}

#[cfg(test)]
#[path = "identity_service_tests.rs"]
mod tests;
