//! Port abstraction for user persistence adapters.

use async_trait::async_trait;

use crate::domain::user::{User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// The backing store could not be reached.
    #[error("user store unavailable: {message}")]
    Connection {
        /// Adapter-specific cause.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-specific cause.
        message: String,
    },
}

/// Keyed store of user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user record, replacing any record with the same id.
    async fn put(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by exact email match.
    ///
    /// Adapters implement this as a full-set scan (no index guarantee); the
    /// match is case-sensitive.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;
}
