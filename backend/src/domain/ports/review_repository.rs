//! Port abstraction for review persistence adapters.

use async_trait::async_trait;

use crate::domain::review::{Review, ReviewId};
use crate::domain::stall::StallId;
use crate::domain::user::UserId;

/// Persistence errors raised by review repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewRepositoryError {
    /// The backing store could not be reached.
    #[error("review store unavailable: {message}")]
    Connection {
        /// Adapter-specific cause.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("review store query failed: {message}")]
    Query {
        /// Adapter-specific cause.
        message: String,
    },
}

/// Keyed store of review records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a review record, replacing any record with the same id.
    async fn put(&self, review: &Review) -> Result<(), ReviewRepositoryError>;

    /// Fetch a review by identifier.
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError>;

    /// Delete a review by identifier. Deleting an absent record is a no-op.
    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewRepositoryError>;

    /// Reviews of a stall in storage order (full-set scan).
    async fn list_by_stall(&self, stall_id: &StallId)
    -> Result<Vec<Review>, ReviewRepositoryError>;

    /// The review a given author wrote for a given stall, if any.
    ///
    /// At most one such review exists; the uniqueness rule is enforced by the
    /// review service before insertion.
    async fn find_by_stall_and_author(
        &self,
        stall_id: &StallId,
        author_id: &UserId,
    ) -> Result<Option<Review>, ReviewRepositoryError>;
}
