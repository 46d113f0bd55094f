//! Port abstraction for stall persistence adapters.

use async_trait::async_trait;

use crate::domain::stall::{Stall, StallId};

/// Persistence errors raised by stall repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StallRepositoryError {
    /// The backing store could not be reached.
    #[error("stall store unavailable: {message}")]
    Connection {
        /// Adapter-specific cause.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("stall store query failed: {message}")]
    Query {
        /// Adapter-specific cause.
        message: String,
    },
}

/// Keyed store of stall records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StallRepository: Send + Sync {
    /// Persist a stall record, replacing any record with the same id.
    async fn put(&self, stall: &Stall) -> Result<(), StallRepositoryError>;

    /// Fetch a stall by identifier.
    async fn find_by_id(&self, id: &StallId) -> Result<Option<Stall>, StallRepositoryError>;

    /// Delete a stall by identifier. Deleting an absent record is a no-op.
    async fn delete(&self, id: &StallId) -> Result<(), StallRepositoryError>;

    /// All stalls in storage order (full-set scan).
    async fn list_all(&self) -> Result<Vec<Stall>, StallRepositoryError>;
}
