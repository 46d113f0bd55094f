//! Port abstraction for menu item persistence adapters.

use async_trait::async_trait;

use crate::domain::menu::{MenuItem, MenuItemId};
use crate::domain::stall::StallId;

/// Persistence errors raised by menu item repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuItemRepositoryError {
    /// The backing store could not be reached.
    #[error("menu item store unavailable: {message}")]
    Connection {
        /// Adapter-specific cause.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("menu item store query failed: {message}")]
    Query {
        /// Adapter-specific cause.
        message: String,
    },
}

/// Keyed store of menu item records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Persist a menu item record, replacing any record with the same id.
    async fn put(&self, item: &MenuItem) -> Result<(), MenuItemRepositoryError>;

    /// Fetch a menu item by identifier.
    async fn find_by_id(&self, id: &MenuItemId)
    -> Result<Option<MenuItem>, MenuItemRepositoryError>;

    /// Delete a menu item by identifier. Deleting an absent record is a no-op.
    async fn delete(&self, id: &MenuItemId) -> Result<(), MenuItemRepositoryError>;

    /// Menu items of a stall in storage order, optionally narrowed to an
    /// exact category match (full-set scan).
    async fn list_by_stall<'a>(
        &self,
        stall_id: &StallId,
        category: Option<&'a str>,
    ) -> Result<Vec<MenuItem>, MenuItemRepositoryError>;
}
