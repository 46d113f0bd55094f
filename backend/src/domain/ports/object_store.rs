//! Port abstraction for the blob storage collaborator.

use async_trait::async_trait;

/// Errors raised by object store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectStoreError {
    /// The blob could not be written.
    #[error("object store write failed: {message}")]
    Write {
        /// Adapter-specific cause.
        message: String,
    },
}

/// An image payload travelling from the inbound adapter to the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// MIME content type, e.g. `image/jpeg`.
    pub content_type: String,
}

/// Store blobs and hand back retrievable URLs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store a blob under a fresh key below `key_prefix` and return the URL
    /// it will be retrievable from.
    async fn store(
        &self,
        bytes: &[u8],
        content_type: &str,
        key_prefix: &str,
    ) -> Result<String, ObjectStoreError>;
}
