//! Port abstraction for the password hashing collaborator.

/// Errors raised by credential hashing adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// Hashing or verification failed for a reason other than a mismatch.
    #[error("credential operation failed: {message}")]
    Crypto {
        /// Adapter-specific cause.
        message: String,
    },
}

/// Secure hash-and-verify over plaintext credentials.
///
/// Hashing is CPU-bound, so the port is synchronous; callers run on worker
/// threads already.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext credential into an opaque, self-describing string.
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    /// Verify a plaintext credential against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; `Err` is reserved for malformed hashes and
    /// adapter failures.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError>;
}
