//! Port abstraction for the signed-token collaborator.

use chrono::Duration;

use crate::domain::user::UserId;

/// Errors raised by token service adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token's validity window has passed.
    #[error("token expired")]
    Expired,
    /// The token could not be parsed or is missing required claims.
    #[error("malformed token: {message}")]
    Malformed {
        /// Adapter-specific cause.
        message: String,
    },
    /// The token's signature does not verify.
    #[error("bad token signature")]
    BadSignature,
    /// Token issuance failed inside the adapter.
    #[error("token issuance failed: {message}")]
    Issue {
        /// Adapter-specific cause.
        message: String,
    },
}

/// Issue and verify signed bearer tokens carrying a user identifier.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Issue a signed token for the subject, valid for `ttl` from now.
    fn issue(&self, subject: &UserId, ttl: Duration) -> Result<String, TokenError>;

    /// Verify a token and return the embedded subject.
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}
