//! User account model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Marketplace role an account registers as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Runs one or more stalls; may create and manage them.
    Owner,
    /// Browses stalls and writes reviews.
    Customer,
}

/// Error raised when a role string is neither `owner` nor `customer`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("role must be either 'owner' or 'customer'")]
pub struct InvalidRole;

impl Role {
    /// Stable lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "customer" => Ok(Self::Customer),
            _ => Err(InvalidRole),
        }
    }
}

/// A registered account.
///
/// The credential field holds the PHC-format hash produced by the credential
/// hasher port; the plaintext never reaches this type. Accounts are immutable
/// after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Login email, unique across accounts (case-sensitive as stored).
    pub email: String,
    /// Display name shown on reviews.
    pub full_name: String,
    /// Hashed credential. Never serialised out by inbound adapters.
    pub password_hash: String,
    /// Marketplace role.
    pub role: Role,
    /// Registration instant.
    pub created_at: DateTime<Utc>,
    /// Last mutation instant; equals `created_at` for this immutable record.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the account registered as an owner.
    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}
