//! Stall model: the marketplace listing owned by an owner-role user.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::geo::{GeoPoint, GeoValidationError};
use crate::domain::user::UserId;

/// Stable stall identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StallId(Uuid);

impl StallId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for StallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StallId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A stall's physical location: validated coordinates plus a street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180].
    pub longitude: f64,
    /// Free-form street address.
    pub address: String,
}

impl Location {
    /// Validate coordinate ranges and construct a location.
    pub fn new(
        latitude: f64,
        longitude: f64,
        address: impl Into<String>,
    ) -> Result<Self, GeoValidationError> {
        let point = GeoPoint::new(latitude, longitude)?;
        Ok(Self {
            latitude: point.latitude,
            longitude: point.longitude,
            address: address.into(),
        })
    }

    /// The coordinate pair without the address.
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Merge a partial update into this location.
    ///
    /// The location is an atomic sub-object: components absent from the patch
    /// carry over from the stored value, and the merged result is revalidated
    /// as a whole.
    pub fn merged(&self, patch: LocationPatch) -> Result<Self, GeoValidationError> {
        Self::new(
            patch.latitude.unwrap_or(self.latitude),
            patch.longitude.unwrap_or(self.longitude),
            patch.address.unwrap_or_else(|| self.address.clone()),
        )
    }
}

/// Partial update of a [`Location`]; `None` components keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPatch {
    /// Replacement latitude, if supplied.
    pub latitude: Option<f64>,
    /// Replacement longitude, if supplied.
    pub longitude: Option<f64>,
    /// Replacement address, if supplied.
    pub address: Option<String>,
}

impl LocationPatch {
    /// Whether any component was supplied.
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none() && self.address.is_none()
    }
}

/// A food stall listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stall {
    /// Stable identifier.
    pub id: StallId,
    /// Owning user; must be an owner-role account.
    pub owner_id: UserId,
    /// Stall name shown in listings.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Physical location.
    pub location: Location,
    /// Retrievable URL of the stall image in the object store.
    pub image_url: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last mutation instant.
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a [`Stall`]; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StallPatch {
    /// Replacement name, if supplied.
    pub name: Option<String>,
    /// Replacement description, if supplied.
    pub description: Option<String>,
    /// Partial location update; merged component-wise with the stored value.
    pub location: LocationPatch,
}

impl Stall {
    /// Apply a partial update, returning the merged record.
    ///
    /// `updated_at` is stamped by the caller once any image replacement has
    /// also been resolved.
    pub fn patched(&self, patch: StallPatch) -> Result<Self, GeoValidationError> {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if !patch.location.is_empty() {
            next.location = self.location.merged(patch.location)?;
        }
        Ok(next)
    }
}
