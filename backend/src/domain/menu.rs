//! Menu item model: a dish offered by a stall.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::stall::StallId;

/// Stable menu item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(Uuid);

impl MenuItemId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MenuItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Error raised when a price is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("price must not be negative")]
pub struct NegativePrice;

/// Validate a menu item price.
pub fn validate_price(price: f64) -> Result<f64, NegativePrice> {
    if price < 0.0 || !price.is_finite() {
        return Err(NegativePrice);
    }
    Ok(price)
}

/// A dish on a stall's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier.
    pub id: MenuItemId,
    /// Parent stall. Writes are only permitted to that stall's owner.
    pub stall_id: StallId,
    /// Dish name.
    pub name: String,
    /// Price in the stall's currency; non-negative.
    pub price: f64,
    /// Longer description.
    pub description: String,
    /// Free-form category used for filtering and bulk deletion.
    pub category: String,
    /// Retrievable URL of the dish image in the object store.
    pub image_url: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last mutation instant.
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a [`MenuItem`]; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemPatch {
    /// Replacement name, if supplied.
    pub name: Option<String>,
    /// Replacement price, if supplied; validated as non-negative.
    pub price: Option<f64>,
    /// Replacement description, if supplied.
    pub description: Option<String>,
    /// Replacement category, if supplied.
    pub category: Option<String>,
}

impl MenuItem {
    /// Apply a partial update, returning the merged record.
    pub fn patched(&self, patch: MenuItemPatch) -> Result<Self, NegativePrice> {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(price) = patch.price {
            next.price = validate_price(price)?;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(category) = patch.category {
            next.category = category;
        }
        Ok(next)
    }
}
