//! Review model: a customer's rating of a stall.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::stall::StallId;
use crate::domain::user::UserId;

/// Stable review identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(Uuid);

impl ReviewId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReviewId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Error raised when a rating falls outside [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating must be between 1 and 5")]
pub struct RatingOutOfRange;

/// An integer star rating in [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(i32);

impl Rating {
    /// Validate and construct a rating.
    pub fn new(value: i32) -> Result<Self, RatingOutOfRange> {
        if !(1..=5).contains(&value) {
            return Err(RatingOutOfRange);
        }
        Ok(Self(value))
    }

    /// The numeric value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// A customer's review of a stall.
///
/// `author_name` is a denormalised snapshot of the author's full name taken
/// at creation; it is not kept in sync afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Stable identifier.
    pub id: ReviewId,
    /// Reviewed stall.
    pub stall_id: StallId,
    /// Authoring user; the only account allowed to mutate this review.
    pub author_id: UserId,
    /// Author display name captured at creation time.
    pub author_name: String,
    /// Star rating in [1, 5].
    pub rating: Rating,
    /// Free-form comment.
    pub comment: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last mutation instant.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-3)]
    fn out_of_range_ratings_are_rejected(#[case] value: i32) {
        assert_eq!(Rating::new(value), Err(RatingOutOfRange));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn in_range_ratings_pass(#[case] value: i32) {
        assert_eq!(Rating::new(value).map(|r| r.value()), Ok(value));
    }
}
