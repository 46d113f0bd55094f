//! Driving port for review use-cases.

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::review::{Review, ReviewId};
use crate::domain::stall::StallId;
use crate::domain::user::User;

/// Parameters for submitting a new review.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReviewRequest {
    /// The acting user; must not own the stall.
    pub actor: User,
    /// Reviewed stall.
    pub stall_id: StallId,
    /// Raw star rating; validated into [1, 5].
    pub rating: i32,
    /// Free-form comment.
    pub comment: String,
}

/// Parameters for replacing an existing review's content.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReviewRequest {
    /// The acting user; must be the review's author.
    pub actor: User,
    /// Addressed stall; must match the review's parent reference.
    pub stall_id: StallId,
    /// Addressed review.
    pub review_id: ReviewId,
    /// Raw star rating; validated into [1, 5].
    pub rating: i32,
    /// Replacement comment. Rating and comment are replaced as a pair.
    pub comment: String,
}

/// Domain use-case port for the review ledger.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewLedger: Send + Sync {
    /// Submit a review for a stall the actor does not own.
    ///
    /// At most one review per (stall, author) pair; a second submission
    /// fails with `duplicate_review`.
    async fn create(&self, request: SubmitReviewRequest) -> Result<Review, DomainError>;

    /// List a stall's reviews in storage order.
    async fn list(&self, stall_id: &StallId) -> Result<Vec<Review>, DomainError>;

    /// Replace the rating and comment of a review authored by the actor.
    async fn update(&self, request: UpdateReviewRequest) -> Result<Review, DomainError>;

    /// Delete a review authored by the actor.
    async fn delete(
        &self,
        actor: &User,
        stall_id: &StallId,
        review_id: &ReviewId,
    ) -> Result<(), DomainError>;
}
