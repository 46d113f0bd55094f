//! Review ledger service: one review per customer per stall.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::access;
use crate::domain::error::DomainError;
use crate::domain::ports::{
    ReviewLedger, ReviewRepository, ReviewRepositoryError, StallRepository, StallRepositoryError,
    SubmitReviewRequest, UpdateReviewRequest,
};
use crate::domain::review::{Rating, Review, ReviewId};
use crate::domain::stall::StallId;
use crate::domain::user::User;

fn map_stall_repo_error(error: StallRepositoryError) -> DomainError {
    DomainError::internal(format!("stall repository error: {error}"))
}

fn map_review_repo_error(error: ReviewRepositoryError) -> DomainError {
    DomainError::internal(format!("review repository error: {error}"))
}

fn parse_rating(value: i32) -> Result<Rating, DomainError> {
    Rating::new(value).map_err(|error| DomainError::invalid_input(error.to_string()))
}

/// Review service implementing the [`ReviewLedger`] driving port.
#[derive(Clone)]
pub struct ReviewService<S, V> {
    stalls: Arc<S>,
    reviews: Arc<V>,
}

impl<S, V> ReviewService<S, V> {
    /// Create a new service over the stall and review repositories.
    pub fn new(stalls: Arc<S>, reviews: Arc<V>) -> Self {
        Self { stalls, reviews }
    }
}

impl<S, V> ReviewService<S, V>
where
    S: StallRepository,
    V: ReviewRepository,
{
    /// Authorize a write against an existing review, returning the stored
    /// record once the ownership chain checks out.
    async fn authorize_review_write(
        &self,
        actor: &User,
        stall_id: &StallId,
        review_id: &ReviewId,
    ) -> Result<Review, DomainError> {
        let stall = self
            .stalls
            .find_by_id(stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        let review = self
            .reviews
            .find_by_id(review_id)
            .await
            .map_err(map_review_repo_error)?;
        Ok(access::review_write(actor, stall.as_ref(), stall_id, review.as_ref())?.clone())
    }
}

#[async_trait]
impl<S, V> ReviewLedger for ReviewService<S, V>
where
    S: StallRepository,
    V: ReviewRepository,
{
    async fn create(&self, request: SubmitReviewRequest) -> Result<Review, DomainError> {
        let stall = self
            .stalls
            .find_by_id(&request.stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        access::review_create(&request.actor, stall.as_ref())?;

        let existing = self
            .reviews
            .find_by_stall_and_author(&request.stall_id, &request.actor.id)
            .await
            .map_err(map_review_repo_error)?;
        if existing.is_some() {
            return Err(DomainError::duplicate_review(
                "you have already reviewed this stall",
            ));
        }

        let rating = parse_rating(request.rating)?;
        let now = Utc::now();
        let review = Review {
            id: ReviewId::random(),
            stall_id: request.stall_id,
            author_id: request.actor.id,
            // Snapshot of the author's name; not kept in sync afterwards.
            author_name: request.actor.full_name,
            rating,
            comment: request.comment,
            created_at: now,
            updated_at: now,
        };
        self.reviews
            .put(&review)
            .await
            .map_err(map_review_repo_error)?;

        info!(review_id = %review.id, stall_id = %review.stall_id, "created review");
        Ok(review)
    }

    async fn list(&self, stall_id: &StallId) -> Result<Vec<Review>, DomainError> {
        let stall = self
            .stalls
            .find_by_id(stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        access::stall_read(stall.as_ref())?;

        self.reviews
            .list_by_stall(stall_id)
            .await
            .map_err(map_review_repo_error)
    }

    async fn update(&self, request: UpdateReviewRequest) -> Result<Review, DomainError> {
        let mut review = self
            .authorize_review_write(&request.actor, &request.stall_id, &request.review_id)
            .await?;

        // Full replace of the review content, not a partial patch.
        review.rating = parse_rating(request.rating)?;
        review.comment = request.comment;
        review.updated_at = Utc::now();

        self.reviews
            .put(&review)
            .await
            .map_err(map_review_repo_error)?;
        Ok(review)
    }

    async fn delete(
        &self,
        actor: &User,
        stall_id: &StallId,
        review_id: &ReviewId,
    ) -> Result<(), DomainError> {
        self.authorize_review_write(actor, stall_id, review_id)
            .await?;
        self.reviews
            .delete(review_id)
            .await
            .map_err(map_review_repo_error)
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
