//! Review HTTP handlers, nested under their stall.
//!
//! ```text
//! POST   /api/v1/stalls/{stall_id}/reviews
//! GET    /api/v1/stalls/{stall_id}/reviews
//! PUT    /api/v1/stalls/{stall_id}/reviews/{review_id}
//! DELETE /api/v1/stalls/{stall_id}/reviews/{review_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Review;
use crate::domain::ports::{SubmitReviewRequest, UpdateReviewRequest};
use crate::inbound::http::actor::Actor;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_review_id, parse_stall_id};

/// Request payload for submitting or replacing a review.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequestBody {
    /// Star rating, an integer in [1, 5].
    pub rating: i32,
    /// Free-form comment.
    pub comment: String,
}

/// A review on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBody {
    /// Review identifier.
    #[schema(format = "uuid")]
    pub review_id: String,
    /// Reviewed stall.
    #[schema(format = "uuid")]
    pub stall_id: String,
    /// Authoring user.
    #[schema(format = "uuid")]
    pub user_id: String,
    /// Author display name captured at creation time.
    pub user_name: String,
    /// Star rating.
    pub rating: i32,
    /// Free-form comment.
    pub comment: String,
    /// Creation instant, RFC 3339.
    pub created_at: String,
    /// Last mutation instant, RFC 3339.
    pub updated_at: String,
}

impl From<Review> for ReviewBody {
    fn from(value: Review) -> Self {
        Self {
            review_id: value.id.to_string(),
            stall_id: value.stall_id.to_string(),
            user_id: value.author_id.to_string(),
            user_name: value.author_name,
            rating: value.rating.value(),
            comment: value.comment,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Submit a review for a stall the actor does not own.
#[utoipa::path(
    post,
    path = "/api/v1/stalls/{stall_id}/reviews",
    params(("stall_id" = String, Path, description = "Stall identifier")),
    request_body = ReviewRequestBody,
    responses(
        (status = 201, description = "Review created", body = ReviewBody),
        (status = 400, description = "Rating out of range or duplicate review", body = ApiError),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor owns the stall", body = ApiError),
        (status = 404, description = "Stall not found", body = ApiError)
    ),
    tags = ["reviews"],
    operation_id = "createReview",
    security(("BearerAuth" = []))
)]
#[post("/stalls/{stall_id}/reviews")]
pub async fn create_review(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<String>,
    payload: web::Json<ReviewRequestBody>,
) -> ApiResult<HttpResponse> {
    let stall_id = parse_stall_id(&path.into_inner())?;
    let body = payload.into_inner();

    let review = state
        .reviews
        .create(SubmitReviewRequest {
            actor: actor.into_inner(),
            stall_id,
            rating: body.rating,
            comment: body.comment,
        })
        .await?;
    Ok(HttpResponse::Created().json(ReviewBody::from(review)))
}

/// List a stall's reviews.
#[utoipa::path(
    get,
    path = "/api/v1/stalls/{stall_id}/reviews",
    params(("stall_id" = String, Path, description = "Stall identifier")),
    responses(
        (status = 200, description = "Reviews", body = [ReviewBody]),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 404, description = "Stall not found", body = ApiError)
    ),
    tags = ["reviews"],
    operation_id = "listReviews",
    security(("BearerAuth" = []))
)]
#[get("/stalls/{stall_id}/reviews")]
pub async fn list_reviews(
    state: web::Data<HttpState>,
    _actor: Actor,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ReviewBody>>> {
    let stall_id = parse_stall_id(&path.into_inner())?;
    let reviews = state.reviews.list(&stall_id).await?;
    Ok(web::Json(reviews.into_iter().map(ReviewBody::from).collect()))
}

/// Replace the rating and comment of a review authored by the actor.
#[utoipa::path(
    put,
    path = "/api/v1/stalls/{stall_id}/reviews/{review_id}",
    params(
        ("stall_id" = String, Path, description = "Stall identifier"),
        ("review_id" = String, Path, description = "Review identifier")
    ),
    request_body = ReviewRequestBody,
    responses(
        (status = 200, description = "Updated review", body = ReviewBody),
        (status = 400, description = "Rating out of range or review of another stall", body = ApiError),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor is not the author", body = ApiError),
        (status = 404, description = "Stall or review not found", body = ApiError)
    ),
    tags = ["reviews"],
    operation_id = "updateReview",
    security(("BearerAuth" = []))
)]
#[put("/stalls/{stall_id}/reviews/{review_id}")]
pub async fn update_review(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<(String, String)>,
    payload: web::Json<ReviewRequestBody>,
) -> ApiResult<web::Json<ReviewBody>> {
    let (raw_stall_id, raw_review_id) = path.into_inner();
    let stall_id = parse_stall_id(&raw_stall_id)?;
    let review_id = parse_review_id(&raw_review_id)?;
    let body = payload.into_inner();

    let review = state
        .reviews
        .update(UpdateReviewRequest {
            actor: actor.into_inner(),
            stall_id,
            review_id,
            rating: body.rating,
            comment: body.comment,
        })
        .await?;
    Ok(web::Json(ReviewBody::from(review)))
}

/// Delete a review authored by the actor.
#[utoipa::path(
    delete,
    path = "/api/v1/stalls/{stall_id}/reviews/{review_id}",
    params(
        ("stall_id" = String, Path, description = "Stall identifier"),
        ("review_id" = String, Path, description = "Review identifier")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 400, description = "Review belongs to another stall", body = ApiError),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor is not the author", body = ApiError),
        (status = 404, description = "Stall or review not found", body = ApiError)
    ),
    tags = ["reviews"],
    operation_id = "deleteReview",
    security(("BearerAuth" = []))
)]
#[delete("/stalls/{stall_id}/reviews/{review_id}")]
pub async fn delete_review(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_stall_id, raw_review_id) = path.into_inner();
    let stall_id = parse_stall_id(&raw_stall_id)?;
    let review_id = parse_review_id(&raw_review_id)?;
    state
        .reviews
        .delete(actor.user(), &stall_id, &review_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
