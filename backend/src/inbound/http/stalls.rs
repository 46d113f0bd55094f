//! Stall HTTP handlers.
//!
//! ```text
//! POST   /api/v1/stalls
//! GET    /api/v1/stalls
//! GET    /api/v1/stalls/{stall_id}
//! PUT    /api/v1/stalls/{stall_id}
//! DELETE /api/v1/stalls/{stall_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::geo::GeoPoint;
use crate::domain::ports::{CreateStallRequest, ListedStall, StallQuery, UpdateStallRequest};
use crate::domain::stall::{LocationPatch, Stall, StallPatch};
use crate::domain::DomainError;
use crate::inbound::http::actor::Actor;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    ImageBody, decode_image, decode_optional_image, parse_location, parse_stall_id,
};

/// A stall's location on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationBody {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Free-form street address.
    pub address: String,
}

/// Request payload for creating a stall.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStallRequestBody {
    /// Stall name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Physical location.
    pub location: LocationBody,
    /// Stall image.
    pub image: ImageBody,
}

/// Request payload for partially updating a stall.
///
/// Location components are top-level optionals; supplying any of them merges
/// into the stored location rather than replacing it wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStallRequestBody {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement latitude.
    pub latitude: Option<f64>,
    /// Replacement longitude.
    pub longitude: Option<f64>,
    /// Replacement address.
    pub address: Option<String>,
    /// Replacement image.
    pub image: Option<ImageBody>,
}

/// Geographic narrowing for stall listings.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListStallsQuery {
    /// Centre latitude; must arrive together with `longitude`.
    pub latitude: Option<f64>,
    /// Centre longitude; must arrive together with `latitude`.
    pub longitude: Option<f64>,
    /// Maximum distance in kilometres; defaults to 5 when a centre is given.
    pub radius_km: Option<f64>,
}

/// A stall on the wire, annotated with its distance from the query centre
/// when one was supplied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StallBody {
    /// Stall identifier.
    #[schema(format = "uuid")]
    pub stall_id: String,
    /// Owning user.
    #[schema(format = "uuid")]
    pub owner_id: String,
    /// Stall name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Physical location.
    pub location: LocationBody,
    /// Retrievable image URL.
    pub image_url: String,
    /// Creation instant, RFC 3339.
    pub created_at: String,
    /// Last mutation instant, RFC 3339.
    pub updated_at: String,
    /// Distance from the query centre in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl StallBody {
    fn from_stall(stall: Stall, distance_km: Option<f64>) -> Self {
        Self {
            stall_id: stall.id.to_string(),
            owner_id: stall.owner_id.to_string(),
            name: stall.name,
            description: stall.description,
            location: LocationBody {
                latitude: stall.location.latitude,
                longitude: stall.location.longitude,
                address: stall.location.address,
            },
            image_url: stall.image_url,
            created_at: stall.created_at.to_rfc3339(),
            updated_at: stall.updated_at.to_rfc3339(),
            distance_km,
        }
    }
}

impl From<ListedStall> for StallBody {
    fn from(value: ListedStall) -> Self {
        Self::from_stall(value.stall, value.distance_km)
    }
}

fn parse_query(query: ListStallsQuery) -> Result<StallQuery, ApiError> {
    // A lone latitude or longitude is ignored, mirroring the listing
    // contract: filtering only happens with a full centre.
    let center = match (query.latitude, query.longitude) {
        (Some(latitude), Some(longitude)) => Some(
            GeoPoint::new(latitude, longitude)
                .map_err(|error| ApiError::from(DomainError::invalid_input(error.to_string())))?,
        ),
        _ => None,
    };
    Ok(StallQuery {
        center,
        radius_km: query.radius_km,
    })
}

/// Create a stall owned by the authenticated owner.
#[utoipa::path(
    post,
    path = "/api/v1/stalls",
    request_body = CreateStallRequestBody,
    responses(
        (status = 201, description = "Stall created", body = StallBody),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor is not an owner", body = ApiError)
    ),
    tags = ["stalls"],
    operation_id = "createStall",
    security(("BearerAuth" = []))
)]
#[post("/stalls")]
pub async fn create_stall(
    state: web::Data<HttpState>,
    actor: Actor,
    payload: web::Json<CreateStallRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let location = parse_location(
        body.location.latitude,
        body.location.longitude,
        body.location.address,
    )?;
    let image = decode_image(body.image)?;

    let stall = state
        .stalls
        .create(CreateStallRequest {
            actor: actor.into_inner(),
            name: body.name,
            description: body.description,
            location,
            image,
        })
        .await?;
    Ok(HttpResponse::Created().json(StallBody::from_stall(stall, None)))
}

/// List stalls, optionally filtered and sorted by distance from a centre.
#[utoipa::path(
    get,
    path = "/api/v1/stalls",
    params(ListStallsQuery),
    responses(
        (status = 200, description = "Stalls", body = [StallBody]),
        (status = 401, description = "Unauthenticated", body = ApiError)
    ),
    tags = ["stalls"],
    operation_id = "listStalls",
    security(("BearerAuth" = []))
)]
#[get("/stalls")]
pub async fn list_stalls(
    state: web::Data<HttpState>,
    _actor: Actor,
    query: web::Query<ListStallsQuery>,
) -> ApiResult<web::Json<Vec<StallBody>>> {
    let query = parse_query(query.into_inner())?;
    let listed = state.stalls.list(query).await?;
    Ok(web::Json(listed.into_iter().map(StallBody::from).collect()))
}

/// Fetch a single stall.
#[utoipa::path(
    get,
    path = "/api/v1/stalls/{stall_id}",
    params(("stall_id" = String, Path, description = "Stall identifier")),
    responses(
        (status = 200, description = "Stall", body = StallBody),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 404, description = "Stall not found", body = ApiError)
    ),
    tags = ["stalls"],
    operation_id = "getStall",
    security(("BearerAuth" = []))
)]
#[get("/stalls/{stall_id}")]
pub async fn get_stall(
    state: web::Data<HttpState>,
    _actor: Actor,
    path: web::Path<String>,
) -> ApiResult<web::Json<StallBody>> {
    let stall_id = parse_stall_id(&path.into_inner())?;
    let stall = state.stalls.get(&stall_id).await?;
    Ok(web::Json(StallBody::from_stall(stall, None)))
}

/// Partially update a stall owned by the authenticated owner.
#[utoipa::path(
    put,
    path = "/api/v1/stalls/{stall_id}",
    params(("stall_id" = String, Path, description = "Stall identifier")),
    request_body = UpdateStallRequestBody,
    responses(
        (status = 200, description = "Updated stall", body = StallBody),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor does not own the stall", body = ApiError),
        (status = 404, description = "Stall not found", body = ApiError)
    ),
    tags = ["stalls"],
    operation_id = "updateStall",
    security(("BearerAuth" = []))
)]
#[put("/stalls/{stall_id}")]
pub async fn update_stall(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<String>,
    payload: web::Json<UpdateStallRequestBody>,
) -> ApiResult<web::Json<StallBody>> {
    let stall_id = parse_stall_id(&path.into_inner())?;
    let body = payload.into_inner();
    let image = decode_optional_image(body.image)?;

    let stall = state
        .stalls
        .update(UpdateStallRequest {
            actor: actor.into_inner(),
            stall_id,
            patch: StallPatch {
                name: body.name,
                description: body.description,
                location: LocationPatch {
                    latitude: body.latitude,
                    longitude: body.longitude,
                    address: body.address,
                },
            },
            image,
        })
        .await?;
    Ok(web::Json(StallBody::from_stall(stall, None)))
}

/// Delete a stall owned by the authenticated owner, cascading to its menu
/// items and reviews.
#[utoipa::path(
    delete,
    path = "/api/v1/stalls/{stall_id}",
    params(("stall_id" = String, Path, description = "Stall identifier")),
    responses(
        (status = 204, description = "Stall and dependants deleted"),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor does not own the stall", body = ApiError),
        (status = 404, description = "Stall not found", body = ApiError)
    ),
    tags = ["stalls"],
    operation_id = "deleteStall",
    security(("BearerAuth" = []))
)]
#[delete("/stalls/{stall_id}")]
pub async fn delete_stall(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let stall_id = parse_stall_id(&path.into_inner())?;
    state
        .stalls
        .delete(actor.user(), &stall_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
