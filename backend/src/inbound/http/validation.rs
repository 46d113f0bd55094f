//! Request parsing helpers shared by the HTTP handlers.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::stall::Location;
use crate::domain::{DomainError, MenuItemId, ReviewId, StallId};
use crate::inbound::http::error::ApiError;
use crate::domain::ports::ImageUpload;

/// Inline image payload: base64 bytes plus the MIME content type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageBody {
    /// Base64-encoded image bytes (standard alphabet).
    pub data: String,
    /// MIME content type, e.g. `image/jpeg`.
    pub content_type: String,
}

/// Decode an inline image payload into the upload the object-store port
/// expects.
pub fn decode_image(body: ImageBody) -> Result<ImageUpload, ApiError> {
    let bytes = BASE64
        .decode(body.data.as_bytes())
        .map_err(|_| ApiError::from(DomainError::invalid_input("image data is not valid base64")))?;
    Ok(ImageUpload {
        bytes,
        content_type: body.content_type,
    })
}

/// Decode an optional inline image payload.
pub fn decode_optional_image(body: Option<ImageBody>) -> Result<Option<ImageUpload>, ApiError> {
    body.map(decode_image).transpose()
}

/// Validate a latitude/longitude/address triple into a [`Location`].
pub fn parse_location(
    latitude: f64,
    longitude: f64,
    address: String,
) -> Result<Location, ApiError> {
    Location::new(latitude, longitude, address)
        .map_err(|error| ApiError::from(DomainError::invalid_input(error.to_string())))
}

/// Parse a stall id from a path segment.
///
/// An unparseable id cannot address any stored record, so it surfaces as
/// `not_found` rather than a validation failure.
pub fn parse_stall_id(raw: &str) -> Result<StallId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(DomainError::not_found("stall not found")))
}

/// Parse a menu item id from a path segment; see [`parse_stall_id`].
pub fn parse_item_id(raw: &str) -> Result<MenuItemId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(DomainError::not_found("menu item not found")))
}

/// Parse a review id from a path segment; see [`parse_stall_id`].
pub fn parse_review_id(raw: &str) -> Result<ReviewId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(DomainError::not_found("review not found")))
}
