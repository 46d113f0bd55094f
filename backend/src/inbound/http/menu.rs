//! Menu item HTTP handlers, nested under their stall.
//!
//! ```text
//! POST   /api/v1/stalls/{stall_id}/menu
//! GET    /api/v1/stalls/{stall_id}/menu
//! PUT    /api/v1/stalls/{stall_id}/menu/{item_id}
//! DELETE /api/v1/stalls/{stall_id}/menu/{item_id}
//! DELETE /api/v1/stalls/{stall_id}/menu/category/{category}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::menu::{MenuItem, MenuItemPatch};
use crate::domain::ports::{CreateMenuItemRequest, UpdateMenuItemRequest};
use crate::inbound::http::actor::Actor;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    ImageBody, decode_image, decode_optional_image, parse_item_id, parse_stall_id,
};

/// Request payload for creating a menu item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemRequestBody {
    /// Dish name.
    pub name: String,
    /// Non-negative price.
    pub price: f64,
    /// Longer description.
    pub description: String,
    /// Free-form category.
    pub category: String,
    /// Dish image.
    pub image: ImageBody,
}

/// Request payload for partially updating a menu item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemRequestBody {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement price.
    pub price: Option<f64>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement category.
    pub category: Option<String>,
    /// Replacement image.
    pub image: Option<ImageBody>,
}

/// Category narrowing for menu listings.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListMenuQuery {
    /// Exact category to filter by.
    pub category: Option<String>,
}

/// A menu item on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemBody {
    /// Menu item identifier.
    #[schema(format = "uuid")]
    pub item_id: String,
    /// Parent stall.
    #[schema(format = "uuid")]
    pub stall_id: String,
    /// Dish name.
    pub name: String,
    /// Price.
    pub price: f64,
    /// Longer description.
    pub description: String,
    /// Category.
    pub category: String,
    /// Retrievable image URL.
    pub image_url: String,
    /// Creation instant, RFC 3339.
    pub created_at: String,
    /// Last mutation instant, RFC 3339.
    pub updated_at: String,
}

impl From<MenuItem> for MenuItemBody {
    fn from(value: MenuItem) -> Self {
        Self {
            item_id: value.id.to_string(),
            stall_id: value.stall_id.to_string(),
            name: value.name,
            price: value.price,
            description: value.description,
            category: value.category,
            image_url: value.image_url,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Create a menu item under a stall owned by the authenticated owner.
#[utoipa::path(
    post,
    path = "/api/v1/stalls/{stall_id}/menu",
    params(("stall_id" = String, Path, description = "Stall identifier")),
    request_body = CreateMenuItemRequestBody,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemBody),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor does not own the stall", body = ApiError),
        (status = 404, description = "Stall not found", body = ApiError)
    ),
    tags = ["menu"],
    operation_id = "createMenuItem",
    security(("BearerAuth" = []))
)]
#[post("/stalls/{stall_id}/menu")]
pub async fn create_menu_item(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<String>,
    payload: web::Json<CreateMenuItemRequestBody>,
) -> ApiResult<HttpResponse> {
    let stall_id = parse_stall_id(&path.into_inner())?;
    let body = payload.into_inner();
    let image = decode_image(body.image)?;

    let item = state
        .menu
        .create(CreateMenuItemRequest {
            actor: actor.into_inner(),
            stall_id,
            name: body.name,
            price: body.price,
            description: body.description,
            category: body.category,
            image,
        })
        .await?;
    Ok(HttpResponse::Created().json(MenuItemBody::from(item)))
}

/// List a stall's menu items, optionally narrowed to a category.
#[utoipa::path(
    get,
    path = "/api/v1/stalls/{stall_id}/menu",
    params(
        ("stall_id" = String, Path, description = "Stall identifier"),
        ListMenuQuery
    ),
    responses(
        (status = 200, description = "Menu items", body = [MenuItemBody]),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 404, description = "Stall not found", body = ApiError)
    ),
    tags = ["menu"],
    operation_id = "listMenuItems",
    security(("BearerAuth" = []))
)]
#[get("/stalls/{stall_id}/menu")]
pub async fn list_menu_items(
    state: web::Data<HttpState>,
    _actor: Actor,
    path: web::Path<String>,
    query: web::Query<ListMenuQuery>,
) -> ApiResult<web::Json<Vec<MenuItemBody>>> {
    let stall_id = parse_stall_id(&path.into_inner())?;
    let items = state
        .menu
        .list(&stall_id, query.category.as_deref())
        .await?;
    Ok(web::Json(items.into_iter().map(MenuItemBody::from).collect()))
}

/// Partially update a menu item under a stall owned by the authenticated
/// owner.
#[utoipa::path(
    put,
    path = "/api/v1/stalls/{stall_id}/menu/{item_id}",
    params(
        ("stall_id" = String, Path, description = "Stall identifier"),
        ("item_id" = String, Path, description = "Menu item identifier")
    ),
    request_body = UpdateMenuItemRequestBody,
    responses(
        (status = 200, description = "Updated menu item", body = MenuItemBody),
        (status = 400, description = "Invalid input or item of another stall", body = ApiError),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor does not own the stall", body = ApiError),
        (status = 404, description = "Stall or menu item not found", body = ApiError)
    ),
    tags = ["menu"],
    operation_id = "updateMenuItem",
    security(("BearerAuth" = []))
)]
#[put("/stalls/{stall_id}/menu/{item_id}")]
pub async fn update_menu_item(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<(String, String)>,
    payload: web::Json<UpdateMenuItemRequestBody>,
) -> ApiResult<web::Json<MenuItemBody>> {
    let (raw_stall_id, raw_item_id) = path.into_inner();
    let stall_id = parse_stall_id(&raw_stall_id)?;
    let item_id = parse_item_id(&raw_item_id)?;
    let body = payload.into_inner();
    let image = decode_optional_image(body.image)?;

    let item = state
        .menu
        .update(UpdateMenuItemRequest {
            actor: actor.into_inner(),
            stall_id,
            item_id,
            patch: MenuItemPatch {
                name: body.name,
                price: body.price,
                description: body.description,
                category: body.category,
            },
            image,
        })
        .await?;
    Ok(web::Json(MenuItemBody::from(item)))
}

/// Delete a menu item under a stall owned by the authenticated owner.
#[utoipa::path(
    delete,
    path = "/api/v1/stalls/{stall_id}/menu/{item_id}",
    params(
        ("stall_id" = String, Path, description = "Stall identifier"),
        ("item_id" = String, Path, description = "Menu item identifier")
    ),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 400, description = "Item belongs to another stall", body = ApiError),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor does not own the stall", body = ApiError),
        (status = 404, description = "Stall or menu item not found", body = ApiError)
    ),
    tags = ["menu"],
    operation_id = "deleteMenuItem",
    security(("BearerAuth" = []))
)]
#[delete("/stalls/{stall_id}/menu/{item_id}")]
pub async fn delete_menu_item(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_stall_id, raw_item_id) = path.into_inner();
    let stall_id = parse_stall_id(&raw_stall_id)?;
    let item_id = parse_item_id(&raw_item_id)?;
    state
        .menu
        .delete(actor.user(), &stall_id, &item_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete every menu item of a stall matching a category.
#[utoipa::path(
    delete,
    path = "/api/v1/stalls/{stall_id}/menu/category/{category}",
    params(
        ("stall_id" = String, Path, description = "Stall identifier"),
        ("category" = String, Path, description = "Category to delete")
    ),
    responses(
        (status = 204, description = "Matching menu items deleted"),
        (status = 401, description = "Unauthenticated", body = ApiError),
        (status = 403, description = "Actor does not own the stall", body = ApiError),
        (status = 404, description = "Stall not found", body = ApiError)
    ),
    tags = ["menu"],
    operation_id = "deleteMenuItemsByCategory",
    security(("BearerAuth" = []))
)]
#[delete("/stalls/{stall_id}/menu/category/{category}")]
pub async fn delete_menu_items_by_category(
    state: web::Data<HttpState>,
    actor: Actor,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_stall_id, category) = path.into_inner();
    let stall_id = parse_stall_id(&raw_stall_id)?;
    state
        .menu
        .delete_by_category(actor.user(), &stall_id, &category)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
