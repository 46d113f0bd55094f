//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP endpoint and wire schema; Swagger UI
//! serves the generated document at `/docs` in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::auth::{LoginRequestBody, RegisterRequestBody, TokenBody, UserBody};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::health::HealthBody;
use crate::inbound::http::menu::{
    CreateMenuItemRequestBody, MenuItemBody, UpdateMenuItemRequestBody,
};
use crate::inbound::http::reviews::{ReviewBody, ReviewRequestBody};
use crate::inbound::http::stalls::{
    CreateStallRequestBody, LocationBody, StallBody, UpdateStallRequestBody,
};
use crate::inbound::http::validation::ImageBody;

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Bearer token issued by POST /api/v1/auth/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Stallside backend API",
        description = "HTTP interface for the food-stall marketplace: accounts, stalls, menus, and reviews."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::me,
        crate::inbound::http::stalls::create_stall,
        crate::inbound::http::stalls::list_stalls,
        crate::inbound::http::stalls::get_stall,
        crate::inbound::http::stalls::update_stall,
        crate::inbound::http::stalls::delete_stall,
        crate::inbound::http::menu::create_menu_item,
        crate::inbound::http::menu::list_menu_items,
        crate::inbound::http::menu::update_menu_item,
        crate::inbound::http::menu::delete_menu_item,
        crate::inbound::http::menu::delete_menu_items_by_category,
        crate::inbound::http::reviews::create_review,
        crate::inbound::http::reviews::list_reviews,
        crate::inbound::http::reviews::update_review,
        crate::inbound::http::reviews::delete_review,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        ApiError,
        RegisterRequestBody,
        LoginRequestBody,
        TokenBody,
        UserBody,
        ImageBody,
        LocationBody,
        CreateStallRequestBody,
        UpdateStallRequestBody,
        StallBody,
        CreateMenuItemRequestBody,
        UpdateMenuItemRequestBody,
        MenuItemBody,
        ReviewRequestBody,
        ReviewBody,
        HealthBody,
    )),
    tags(
        (name = "auth", description = "Registration, login, and actor resolution"),
        (name = "stalls", description = "Stall listings and management"),
        (name = "menu", description = "Per-stall menu items"),
        (name = "reviews", description = "Per-stall reviews"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;
