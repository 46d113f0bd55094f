//! Authentication HTTP handlers.
//!
//! ```text
//! POST /api/v1/auth/register
//! POST /api/v1/auth/login
//! GET  /api/v1/auth/me
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::RegisterUserRequest;
use crate::domain::{DomainError, Role, User};
use crate::inbound::http::actor::Actor;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Request payload for registering an account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
    /// Login email.
    pub email: String,
    /// Display name shown on reviews.
    pub full_name: String,
    /// Plaintext password; hashed before persistence.
    pub password: String,
    /// Either `owner` or `customer`.
    pub role: String,
}

/// Request payload for logging in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Public view of an account; never carries the credential.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    /// Account identifier.
    #[schema(format = "uuid")]
    pub user_id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Marketplace role.
    pub role: String,
    /// Registration instant, RFC 3339.
    pub created_at: String,
}

impl From<User> for UserBody {
    fn from(value: User) -> Self {
        Self {
            user_id: value.id.to_string(),
            email: value.email,
            full_name: value.full_name,
            role: value.role.to_string(),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Bearer token issued by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenBody {
    /// Signed bearer token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
}

fn parse_role(raw: &str) -> Result<Role, ApiError> {
    raw.parse()
        .map_err(|error: crate::domain::user::InvalidRole| {
            ApiError::from(DomainError::invalid_input(error.to_string()))
        })
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequestBody,
    responses(
        (status = 201, description = "Account created", body = UserBody),
        (status = 400, description = "Invalid role or duplicate email", body = ApiError)
    ),
    tags = ["auth"],
    operation_id = "register",
    security(())
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let role = parse_role(&body.role)?;
    let user = state
        .identity
        .register(RegisterUserRequest {
            email: body.email,
            full_name: body.full_name,
            password: body.password,
            role,
        })
        .await?;
    Ok(HttpResponse::Created().json(UserBody::from(user)))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequestBody,
    responses(
        (status = 200, description = "Token issued", body = TokenBody),
        (status = 401, description = "Unknown email or wrong password", body = ApiError)
    ),
    tags = ["auth"],
    operation_id = "login",
    security(())
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequestBody>,
) -> ApiResult<web::Json<TokenBody>> {
    let body = payload.into_inner();
    let access_token = state
        .identity
        .authenticate(&body.email, &body.password)
        .await?;
    Ok(web::Json(TokenBody {
        access_token,
        token_type: "bearer".to_owned(),
    }))
}

/// The authenticated actor's own profile.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Actor profile", body = UserBody),
        (status = 401, description = "Unauthenticated", body = ApiError)
    ),
    tags = ["auth"],
    operation_id = "me",
    security(("BearerAuth" = []))
)]
#[get("/auth/me")]
pub async fn me(actor: Actor) -> ApiResult<web::Json<UserBody>> {
    Ok(web::Json(UserBody::from(actor.into_inner())))
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
