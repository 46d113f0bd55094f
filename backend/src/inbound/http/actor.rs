//! Bearer-token actor extraction.
//!
//! Every guarded endpoint takes an [`Actor`] parameter; extraction reads the
//! `Authorization: Bearer` header and resolves it through the identity port,
//! so handlers never see raw tokens.

use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::{DomainError, User};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

/// The authenticated user performing the request.
#[derive(Debug, Clone)]
pub struct Actor(User);

impl Actor {
    /// Consume the extractor, yielding the resolved user.
    pub fn into_inner(self) -> User {
        self.0
    }

    /// Borrow the resolved user.
    pub fn user(&self) -> &User {
        &self.0
    }
}

fn bearer_token(req: &HttpRequest) -> Result<String, DomainError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| DomainError::unauthenticated("missing bearer token"))?;
    let value = header
        .to_str()
        .map_err(|_| DomainError::unauthenticated("missing bearer token"))?;
    value
        .strip_prefix("Bearer ")
        .map(str::to_owned)
        .ok_or_else(|| DomainError::unauthenticated("missing bearer token"))
}

impl FromRequest for Actor {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                ApiError::from(DomainError::internal("http state is not configured"))
            })?;
            let token = token?;
            let user = state.identity.resolve_actor(&token).await?;
            Ok(Actor(user))
        })
    }
}
