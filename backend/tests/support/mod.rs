//! Shared fixtures for the HTTP integration tests.
//!
//! Tests run the real routing table against the real services wired to
//! in-memory repositories, a tempdir-backed object store, Argon2 hashing,
//! and HS256 tokens; only the HTTP client is simulated.

use std::sync::Arc;

use actix_http::Request;
use actix_web::http::header;
use actix_web::{App, test, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};

use backend::domain::{IdentityService, MenuService, ReviewService, StallService};
use backend::inbound::http::state::HttpState;
use backend::outbound::credentials::Argon2CredentialHasher;
use backend::outbound::media::FsObjectStore;
use backend::outbound::persistence::{
    InMemoryMenuItemRepository, InMemoryReviewRepository, InMemoryStallRepository,
    InMemoryUserRepository,
};
use backend::outbound::tokens::JwtTokenService;
use backend::server::configure_api;

/// Fully wired handler state plus direct repository handles for assertions
/// that bypass the HTTP surface (e.g. orphan checks after a cascade).
pub struct TestContext {
    pub state: web::Data<HttpState>,
    pub stall_repo: Arc<InMemoryStallRepository>,
    pub menu_repo: Arc<InMemoryMenuItemRepository>,
    pub review_repo: Arc<InMemoryReviewRepository>,
    media_dir: tempfile::TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let media_dir = tempfile::tempdir().expect("create media tempdir");

        let users = Arc::new(InMemoryUserRepository::default());
        let stall_repo = Arc::new(InMemoryStallRepository::default());
        let menu_repo = Arc::new(InMemoryMenuItemRepository::default());
        let review_repo = Arc::new(InMemoryReviewRepository::default());

        let hasher = Arc::new(Argon2CredentialHasher);
        let tokens = Arc::new(JwtTokenService::new("integration-test-secret"));
        let media = Arc::new(
            FsObjectStore::open(media_dir.path(), "http://media.test").expect("open media store"),
        );

        let identity = Arc::new(IdentityService::new(users, hasher, tokens));
        let stalls = Arc::new(StallService::new(
            Arc::clone(&stall_repo),
            Arc::clone(&menu_repo),
            Arc::clone(&review_repo),
            Arc::clone(&media),
        ));
        let menu = Arc::new(MenuService::new(
            Arc::clone(&stall_repo),
            Arc::clone(&menu_repo),
            media,
        ));
        let reviews = Arc::new(ReviewService::new(
            Arc::clone(&stall_repo),
            Arc::clone(&review_repo),
        ));

        Self {
            state: web::Data::new(HttpState {
                identity,
                stalls,
                menu,
                reviews,
            }),
            stall_repo,
            menu_repo,
            review_repo,
            media_dir,
        }
    }

    /// Path of the media directory backing the object store.
    pub fn media_path(&self) -> &std::path::Path {
        self.media_dir.path()
    }
}

/// The application under test, sharing the production routing table.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).configure(configure_api)
}

/// A tiny valid-enough image payload for create requests.
pub fn image_json() -> Value {
    json!({
        "data": BASE64.encode(b"\x89PNG fake image bytes"),
        "contentType": "image/png",
    })
}

/// Build an unauthenticated JSON POST.
pub fn post_json(uri: &str, body: &Value) -> Request {
    test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request()
}

/// Build an authenticated JSON POST.
pub fn authed_post(uri: &str, token: &str, body: &Value) -> Request {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(body)
        .to_request()
}

/// Build an authenticated JSON PUT.
pub fn authed_put(uri: &str, token: &str, body: &Value) -> Request {
    test::TestRequest::put()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(body)
        .to_request()
}

/// Build an authenticated GET.
pub fn authed_get(uri: &str, token: &str) -> Request {
    test::TestRequest::get()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request()
}

/// Build an authenticated DELETE.
pub fn authed_delete(uri: &str, token: &str) -> Request {
    test::TestRequest::delete()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request()
}

/// Registration payload for the given email and role.
pub fn registration(email: &str, full_name: &str, role: &str) -> Value {
    json!({
        "email": email,
        "fullName": full_name,
        "password": "correct horse battery staple",
        "role": role,
    })
}

/// Stall creation payload at the given coordinates.
pub fn stall_payload(name: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "location": {
            "latitude": latitude,
            "longitude": longitude,
            "address": format!("{name} address"),
        },
        "image": image_json(),
    })
}

/// Menu item creation payload in the given category.
pub fn menu_item_payload(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "price": 4.50,
        "description": format!("{name} description"),
        "category": category,
        "image": image_json(),
    })
}
