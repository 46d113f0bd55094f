//! Server assembly: adapter wiring and endpoint registration.

pub mod config;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::domain::{IdentityService, MenuService, ReviewService, StallService};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{auth, health, menu, reviews, stalls};
use crate::middleware::RequestId;
use crate::outbound::credentials::Argon2CredentialHasher;
use crate::outbound::media::FsObjectStore;
use crate::outbound::persistence::{
    InMemoryMenuItemRepository, InMemoryReviewRepository, InMemoryStallRepository,
    InMemoryUserRepository,
};
use crate::outbound::tokens::JwtTokenService;
use crate::server::config::ServerConfig;

/// Wire the default adapter set into the handler state.
///
/// Persistence is the in-memory adapter set; the services only see ports, so
/// a networked store swaps in here without touching the domain.
pub fn build_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let users = Arc::new(InMemoryUserRepository::default());
    let stall_repo = Arc::new(InMemoryStallRepository::default());
    let menu_repo = Arc::new(InMemoryMenuItemRepository::default());
    let review_repo = Arc::new(InMemoryReviewRepository::default());

    let hasher = Arc::new(Argon2CredentialHasher);
    let tokens = Arc::new(JwtTokenService::new(&config.token_secret));
    let media = Arc::new(FsObjectStore::open(
        &config.media_dir,
        &config.media_base_url,
    )?);

    // The stall service shares the menu and review repositories so stall
    // deletion can cascade.
    let identity = Arc::new(IdentityService::new(users, hasher, tokens));
    let stall_service = Arc::new(StallService::new(
        Arc::clone(&stall_repo),
        Arc::clone(&menu_repo),
        Arc::clone(&review_repo),
        Arc::clone(&media),
    ));
    let menu_service = Arc::new(MenuService::new(
        Arc::clone(&stall_repo),
        menu_repo,
        media,
    ));
    let review_service = Arc::new(ReviewService::new(stall_repo, review_repo));

    Ok(HttpState {
        identity,
        stalls: stall_service,
        menu: menu_service,
        reviews: review_service,
    })
}

/// Register the versioned API endpoints and the health probe.
///
/// Shared between the server bootstrap and integration tests so both run the
/// same routing table.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(auth::register)
            .service(auth::login)
            .service(auth::me)
            .service(stalls::create_stall)
            .service(stalls::list_stalls)
            .service(stalls::get_stall)
            .service(stalls::update_stall)
            .service(stalls::delete_stall)
            .service(menu::create_menu_item)
            .service(menu::list_menu_items)
            .service(menu::update_menu_item)
            .service(menu::delete_menu_item)
            .service(menu::delete_menu_items_by_category)
            .service(reviews::create_review)
            .service(reviews::list_reviews)
            .service(reviews::update_review)
            .service(reviews::delete_review),
    )
    .service(health::health);
}

/// Run the HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(build_state(&config)?);
    let bind_addr = config.bind_addr;

    info!(%bind_addr, "starting server");
    HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .wrap(RequestId)
            .configure(configure_api);

        #[cfg(debug_assertions)]
        let app = {
            use utoipa::OpenApi as _;
            app.service(
                utoipa_swagger_ui::SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", crate::doc::ApiDoc::openapi()),
            )
        };

        app
    })
    .bind(bind_addr)?
    .run()
    .await
}
