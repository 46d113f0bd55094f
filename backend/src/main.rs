//! Backend entry-point: configuration, logging, and server bootstrap.

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use backend::server::config::ServerConfig;

/// Stallside backend server.
#[derive(Debug, Parser)]
#[command(name = "stallside-backend", about = "Food-stall marketplace API server")]
struct Cli {
    /// Socket address to bind.
    #[arg(long, env = "STALLSIDE_BIND", default_value = "0.0.0.0:8080")]
    bind: std::net::SocketAddr,

    /// Shared secret signing bearer tokens.
    #[arg(long, env = "STALLSIDE_TOKEN_SECRET")]
    token_secret: Option<String>,

    /// Directory the media store writes blobs under.
    #[arg(long, env = "STALLSIDE_MEDIA_DIR", default_value = "./media")]
    media_dir: std::path::PathBuf,

    /// Public base URL prefixed onto stored media keys.
    #[arg(
        long,
        env = "STALLSIDE_MEDIA_BASE_URL",
        default_value = "http://localhost:8080/media"
    )]
    media_base_url: String,
}

fn token_secret(cli_secret: Option<String>) -> std::io::Result<String> {
    if let Some(secret) = cli_secret {
        return Ok(secret);
    }
    // Without a configured secret every restart invalidates outstanding
    // tokens, which is tolerable in development only.
    if cfg!(debug_assertions) {
        warn!("no token secret configured; using an ephemeral one (dev only)");
        return Ok(Uuid::new_v4().to_string());
    }
    Err(std::io::Error::other(
        "STALLSIDE_TOKEN_SECRET must be set in release builds",
    ))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let config = ServerConfig {
        bind_addr: cli.bind,
        token_secret: token_secret(cli.token_secret)?,
        media_dir: cli.media_dir,
        media_base_url: cli.media_base_url,
    };

    backend::server::run(config).await
}
