//! Runtime configuration for the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Settings the server is assembled from.
///
/// Values come from CLI flags or environment variables (see `main.rs`); the
/// struct itself is transport for `server::run`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
    /// Shared secret signing bearer tokens.
    pub token_secret: String,
    /// Directory the media store writes blobs under.
    pub media_dir: PathBuf,
    /// Public base URL prefixed onto stored object keys.
    pub media_base_url: String,
}
