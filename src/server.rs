//! Static host for the landing page
//!
//! Serves the site root (markup, styles and the compiled `pkg/` bundle).
//! There are no API routes; the page never talks to this server beyond
//! fetching files.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

/// Default bind address
pub const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3000";
/// Default directory served as the site root
pub const DEFAULT_SITE_ROOT: &str = "public";

/// Server configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("SITE_ADDR '{value}' is not a socket address: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Static host configuration loaded from environment variables.
///
/// Call `dotenvy::dotenv()` before `from_env()` to pick up a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind, from `SITE_ADDR`
    pub site_addr: SocketAddr,
    /// Directory to serve, from `SITE_ROOT`
    pub site_root: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_values(
            std::env::var("SITE_ADDR").ok().as_deref(),
            std::env::var("SITE_ROOT").ok().as_deref(),
        )
    }

    /// Build from optional raw values, applying defaults for missing ones.
    pub fn from_values(
        site_addr: Option<&str>,
        site_root: Option<&str>,
    ) -> Result<Self, ServerConfigError> {
        let addr = site_addr.unwrap_or(DEFAULT_SITE_ADDR);
        let site_addr = addr
            .parse()
            .map_err(|source| ServerConfigError::InvalidAddr {
                value: addr.to_string(),
                source,
            })?;

        Ok(Self {
            site_addr,
            site_root: PathBuf::from(site_root.unwrap_or(DEFAULT_SITE_ROOT)),
        })
    }
}

/// Router serving the site root with pre-compressed file support
pub fn site_router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_root)
        .precompressed_br()
        .precompressed_gzip();

    Router::new().fallback_service(site).layer(
        CompressionLayer::new()
            .br(true)
            .gzip(true)
            .quality(CompressionLevel::Best),
    )
}
