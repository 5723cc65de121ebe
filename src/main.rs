#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use anvikshiki_landing::server::{ServerConfig, site_router};

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Config loaded: site_addr={}, site_root={}",
        config.site_addr,
        config.site_root.display()
    );

    let app = site_router(&config);

    let listener = match tokio::net::TcpListener::bind(config.site_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.site_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("listening on http://{}", config.site_addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no native entry point for the browser build
    // see lib.rs for the hydrate function instead
}
