use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aroma_api::assets::AssetResolver;
use aroma_api::config::Config;
use aroma_api::routes::build_router;
use aroma_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Aroma API v{}", env!("CARGO_PKG_VERSION"));

    let assets = AssetResolver::new(&config.assets_root)
        .with_context(|| format!("Invalid ASSETS_ROOT '{}'", config.assets_root.display()))?;
    if assets.root().is_dir() {
        info!("Serving local assets from {}", assets.root().display());
    } else {
        // Every asset will resolve to its remote fallback.
        warn!(
            "Asset root {} does not exist; using fallback references only",
            assets.root().display()
        );
    }

    let state = AppState {
        config: config.clone(),
        assets,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.port)
        .parse()
        .context("BIND_ADDR and PORT must form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
