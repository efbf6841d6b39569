use crate::assets::AssetResolver;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Catalog data lives in process-wide statics, so only the resolver and the
/// config are carried here. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub assets: AssetResolver,
}
