pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::catalog::handlers;
use crate::quiz::handlers::handle_evaluate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_assets = ServeDir::new(state.assets.root());

    Router::new()
        .route("/health", get(health::health_handler))
        // Perfume types
        .route("/api/v1/perfume-types", get(handlers::handle_list_types))
        .route("/api/v1/perfume-types/:name", get(handlers::handle_get_type))
        .route(
            "/api/v1/perfume-types/:name/examples",
            get(handlers::handle_type_examples),
        )
        // Olfactive families
        .route("/api/v1/families", get(handlers::handle_list_families))
        .route("/api/v1/families/:name", get(handlers::handle_get_family))
        .route("/api/v1/family-graph", get(handlers::handle_family_graph))
        // Trivia
        .route("/api/v1/curiosities", get(handlers::handle_curiosities))
        .route("/api/v1/timeline", get(handlers::handle_timeline))
        // Quiz
        .route("/api/v1/quiz/questions", get(handlers::handle_quiz_questions))
        .route("/api/v1/quiz/evaluate", post(handle_evaluate))
        .route(
            "/api/v1/recommendations/:category",
            get(handlers::handle_get_recommendation),
        )
        // Media
        .route("/api/v1/media/home", get(handlers::handle_home_media))
        .route("/api/v1/media/legends", get(handlers::handle_legends))
        .route("/api/v1/assets/resolve", get(handlers::handle_resolve_asset))
        .nest_service("/assets", static_assets)
        .with_state(state)
}
