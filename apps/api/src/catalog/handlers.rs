//! Axum route handlers for the Content Catalog.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::assets::{AssetKind, AssetReference};
use crate::catalog::{self, Curiosity, GalleryItem, HomeMedia, OlfactiveFamily, PerfumeType};
use crate::catalog::{PerfumeTypeDetail, QuizQuestion, Recommendation, TimelineEntry};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GraphFormat {
    #[default]
    Json,
    Dot,
}

#[derive(Debug, Deserialize)]
pub struct GraphQuery {
    #[serde(default)]
    pub format: GraphFormat,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub kind: AssetKind,
    pub name: String,
    pub fallback: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LegendsResponse {
    pub gallery: Vec<GalleryItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/perfume-types
pub async fn handle_list_types() -> Json<&'static [PerfumeType]> {
    Json(catalog::perfume_types())
}

/// GET /api/v1/perfume-types/:name
pub async fn handle_get_type(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PerfumeTypeDetail>, AppError> {
    catalog::perfume_type_detail(&state.assets, &name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Perfume type '{name}' not found")))
}

/// GET /api/v1/perfume-types/:name/examples
///
/// Unknown types answer with an empty list, not a 404.
pub async fn handle_type_examples(Path(name): Path<String>) -> Json<&'static [&'static str]> {
    Json(catalog::perfume_examples(&name))
}

/// GET /api/v1/families
pub async fn handle_list_families(State(state): State<AppState>) -> Json<Vec<OlfactiveFamily>> {
    Json(catalog::olfactive_families(&state.assets))
}

/// GET /api/v1/families/:name
pub async fn handle_get_family(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<OlfactiveFamily>, AppError> {
    catalog::olfactive_family(&state.assets, &name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Family '{name}' not found")))
}

/// GET /api/v1/family-graph?format=json|dot
pub async fn handle_family_graph(Query(query): Query<GraphQuery>) -> Response {
    let graph = catalog::family_graph();
    match query.format {
        GraphFormat::Json => Json(graph).into_response(),
        GraphFormat::Dot => (
            [(header::CONTENT_TYPE, "text/vnd.graphviz; charset=utf-8")],
            graph.to_dot(),
        )
            .into_response(),
    }
}

/// GET /api/v1/curiosities
pub async fn handle_curiosities() -> Json<&'static [Curiosity]> {
    Json(catalog::curiosities())
}

/// GET /api/v1/timeline
pub async fn handle_timeline() -> Json<&'static [TimelineEntry]> {
    Json(catalog::timeline())
}

/// GET /api/v1/quiz/questions
pub async fn handle_quiz_questions() -> Json<&'static [QuizQuestion]> {
    Json(catalog::quiz_questions())
}

/// GET /api/v1/recommendations/:category
pub async fn handle_get_recommendation(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Recommendation>, AppError> {
    catalog::recommendation_for_key(&state.assets, &category)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Category '{category}' not found")))
}

/// GET /api/v1/media/home
pub async fn handle_home_media(State(state): State<AppState>) -> Json<HomeMedia> {
    Json(catalog::home_media(&state.assets))
}

/// GET /api/v1/media/legends
pub async fn handle_legends(State(state): State<AppState>) -> Json<LegendsResponse> {
    Json(LegendsResponse {
        gallery: catalog::legendary_gallery(&state.assets),
    })
}

/// GET /api/v1/assets/resolve?kind=image&name=rose.jpg&fallback=https://...
pub async fn handle_resolve_asset(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<AssetReference>, AppError> {
    if query.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    Ok(Json(state.assets.resolve(
        query.kind,
        &query.name,
        query.fallback.as_deref(),
    )))
}
