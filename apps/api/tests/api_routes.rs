use std::path::PathBuf;

use aroma_api::assets::AssetResolver;
use aroma_api::config::Config;
use aroma_api::routes::build_router;
use aroma_api::state::AppState;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().expect("failed to create temp dir");
    std::fs::create_dir_all(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/floral.jpg"), b"jpg").unwrap();

    let config = Config {
        bind_addr: "127.0.0.1".to_string(),
        port: 0,
        assets_root: PathBuf::from(dir.path()),
        rust_log: "info".to_string(),
    };
    let assets = AssetResolver::new(dir.path()).unwrap();
    let app = build_router(AppState { config, assets });
    (dir, app)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (_dir, app) = test_app();
    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_perfume_types_listed_in_order() {
    let (_dir, app) = test_app();
    let (status, body) = get_json(app, "/api/v1/perfume-types").await;
    assert_eq!(status, StatusCode::OK);
    let types = body.as_array().unwrap();
    assert_eq!(types.len(), 5);
    assert_eq!(types[0]["name"], "Parfum (Extract)");
    assert_eq!(types[4]["concentration_range"], "1-3% essence");
}

#[tokio::test]
async fn test_type_detail_and_unknown_type() {
    let (_dir, app) = test_app();
    let (status, body) = get_json(app.clone(), "/api/v1/perfume-types/Eau%20de%20Parfum").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Eau de Parfum");
    assert_eq!(body["examples"], json!(["Dior J'adore", "YSL Libre"]));

    let (status, body) = get_json(app, "/api/v1/perfume-types/Attar").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_type_examples_are_empty() {
    let (_dir, app) = test_app();
    let (status, body) = get_json(app, "/api/v1/perfume-types/Attar/examples").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_family_image_resolves_locally() {
    let (dir, app) = test_app();
    let (status, body) = get_json(app.clone(), "/api/v1/families/Floral").await;
    assert_eq!(status, StatusCode::OK);
    let local = dir.path().join("images").join("floral.jpg");
    assert_eq!(body["image"]["primary_path"], local.display().to_string());

    let (status, body) = get_json(app.clone(), "/api/v1/families/Citrus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["image"]["primary_path"], body["image"]["fallback_reference"]);

    let (status, _) = get_json(app, "/api/v1/families/floral").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_family_graph_json_and_dot() {
    let (_dir, app) = test_app();
    let (status, body) = get_json(app.clone(), "/api/v1/family-graph").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"].as_array().unwrap().len(), 7);
    assert_eq!(body["edges"].as_array().unwrap().len(), 8);

    let request = Request::builder()
        .uri("/api/v1/family-graph?format=dot")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    let dot = String::from_utf8(body).unwrap();
    assert!(dot.contains("\"Oriental\" -> \"Gourmand\" [label=\"subfamily\"];"));
}

#[tokio::test]
async fn test_timeline_and_curiosities() {
    let (_dir, app) = test_app();
    let (_, timeline) = get_json(app.clone(), "/api/v1/timeline").await;
    assert_eq!(timeline[0]["year"], 1921);
    assert_eq!(timeline[3]["year"], 2013);

    let (_, curiosities) = get_json(app, "/api/v1/curiosities").await;
    assert_eq!(curiosities.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_quiz_questions_shape() {
    let (_dir, app) = test_app();
    let (status, body) = get_json(app, "/api/v1/quiz/questions").await;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for q in questions {
        assert_eq!(q["options"].as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn test_quiz_evaluate_tie_break() {
    let (_dir, app) = test_app();
    let (status, body) = post_json(
        app,
        "/api/v1/quiz/evaluate",
        json!({"responses": ["floral", "woody", "oriental", "fresh"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "fresh");
    assert_eq!(
        body["scores"],
        json!({"fresh": 1, "floral": 1, "oriental": 1, "woody": 1})
    );
}

#[tokio::test]
async fn test_quiz_evaluate_ignores_unknown_keys() {
    let (_dir, app) = test_app();
    let (status, body) = post_json(
        app,
        "/api/v1/quiz/evaluate",
        json!({"responses": ["woody", "amber", "woody", "WOODY", "floral"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "woody");
    assert_eq!(body["title"], "Woody/Aromatic Family");
    assert_eq!(body["scores"]["woody"], 2);
    assert_eq!(body["scores"]["fresh"], 0);
}

#[tokio::test]
async fn test_recommendation_lookup() {
    let (_dir, app) = test_app();
    let (status, body) = get_json(app.clone(), "/api/v1/recommendations/floral").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Floral Family");

    let (status, _) = get_json(app, "/api/v1/recommendations/amber").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_media_endpoints() {
    let (_dir, app) = test_app();
    let (_, home) = get_json(app.clone(), "/api/v1/media/home").await;
    assert_eq!(home["gallery"].as_array().unwrap().len(), 3);
    assert_eq!(
        home["video"]["primary_path"],
        "https://www.youtube.com/watch?v=QRZPy8Oag3g"
    );

    let (_, legends) = get_json(app, "/api/v1/media/legends").await;
    assert_eq!(legends["gallery"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_resolve_asset_endpoint() {
    let (_dir, app) = test_app();
    let (status, body) = get_json(
        app.clone(),
        "/api/v1/assets/resolve?kind=image&name=missing.jpg&fallback=https%3A%2F%2Fcdn.example.com%2Fa.jpg",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primary_path"], "https://cdn.example.com/a.jpg");

    let (status, body) = get_json(app.clone(), "/api/v1/assets/resolve?kind=video&name=none.mp4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"primary_path": null, "fallback_reference": null}));

    let (status, body) = get_json(app, "/api/v1/assets/resolve?kind=image&name=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let (_dir, app) = test_app();
    let request = Request::builder()
        .uri("/assets/images/floral.jpg")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"jpg");
}
