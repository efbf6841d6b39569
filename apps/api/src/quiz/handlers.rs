//! Axum route handlers for the Quiz Engine.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::quiz::{evaluate, QuizResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub responses: Vec<String>,
}

/// POST /api/v1/quiz/evaluate
///
/// Responses outside the four category keys are ignored rather than rejected.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Json<QuizResult> {
    let result = evaluate(&state.assets, &request.responses);
    debug!(
        responses = request.responses.len(),
        winner = %result.category,
        "Quiz evaluated"
    );
    Json(result)
}
