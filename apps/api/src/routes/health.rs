use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the size of each loaded bank.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "prepnexus-api",
        "banks": {
            "dsa_questions": state.dsa.len(),
            "interview_questions": state.interview.len(),
            "aptitude_tests": state.aptitude.len()
        },
        "question_sink": state.question_sink.backend()
    }))
}
