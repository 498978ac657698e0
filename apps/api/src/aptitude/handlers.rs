use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::aptitude::catalog::AptitudeTest;
use crate::aptitude::scoring::{score_submission, TestResult};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: HashMap<String, String>,
}

/// GET /api/v1/aptitude/tests/:id
pub async fn handle_get_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AptitudeTest>, AppError> {
    state
        .aptitude
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Test {id} not found")))
}

/// POST /api/v1/aptitude/tests/:id/submit
pub async fn handle_submit_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<Json<TestResult>, AppError> {
    let test = state
        .aptitude
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Test {id} not found")))?;
    Ok(Json(score_submission(test, &req.answers)))
}
