use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::bank::dsa::{BankStats, DsaQuery, DsaQuestion, Page};
use crate::bank::interview::InterviewQuestion;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

/// GET /api/v1/dsa/questions
pub async fn handle_dsa_questions(
    State(state): State<AppState>,
    Query(query): Query<DsaQuery>,
) -> Json<Page<DsaQuestion>> {
    Json(state.dsa.query(&query))
}

/// GET /api/v1/dsa/categories
pub async fn handle_dsa_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dsa.categories())
}

/// GET /api/v1/dsa/stats
pub async fn handle_dsa_stats(State(state): State<AppState>) -> Json<BankStats> {
    Json(state.dsa.stats())
}

/// GET /api/v1/interview/roles
pub async fn handle_interview_roles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.interview.roles())
}

/// GET /api/v1/interview/questions?role=
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Query(params): Query<RoleQuery>,
) -> Result<Json<Vec<InterviewQuestion>>, AppError> {
    let role = params.role.as_deref().map(str::trim).unwrap_or_default();
    if role.is_empty() {
        return Err(AppError::Validation("role is required".to_string()));
    }
    Ok(Json(state.interview.for_role(role)))
}
