pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::aptitude::handlers as aptitude;
use crate::bank::handlers as bank;
use crate::csv::handle_parse_csv;
use crate::questions::handlers as questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // CSV
        .route("/api/v1/csv/parse", post(handle_parse_csv))
        // Aptitude question authoring
        .route(
            "/api/v1/aptitude/options/preview",
            post(questions::handle_preview_options),
        )
        .route(
            "/api/v1/aptitude/questions",
            post(questions::handle_submit_question),
        )
        // Aptitude tests
        .route("/api/v1/aptitude/tests/:id", get(aptitude::handle_get_test))
        .route(
            "/api/v1/aptitude/tests/:id/submit",
            post(aptitude::handle_submit_test),
        )
        // Question banks
        .route("/api/v1/dsa/questions", get(bank::handle_dsa_questions))
        .route("/api/v1/dsa/categories", get(bank::handle_dsa_categories))
        .route("/api/v1/dsa/stats", get(bank::handle_dsa_stats))
        .route("/api/v1/interview/roles", get(bank::handle_interview_roles))
        .route(
            "/api/v1/interview/questions",
            get(bank::handle_interview_questions),
        )
        .with_state(state)
}
