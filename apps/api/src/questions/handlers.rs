use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::questions::validation::{
    preview_options, validate_question, OptionPreview, ParsedQuestionDraft, QuestionForm,
};
use crate::state::AppState;
use crate::upstream::SubmitReceipt;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub options_text: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuestionResponse {
    pub draft: ParsedQuestionDraft,
    pub receipt: SubmitReceipt,
}

/// POST /api/v1/aptitude/options/preview
pub async fn handle_preview_options(Json(req): Json<PreviewRequest>) -> Json<OptionPreview> {
    Json(preview_options(&req.options_text))
}

/// POST /api/v1/aptitude/questions
pub async fn handle_submit_question(
    State(state): State<AppState>,
    Json(form): Json<QuestionForm>,
) -> Result<(StatusCode, Json<SubmitQuestionResponse>), AppError> {
    let draft = validate_question(&form)?;
    let receipt = state.question_sink.submit(&draft).await?;

    info!(
        "Question submitted via {} sink (category={}, upstream_id={:?})",
        state.question_sink.backend(),
        draft.category,
        receipt.upstream_id
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitQuestionResponse { draft, receipt }),
    ))
}
