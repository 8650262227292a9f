//! Axum route handler for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::history::ChatTurn;
use crate::interview::prompts::build_interview_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    // Absent and empty are treated the same for the required fields, so a
    // missing field surfaces as the documented 400.
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub user_answer: String,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub feedback: String,
}

/// POST /interview
///
/// One interview turn: builds a single prompt from the resume, the latest
/// answer, and the caller-resubmitted history, makes exactly one model call,
/// and relays the model text unmodified. Whether that text is a
/// feedback/next-question pair or a final report is the model's judgment;
/// the service does not inspect it.
pub async fn handle_interview(
    State(state): State<AppState>,
    Json(request): Json<InterviewRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::MissingInput(
            "resume_text is required".to_string(),
        ));
    }
    if request.user_answer.trim().is_empty() {
        return Err(AppError::MissingInput(
            "user_answer is required".to_string(),
        ));
    }

    let prompt = build_interview_prompt(
        &request.resume_text,
        &request.user_answer,
        &request.chat_history,
    );
    let feedback = state.llm.generate(&prompt).await?;

    Ok(Json(InterviewResponse { feedback }))
}
