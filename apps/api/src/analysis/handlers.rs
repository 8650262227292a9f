//! Axum route handler for the Resume Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    // Absent and empty are treated the same, so a missing field surfaces as
    // the documented 400 rather than a body-deserialization rejection.
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub analysis: String,
}

/// POST /analyze_resume
///
/// Scores the resume and generates feedback plus interview questions in one
/// model call. The model text is relayed verbatim, unparsed.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::MissingInput(
            "resume_text is required".to_string(),
        ));
    }

    let prompt = build_analysis_prompt(&request.resume_text);
    let analysis = state.llm.generate(&prompt).await?;

    Ok(Json(AnalyzeResumeResponse { analysis }))
}
