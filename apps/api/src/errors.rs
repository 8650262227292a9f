use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::ModelError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Model returned an empty response")]
    ModelEmptyResponse,

    #[error("Model call failed: {0}")]
    ModelCallFailed(ModelError),
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Empty => AppError::ModelEmptyResponse,
            other => AppError::ModelCallFailed(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingInput(msg) => (StatusCode::BAD_REQUEST, "MISSING_INPUT", msg.clone()),
            AppError::ModelEmptyResponse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MODEL_EMPTY_RESPONSE",
                "The AI model returned an empty response".to_string(),
            ),
            AppError::ModelCallFailed(e) => {
                // The underlying cause is logged here, never sent to the caller
                tracing::error!("Model call failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MODEL_CALL_FAILED",
                    "An AI processing error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_error_becomes_empty_response() {
        let err: AppError = ModelError::Empty.into();
        assert!(matches!(err, AppError::ModelEmptyResponse));
    }

    #[test]
    fn test_api_model_error_becomes_call_failed() {
        let err: AppError = ModelError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::ModelCallFailed(_)));
    }
}
