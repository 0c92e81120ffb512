use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Soft rejects (empty extraction, failed keyword or classifier gate) are NOT
/// errors — they are ordinary 200 responses built by the pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Analysis(msg) => {
                tracing::error!("Analysis error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error during analysis: {msg}"),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error during analysis: {msg}"),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
