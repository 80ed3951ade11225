use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Failures that reach the caller. Classifier failures never show up here,
/// they are folded into a neutral sentiment inside the sentiment service.
#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("Feedback is required")]
    Validation,

    #[error("Error saving feedback: {0}")]
    Persistence(anyhow::Error),

    #[error("Error retrieving feedback: {0}")]
    Retrieval(anyhow::Error),
}

impl IntoResponse for FeedbackError {
    fn into_response(self) -> Response {
        match self {
            FeedbackError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Feedback is required" })),
            )
                .into_response(),
            FeedbackError::Persistence(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Error saving feedback",
                    "error": err.to_string()
                })),
            )
                .into_response(),
            FeedbackError::Retrieval(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Error retrieving feedback",
                    "error": err.to_string()
                })),
            )
                .into_response(),
        }
    }
}
