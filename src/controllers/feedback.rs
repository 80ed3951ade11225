use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use crate::error::FeedbackError;
use crate::models::app_state::AppState;
use crate::models::feedback_models::{FeedbackRecord, FeedbackRequest};
use crate::services::sentiment::analyze_sentiment;

pub async fn submit_feedback(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), FeedbackError> {
    // nothing is classified or stored for an empty submission
    let feedback = match request.feedback {
        Some(feedback) if !feedback.is_empty() => feedback,
        _ => return Err(FeedbackError::Validation),
    };

    tracing::info!("analyzing sentiment for new feedback");
    let sentiment = analyze_sentiment(app_state.sentiment_classifier.as_ref(), &feedback).await;

    let record = FeedbackRecord {
        feedback,
        sentiment,
        date: Utc::now(),
    };

    match app_state.feedback_store.insert_feedback(&record).await {
        Ok(()) => {
            tracing::info!("stored feedback with sentiment {:?}", sentiment);
            Ok((
                StatusCode::OK,
                Json(json!({
                    "message": "Feedback submitted successfully",
                    "sentiment": sentiment
                })),
            ))
        }
        Err(err) => {
            tracing::error!("error occurred while saving feedback");
            Err(FeedbackError::Persistence(err))
        }
    }
}

pub async fn list_feedbacks(
    State(app_state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<FeedbackRecord>>), FeedbackError> {
    match app_state.feedback_store.get_feedbacks().await {
        Ok(feedbacks) => {
            tracing::info!("got {} stored feedbacks", feedbacks.len());
            Ok((StatusCode::OK, Json(feedbacks)))
        }
        Err(err) => {
            tracing::error!("error occurred while retrieving feedbacks");
            Err(FeedbackError::Retrieval(err))
        }
    }
}
