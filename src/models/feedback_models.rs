use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: Option<String>,
}

/// The closed label set stored and returned by the service. Raw model
/// labels never leave the sentiment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeedbackRecord {
    pub feedback: String,
    pub sentiment: Sentiment,
    pub date: DateTime<Utc>,
}
