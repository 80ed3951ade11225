use std::sync::Arc;

use crate::services::sentiment::SentimentClassifier;
use crate::services::storage::FeedbackStore;

/// Shared handles built once at startup and injected into every handler,
/// no hidden globals.
#[derive(Clone)]
pub struct AppState {
    pub feedback_store: Arc<dyn FeedbackStore>,
    pub sentiment_classifier: Arc<dyn SentimentClassifier>,
}
