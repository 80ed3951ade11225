use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use crate::controllers::feedback::{list_feedbacks, submit_feedback};
use crate::models::app_state::AppState;

pub fn feedback_routes() -> Router<Arc<AppState>> {
    Router::new().route("/feedbacks", post(submit_feedback).get(list_feedbacks))
}
