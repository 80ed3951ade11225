use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;

pub mod controllers;
pub mod error;
pub mod models;
pub mod observability;
pub mod routes;
pub mod services;

use crate::models::app_state::AppState;
use crate::routes::feedback_routes::feedback_routes;
use crate::services::sentiment::{HfSentimentClassifier, SentimentClassifier};
use crate::services::storage::{FeedbackStore, PgFeedbackStore};

pub async fn start_server() {
    dotenv().ok();
    let _guard = services::tracing::init_tracing();
    observability::metrics::init_metrics();

    let port = std::env::var("PORT").unwrap_or("5000".to_string());
    tracing::info!("Starting server on port {}", port);
    tracing::info!("creating TCP listener");
    let tcp_listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await.unwrap();

    let app = routes().await;
    axum::serve(tcp_listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

pub async fn routes() -> Router {
    // The store connects its pool here, before any route is reachable.
    let feedback_store: Arc<dyn FeedbackStore> = Arc::new(PgFeedbackStore::new().await);
    let sentiment_classifier: Arc<dyn SentimentClassifier> = Arc::new(HfSentimentClassifier::new());
    let state = Arc::new(AppState {
        feedback_store,
        sentiment_classifier,
    });

    // Configure CORS, only the configured frontend origin is allowed
    let allowed_origin = std::env::var("ALLOWED_ORIGIN").unwrap();
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(feedback_routes())
        .layer(cors)
        .layer(services::http_tracing::http_trace_layer())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
