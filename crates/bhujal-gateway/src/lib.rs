//! bhujal-gateway
//!
//! HTTP gateway in front of the external question-answering and ingestion
//! service: greeting short-circuit, resilient forwarding, and guaranteed
//! cleanup of staged uploads.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod staging;
pub mod state;

pub use state::AppState;

/// Build the gateway router with all routes and layers mounted.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/chat", post(routes::chat::chat))
        .route("/api/upload-pdf", post(routes::upload::upload_pdf))
        .layer(axum_mw::from_fn(middleware::logging::request_log))
        .layer(cors)
        .with_state(state)
}
