use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use bhujal_gateway::{AppState, router};
use bhujal_upstream::client::UpstreamClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bind = env::var("BHUJAL_BIND").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let chat_url =
        env::var("BHUJAL_CHAT_URL").unwrap_or_else(|_| "http://localhost:8000/chat".to_string());
    let ingest_url = env::var("BHUJAL_INGEST_URL")
        .unwrap_or_else(|_| "http://localhost:8000/ingest_pdf".to_string());
    let staging_dir = env::var("BHUJAL_STAGING_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("bhujal-uploads"));

    let state = AppState {
        upstream: UpstreamClient::new(chat_url, ingest_url),
        staging_dir,
    };

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(addr = %bind, "gateway listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
