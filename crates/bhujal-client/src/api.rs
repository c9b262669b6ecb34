//! HTTP client for the gateway's chat and upload routes.
//!
//! Every method resolves to a [`GatewayReply`] so the surface always has a
//! message to render; transport failures become fallback text rather than
//! errors that would leave the conversation hanging.

use std::path::Path;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use bhujal_core::models::reply::GatewayReply;

/// Rendered when the gateway itself cannot be reached.
pub const CONNECTION_FALLBACK: &str = "Error connecting to the assistant. Please try again.";

/// Rendered when an upload fails anywhere along the pipeline.
pub const UPLOAD_FALLBACK: &str = "PDF upload failed. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
}

#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Send one chat turn. Any transport or decoding problem becomes a
    /// fallback reply.
    pub async fn send(&self, message: &str) -> GatewayReply {
        match self.post_chat(message).await {
            Ok(Some(reply)) => GatewayReply::Answer(reply),
            Ok(None) => GatewayReply::Fallback("No reply from server.".to_string()),
            Err(err) => {
                warn!(error = %err, "chat call failed");
                GatewayReply::Fallback(CONNECTION_FALLBACK.to_string())
            }
        }
    }

    /// Upload a document and describe the outcome the way the ingestion
    /// service reported it: an extracted snippet, a stored document id to
    /// ask follow-up questions about, or a bare acknowledgment.
    pub async fn upload(&self, path: &Path) -> GatewayReply {
        match self.post_upload(path).await {
            Ok(body) => match (body.snippet, body.id) {
                (Some(snippet), _) => {
                    GatewayReply::Answer(format!("PDF processed. Snippet: {snippet}"))
                }
                (None, Some(id)) => GatewayReply::Answer(format!(
                    "PDF stored (id: {id}). You can now ask about the report."
                )),
                (None, None) => {
                    GatewayReply::Answer("PDF uploaded but no text returned.".to_string())
                }
            },
            Err(err) => {
                warn!(error = %err, "upload failed");
                GatewayReply::Fallback(UPLOAD_FALLBACK.to_string())
            }
        }
    }

    async fn post_chat(&self, message: &str) -> Result<Option<String>, reqwest::Error> {
        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&ChatRequest { message })
            .send()
            .await?;
        let body: ChatResponse = response.json().await?;
        Ok(body.reply)
    }

    async fn post_upload(&self, path: &Path) -> Result<UploadResponse, ClientError> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.pdf")
            .to_string();

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("pdf", part);

        let response = self
            .http
            .post(format!("{}/api/upload-pdf", self.base_url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<UploadResponse>().await?)
    }
}
