//! Client for the QA and ingestion endpoints.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UpstreamError;

/// Default deadline for one question-answering call.
pub const DEFAULT_ASK_TIMEOUT: Duration = Duration::from_secs(60);

/// Default deadline for one document-ingestion call. Longer than the ask
/// deadline because the service extracts text from the document inline.
pub const DEFAULT_INGEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Request body for the question-answering endpoint.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Reply from the question-answering endpoint.
///
/// `context_used` reports the retrieval context the service consulted;
/// callers forward only the reply text.
#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub reply: String,
    #[serde(default)]
    pub context_used: Option<String>,
}

/// Reply from the ingestion endpoint. The service may return an extracted
/// snippet, an opaque document id, both, or neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// HTTP client for the external question-answering and ingestion service.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    chat_url: String,
    ingest_url: String,
    ask_timeout: Duration,
    ingest_timeout: Duration,
}

impl UpstreamClient {
    pub fn new(chat_url: impl Into<String>, ingest_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            chat_url: chat_url.into(),
            ingest_url: ingest_url.into(),
            ask_timeout: DEFAULT_ASK_TIMEOUT,
            ingest_timeout: DEFAULT_INGEST_TIMEOUT,
        }
    }

    /// Overrides the question-answering deadline.
    pub fn with_ask_timeout(mut self, timeout: Duration) -> Self {
        self.ask_timeout = timeout;
        self
    }

    /// Overrides the ingestion deadline.
    pub fn with_ingest_timeout(mut self, timeout: Duration) -> Self {
        self.ingest_timeout = timeout;
        self
    }

    /// Ask one question and return the reply text. One outbound call, no
    /// retries; expiry of the deadline surfaces as [`UpstreamError::Timeout`].
    pub async fn ask(&self, question: &str) -> Result<String, UpstreamError> {
        let response = self
            .http
            .post(&self.chat_url)
            .timeout(self.ask_timeout)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(map_transport)?;

        let response = check_status(response).await?;

        let parsed: AskResponse = response.json().await.map_err(map_decode)?;

        if let Some(context) = &parsed.context_used {
            debug!(context_len = context.len(), "qa service reported retrieval context");
        }

        Ok(parsed.reply)
    }

    /// Forward a staged document to the ingestion endpoint as a multipart
    /// upload, preserving the original filename. One outbound call, no
    /// retries.
    pub async fn ingest_document(
        &self,
        staged: &Path,
        filename: &str,
    ) -> Result<IngestResponse, UpstreamError> {
        let bytes = tokio::fs::read(staged).await?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&self.ingest_url)
            .timeout(self.ingest_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport)?;

        let response = check_status(response).await?;

        response.json().await.map_err(map_decode)
    }
}

fn map_transport(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport(err.to_string())
    }
}

fn map_decode(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Decode(err.to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(UpstreamError::Status {
        status: status.as_u16(),
        body,
    })
}
