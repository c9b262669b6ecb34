use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::warn;

use bhujal_core::greeting;
use bhujal_core::models::reply::GatewayReply;

use crate::state::AppState;

/// Fixed apology substituted when the QA service cannot be reached.
pub const FALLBACK_REPLY: &str =
    "Sorry, I could not process that right now. Please try again in a moment.";

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Handle one chat turn.
///
/// Empty messages and greetings are answered locally with no outbound
/// call. Everything else is forwarded to the QA endpoint once; any failure
/// is converted to a fallback apology, so this route never returns a
/// non-2xx status for a business-logic outcome.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let message = req.message.trim();

    let reply = if message.is_empty() {
        GatewayReply::Answer(greeting::empty_message_reply().to_string())
    } else if greeting::is_greeting(message) {
        GatewayReply::Answer(greeting::greeting_reply().to_string())
    } else {
        match state.upstream.ask(message).await {
            Ok(text) => GatewayReply::Answer(text),
            Err(err) => {
                warn!(error = %err, "qa call failed, substituting fallback reply");
                GatewayReply::Fallback(FALLBACK_REPLY.to_string())
            }
        }
    };

    Json(ChatResponse {
        reply: reply.into_text(),
    })
}
