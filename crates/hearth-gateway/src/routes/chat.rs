//! Chat-completion proxy.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use hearth::upstream::{ChatMessage, ChatOutcome};
use hearth::GatewayError;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    /// Optional override for the configured chat model.
    #[serde(default)]
    pub model: Option<String>,
}

/// POST /api/chat - forward a transcript to the provider
pub async fn complete(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatOutcome>, GatewayError> {
    let upstream = state.require_upstream()?;

    if request.messages.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "messages must not be empty".to_string(),
        ));
    }

    let model = request
        .model
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(&state.config.chat_model);

    let outcome = upstream
        .chat_completion(model, &request.messages)
        .await
        .map_err(|e| {
            tracing::error!("Chat completion failed: {e}");
            GatewayError::from(e)
        })?;

    Ok(Json(outcome))
}
