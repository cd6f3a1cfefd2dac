//! Realtime voice-session proxy.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use hearth::upstream::RealtimeSession;
use hearth::GatewayError;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RealtimeSessionRequest {
    /// Optional override for the configured realtime model.
    #[serde(default)]
    pub model: Option<String>,
    /// Optional override for the configured voice.
    #[serde(default)]
    pub voice: Option<String>,
    /// Optional system instructions, e.g. the listing prompt.
    #[serde(default)]
    pub instructions: Option<String>,
}

/// POST /api/realtime/session - mint an ephemeral voice session
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    body: Option<Json<RealtimeSessionRequest>>,
) -> Result<Json<RealtimeSession>, GatewayError> {
    let upstream = state.require_upstream()?;

    let request = body.map(|Json(inner)| inner).unwrap_or_default();
    let model = request
        .model
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(&state.config.realtime_model);
    let voice = request
        .voice
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(&state.config.realtime_voice);

    let session = upstream
        .create_realtime_session(model, voice, request.instructions.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create realtime session: {e}");
            GatewayError::from(e)
        })?;

    Ok(Json(session))
}
