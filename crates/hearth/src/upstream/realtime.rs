//! Realtime voice session proxying.
//!
//! `POST /v1/realtime/sessions` mints an ephemeral client secret the browser
//! uses to open its own WebRTC/WebSocket connection to the provider.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{UpstreamClient, UpstreamError};

/// Ephemeral credential for the browser-side realtime connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeClientSecret {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// Provider response, reshaped; extra provider fields are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeSession {
    pub client_secret: RealtimeClientSecret,
    pub model: String,
    pub voice: String,
}

impl UpstreamClient {
    /// Create a realtime voice session.
    pub async fn create_realtime_session(
        &self,
        model: &str,
        voice: &str,
        instructions: Option<&str>,
    ) -> Result<RealtimeSession, UpstreamError> {
        let mut body = json!({
            "model": model,
            "voice": voice,
        });
        if let Some(instructions) = instructions {
            body["instructions"] = json!(instructions);
        }

        Self::execute(self.post("/v1/realtime/sessions").json(&body)).await
    }
}
