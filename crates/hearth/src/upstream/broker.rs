//! Hosted chat session broker.
//!
//! `POST /v1/chatkit/sessions` binds a workflow to an anonymous user id and
//! returns the client secret the widget hands to the embed script.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{UpstreamClient, UpstreamError};

/// Beta opt-in header the broker requires.
const CHATKIT_BETA: (&str, &str) = ("OpenAI-Beta", "chatkit_beta=v1");

/// Broker response, reshaped to what the widget needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatkitSession {
    /// Short-lived secret the embed script exchanges for a widget session.
    pub client_secret: String,
    /// Unix timestamp the secret expires at, when the broker reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl UpstreamClient {
    /// Create a hosted chat session for `user` bound to `workflow_id`.
    pub async fn create_chatkit_session(
        &self,
        user: &str,
        workflow_id: &str,
    ) -> Result<ChatkitSession, UpstreamError> {
        let body = json!({
            "workflow": { "id": workflow_id },
            "user": user,
        });

        let request = self
            .post("/v1/chatkit/sessions")
            .header(CHATKIT_BETA.0, CHATKIT_BETA.1)
            .json(&body);

        Self::execute(request).await
    }
}
