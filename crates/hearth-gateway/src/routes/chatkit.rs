//! Session-creation endpoint backed by the hosted session broker.
//!
//! The only route that participates in the cookie bootstrap: the resolver
//! reuses or mints the per-browser user id, the broker binds a session to it,
//! and a freshly minted id rides back on a `Set-Cookie` header.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use hearth::identity::resolve_session;
use hearth::GatewayError;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Optional override for the configured workflow.
    #[serde(default)]
    pub workflow_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub client_secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// POST /api/chatkit/session - mint a widget session against the broker
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Option<Json<CreateSessionRequest>>,
) -> Result<Response, GatewayError> {
    let upstream = state.require_upstream()?;

    let request = body.map(|Json(inner)| inner).unwrap_or_default();
    let workflow = match request.workflow_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => state.require_workflow()?,
    };

    let cookie_header = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
    let session = resolve_session(cookie_header, &state.cookie_policy());

    let created = upstream
        .create_chatkit_session(&session.user_id, workflow)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create chatkit session: {e}");
            GatewayError::from(e)
        })?;

    tracing::info!(
        user = %session.user_id,
        origin = ?session.origin,
        "Created chatkit session"
    );

    let payload = Json(CreateSessionResponse {
        client_secret: created.client_secret,
        expires_at: created.expires_at,
    });

    let response = match session.set_cookie {
        Some(cookie) => {
            (StatusCode::OK, [(header::SET_COOKIE, cookie)], payload).into_response()
        }
        None => (StatusCode::OK, payload).into_response(),
    };

    Ok(response)
}
