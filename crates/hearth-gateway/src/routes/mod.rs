//! HTTP routes for the gateway, mounted under `/api`.

pub mod chat;
pub mod chatkit;
pub mod listing;
pub mod realtime;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// Build the `/api` router.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chatkit/session", post(chatkit::create_session))
        .route("/chat", post(chat::complete))
        .route("/realtime/session", post(realtime::create_session))
        .route("/listing/prompt", get(listing::widget_prompt))
        .with_state(state)
}
