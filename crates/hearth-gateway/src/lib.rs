//! Hearth gateway - HTTP front for the property-listing chat widget.
//!
//! Proxies session creation, chat completions, and realtime voice sessions to
//! the upstream provider, and decodes URL-embedded listing metadata into the
//! widget prompt. Stateless: the only client-visible state is the anonymous
//! session cookie owned by the browser.

pub mod config;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config.cors_allowed_origins.as_deref());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(state.clone())
        .nest("/api", routes::api_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let origin = match allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            AllowOrigin::list(origins)
        }
        // Dev mode: the widget may be embedded anywhere.
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> &'static str {
    "Hearth Gateway"
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "upstream": if state.has_upstream() { "configured" } else { "unconfigured" },
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
