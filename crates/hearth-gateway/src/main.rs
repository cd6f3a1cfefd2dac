//! `hearthd` - the Hearth gateway binary.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hearth_gateway::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth_gateway=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting Hearth gateway on {}:{}", config.host, config.port);
    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; upstream routes will answer 503");
    }
    if config.workflow_id.is_none() {
        tracing::warn!("CHATKIT_WORKFLOW_ID is not set; session creation will answer 503");
    }

    // Create app state and router
    let state = Arc::new(AppState::new(config.clone())?);
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
