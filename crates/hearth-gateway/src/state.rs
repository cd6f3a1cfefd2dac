//! Application state

use anyhow::Result;

use hearth::identity::CookiePolicy;
use hearth::upstream::UpstreamClient;
use hearth::GatewayError;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,

    /// Upstream provider client, absent until an API key is configured
    upstream: Option<UpstreamClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let upstream = match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => {
                let http = reqwest::Client::builder().build()?;
                Some(UpstreamClient::new(
                    http,
                    config.api_base_url.clone(),
                    key,
                ))
            }
            _ => None,
        };

        Ok(Self { config, upstream })
    }

    /// Get the upstream client or a 503 for unconfigured deployments.
    /// Reduces repeated match boilerplate in route handlers.
    pub fn require_upstream(&self) -> Result<&UpstreamClient, GatewayError> {
        self.upstream
            .as_ref()
            .ok_or(GatewayError::NotConfigured("OPENAI_API_KEY is not set"))
    }

    /// Get the configured workflow id or a 503.
    pub fn require_workflow(&self) -> Result<&str, GatewayError> {
        self.config
            .workflow_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(GatewayError::NotConfigured("CHATKIT_WORKFLOW_ID is not set"))
    }

    pub fn has_upstream(&self) -> bool {
        self.upstream.is_some()
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        self.config.cookie_policy()
    }
}
