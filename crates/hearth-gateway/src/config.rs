//! Configuration for the gateway.
//!
//! All environment reads happen once at startup; handlers only ever see the
//! resulting struct.

use anyhow::{Context, Result};
use serde::Deserialize;

use hearth::identity::CookiePolicy;
use hearth::upstream::DEFAULT_BASE_URL;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server host (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Provider bearer token, forwarded verbatim upstream (optional; routes
    /// that need it answer 503 until it is set)
    pub api_key: Option<String>,

    /// Provider base URL (default: https://api.openai.com)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// ChatKit workflow the session broker binds new sessions to (optional)
    pub workflow_id: Option<String>,

    /// Model for the chat-completion proxy (default: gpt-4o-mini)
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Model for realtime voice sessions (default: gpt-4o-realtime-preview)
    #[serde(default = "default_realtime_model")]
    pub realtime_model: String,

    /// Voice for realtime sessions (default: alloy)
    #[serde(default = "default_realtime_voice")]
    pub realtime_voice: String,

    /// Whether to set the Secure flag on session cookies (default: false;
    /// production deployments behind HTTPS set true)
    #[serde(default)]
    pub secure_cookies: bool,

    /// CORS allowed origins (comma-separated). If unset, permissive dev CORS.
    pub cors_allowed_origins: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_chat_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_realtime_model() -> String {
    "gpt-4o-realtime-preview".to_string()
}

fn default_realtime_voice() -> String {
    "alloy".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HEARTH_HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("HEARTH_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_port);
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());
        let api_base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| default_api_base_url());
        let workflow_id = std::env::var("CHATKIT_WORKFLOW_ID")
            .ok()
            .filter(|s| !s.is_empty());
        let chat_model = std::env::var("CHAT_MODEL").unwrap_or_else(|_| default_chat_model());
        let realtime_model =
            std::env::var("REALTIME_MODEL").unwrap_or_else(|_| default_realtime_model());
        let realtime_voice =
            std::env::var("REALTIME_VOICE").unwrap_or_else(|_| default_realtime_voice());
        let secure_cookies = std::env::var("SECURE_COOKIES")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS").ok();

        Ok(Self {
            host,
            port,
            api_key,
            api_base_url,
            workflow_id,
            chat_model,
            realtime_model,
            realtime_voice,
            secure_cookies,
            cors_allowed_origins,
        })
    }

    /// Load configuration from a TOML file
    #[allow(dead_code)]
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;
        Ok(config)
    }

    /// Cookie attributes handed to the session identity resolver.
    pub fn cookie_policy(&self) -> CookiePolicy {
        CookiePolicy::new(self.secure_cookies)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
            api_base_url: default_api_base_url(),
            workflow_id: None,
            chat_model: default_chat_model(),
            realtime_model: default_realtime_model(),
            realtime_voice: default_realtime_voice(),
            secure_cookies: false,
            cors_allowed_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base_url, "https://api.openai.com");
        assert!(config.api_key.is_none());
        assert!(!config.secure_cookies);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config: Config = toml::from_str(
            r#"
            port = 9090
            api_key = "sk-test"
            workflow_id = "wf_42"
            secure_cookies = true
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.workflow_id.as_deref(), Some("wf_42"));
        assert!(config.cookie_policy().secure);
        // Untouched fields keep their defaults.
        assert_eq!(config.chat_model, "gpt-4o-mini");
    }
}
