//! Clients for the upstream provider APIs.
//!
//! One HTTPS JSON API family behind a single bearer token: the hosted chat
//! session broker, chat completions, and realtime voice sessions. Each call is
//! parse → POST → reshape; there is no retry or backoff and the token is
//! forwarded verbatim.

mod broker;
mod chat;
mod realtime;

pub use broker::ChatkitSession;
pub use chat::{ChatMessage, ChatOutcome, ChatUsage};
pub use realtime::{RealtimeClientSecret, RealtimeSession};

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Upstream call failures.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider returned no choices")]
    EmptyCompletion,
}

/// HTTP client bound to one provider base URL and bearer token.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl UpstreamClient {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    async fn execute<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&bytes);
            tracing::debug!(status = status.as_u16(), %message, "Upstream call failed");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Pull `error.message` out of a provider error body, falling back to the raw
/// body text.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = UpstreamClient::new(Client::new(), "https://api.example.com/", "sk-test");
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn error_message_prefers_provider_shape() {
        let body = br#"{"error":{"message":"Invalid API key","type":"auth"}}"#;
        assert_eq!(error_message(body), "Invalid API key");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message(b"upstream exploded\n"), "upstream exploded");
    }
}
