//! Chat completion proxying.
//!
//! Forwards the widget's transcript to `POST /v1/chat/completions` and keeps
//! only the first choice.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{UpstreamClient, UpstreamError};

/// One chat turn, provider wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Reshaped completion: the assistant turn plus optional usage.
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    pub message: ChatMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl UpstreamClient {
    /// Run one chat completion and return the first choice.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatOutcome, UpstreamError> {
        let body = json!({
            "model": model,
            "messages": messages,
        });

        let response: ChatCompletionResponse =
            Self::execute(self.post("/v1/chat/completions").json(&body)).await?;

        let message = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(UpstreamError::EmptyCompletion)?;

        Ok(ChatOutcome {
            message,
            usage: response.usage,
        })
    }
}
