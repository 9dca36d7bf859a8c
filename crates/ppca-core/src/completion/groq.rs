//! Groq chat completion client.
//!
//! Speaks the OpenAI-compatible `/chat/completions` API, so any provider
//! exposing that endpoint can be used by changing the base URL.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{ChatMessage, CompletionBackend, CompletionRequest};
use crate::error::UpstreamError;

/// Default Groq API URL.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default provider name shown in error messages.
pub const DEFAULT_PROVIDER: &str = "Groq";

/// Connection settings, fixed at process start.
#[derive(Debug, Clone)]
pub struct GroqSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub provider: String,
    pub timeout: Duration,
}

impl Default for GroqSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Chat completion client.
#[derive(Clone)]
pub struct GroqClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    provider: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl GroqClient {
    pub fn new(settings: GroqSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .unwrap_or_default();

        Self {
            api_key: settings.api_key.filter(|k| !k.trim().is_empty()),
            model: settings.model,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            provider: settings.provider,
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    fn provider(&self) -> &str {
        &self.provider
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %self.model, max_tokens = request.max_tokens, "Calling completion API");
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status: status.as_u16(), body });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        let text = reply_text(parsed)?;
        debug!(reply_len = text.len(), "Completion API replied");
        Ok(text)
    }
}

/// Text of the first choice.
fn reply_text(response: ChatCompletionResponse) -> Result<String, UpstreamError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(UpstreamError::EmptyReply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("usr")];
        let body = ChatCompletionRequest {
            model: DEFAULT_MODEL,
            messages: &messages,
            temperature: 0.2,
            max_tokens: 1500,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], json!(DEFAULT_MODEL));
        assert_eq!(value["max_tokens"], json!(1500));
        assert_eq!(value["messages"][0], json!({"role": "system", "content": "sys"}));
        assert_eq!(value["messages"][1], json!({"role": "user", "content": "usr"}));
    }

    #[test]
    fn test_reply_text_takes_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"is_valid\": true}"}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }))
        .unwrap();
        assert_eq!(reply_text(response).unwrap(), "{\"is_valid\": true}");
    }

    #[test]
    fn test_reply_without_choices_is_empty() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(matches!(reply_text(response), Err(UpstreamError::EmptyReply)));
    }

    #[tokio::test]
    async fn test_blank_api_key_treated_as_missing() {
        let client = GroqClient::new(GroqSettings {
            api_key: Some("  ".to_string()),
            base_url: "http://127.0.0.1:9/".to_string(),
            ..GroqSettings::default()
        });
        let err = client
            .complete(CompletionRequest {
                messages: vec![ChatMessage::user("hi")],
                temperature: 0.2,
                max_tokens: 10,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let client = GroqClient::new(GroqSettings {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..GroqSettings::default()
        });
        let err = client
            .complete(CompletionRequest {
                messages: vec![ChatMessage::user("hi")],
                temperature: 0.3,
                max_tokens: 10,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::MissingApiKey));
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/chat/completions");
    }
}
