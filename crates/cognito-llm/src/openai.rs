//! OpenAI-compatible chat-completions provider
//!
//! Works against api.openai.com and any server exposing the same
//! `/v1/chat/completions` shape (llama.cpp, vLLM, LM Studio).

use crate::{block_on, non_empty, status_error, LlmError};
use cognito_domain::{GenerationRequest, LlmProvider as LlmProviderTrait};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Chat-completions API provider
pub struct OpenAiProvider {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(0)
        .build()
        .unwrap_or_default()
}

impl OpenAiProvider {
    /// Create a provider for `base_url` (e.g. "https://api.openai.com/v1")
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client: build_client(timeout),
            timeout,
        }
    }

    /// Create a provider for api.openai.com using `OPENAI_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Authentication` when the variable is unset or empty.
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::Authentication(format!("{} not set", API_KEY_ENV)))?;
        Ok(Self::new(DEFAULT_BASE_URL, model, api_key))
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.client = build_client(timeout);
        self
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn completions_url(&self) -> String {
        if self.base_url.ends_with("/chat/completions") {
            self.base_url.clone()
        } else {
            format!("{}/chat/completions", self.base_url)
        }
    }

    /// Request one chat completion
    pub async fn complete(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let url = self.completions_url();

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &request.system,
                },
                Message {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!("Sending chat completion to {} (model {})", url, self.model);

        let mut builder = self.client.post(&url).json(&body);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, error_text, &self.model));
        }

        let parsed = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        extract_content(parsed)
    }
}

fn extract_content(response: ChatCompletionResponse) -> Result<String, LlmError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LlmError::EmptyCompletion)?;
    non_empty(content)
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        block_on(self.complete(request))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url() {
        let provider = OpenAiProvider::new("https://api.openai.com/v1/", DEFAULT_MODEL, "k");
        assert_eq!(
            provider.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );

        let provider =
            OpenAiProvider::new("http://127.0.0.1:8111/v1/chat/completions", "local", "");
        assert_eq!(
            provider.completions_url(),
            "http://127.0.0.1:8111/v1/chat/completions"
        );
    }

    #[test]
    fn test_extract_content() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "outline"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(response), Ok("outline".to_string()));
    }

    #[test]
    fn test_extract_content_empty() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(extract_content(response), Err(LlmError::EmptyCompletion));

        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(extract_content(response), Err(LlmError::EmptyCompletion));
    }

    #[test]
    fn test_request_shape() {
        let body = ChatCompletionRequest {
            model: DEFAULT_MODEL,
            messages: vec![
                Message {
                    role: "system",
                    content: "sys",
                },
                Message {
                    role: "user",
                    content: "usr",
                },
            ],
            temperature: 0.7,
            max_tokens: 1000,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][1]["content"], "usr");
        assert_eq!(json["max_tokens"], 1000);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let provider = OpenAiProvider::new("http://127.0.0.1:9/v1", DEFAULT_MODEL, "k")
            .with_timeout(Duration::from_secs(2));
        let result = provider.complete(&GenerationRequest::new("s", "u")).await;
        assert!(matches!(
            result,
            Err(LlmError::Communication(_)) | Err(LlmError::Timeout)
        ));
    }
}
