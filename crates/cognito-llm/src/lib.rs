//! Cognito LLM Provider Layer
//!
//! Pluggable text-generation clients behind the `LlmProvider` trait from
//! `cognito-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama chat API
//! - `OpenAiProvider`: OpenAI-compatible chat-completions API
//!
//! Every provider makes exactly one attempt per call. Retrying is left to
//! callers; the outline pipeline never retries.
//!
//! # Examples
//!
//! ```
//! use cognito_llm::MockProvider;
//! use cognito_domain::{GenerationRequest, LlmProvider};
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let request = GenerationRequest::new("system", "test prompt");
//! let result = provider.generate(&request).unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod ollama;
pub mod openai;

use cognito_domain::{GenerationRequest, LlmProvider as LlmProviderTrait};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Request did not complete in time
    #[error("Request timed out")]
    Timeout,

    /// Credentials missing or rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Completion contained no text
    #[error("Empty completion")]
    EmptyCompletion,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else if e.is_decode() {
            LlmError::InvalidResponse(e.to_string())
        } else {
            LlmError::Communication(format!("Request failed: {}", e))
        }
    }
}

/// Map a non-success HTTP status to an error
pub(crate) fn status_error(status: reqwest::StatusCode, body: String, model: &str) -> LlmError {
    match status.as_u16() {
        401 | 403 => LlmError::Authentication(format!("HTTP {}: {}", status, body)),
        404 => LlmError::ModelNotAvailable(model.to_string()),
        429 => LlmError::RateLimitExceeded,
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body)),
    }
}

/// Reject completions that carry no text
pub(crate) fn non_empty(completion: String) -> Result<String, LlmError> {
    if completion.trim().is_empty() {
        Err(LlmError::EmptyCompletion)
    } else {
        Ok(completion)
    }
}

/// Run an async provider call to completion on a private runtime
///
/// The trait is synchronous; callers run it on a blocking thread.
pub(crate) fn block_on<F>(future: F) -> Result<String, LlmError>
where
    F: std::future::Future<Output = Result<String, LlmError>>,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
        .block_on(future)
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
/// Responses are keyed on the user message of the request.
///
/// # Examples
///
/// ```
/// use cognito_llm::MockProvider;
/// use cognito_domain::{GenerationRequest, LlmProvider};
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// let request = GenerationRequest::new("system", "any prompt");
/// assert_eq!(provider.generate(&request).unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// let request = GenerationRequest::new("system", "prompt1");
/// assert_eq!(provider.generate(&request).unwrap(), "response1");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Result<String, LlmError>>>>,
    failure: Option<LlmError>,
    delay: Option<Duration>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<GenerationRequest>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            failure: None,
            delay: None,
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a provider that fails every call with `error`
    pub fn failing(error: LlmError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Sleep for `delay` before answering (simulates a slow service)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Add a specific response for a given user prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Ok(response.into()));
    }

    /// Configure to return an error for a specific user prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, error: LlmError) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Err(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    /// The most recent request received
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(&request.user) {
            return response.clone();
        }

        Ok(self.default_response.clone())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user: &str) -> GenerationRequest {
        GenerationRequest::new("system", user)
    }

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate(&request("any prompt"));
        assert_eq!(result, Ok("Test response".to_string()));
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate(&request("hello")).unwrap(), "world");
        assert_eq!(provider.generate(&request("foo")).unwrap(), "bar");
        assert_eq!(
            provider.generate(&request("unknown")).unwrap(),
            "Default mock response"
        );
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.generate(&request("prompt1")).unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate(&request("prompt2")).unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt", LlmError::RateLimitExceeded);

        let result = provider.generate(&request("bad prompt"));
        assert_eq!(result, Err(LlmError::RateLimitExceeded));
    }

    #[test]
    fn test_mock_provider_failing() {
        let provider = MockProvider::failing(LlmError::Authentication("bad key".to_string()));
        let result = provider.generate(&request("anything"));
        assert!(matches!(result, Err(LlmError::Authentication(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_provider_records_last_request() {
        let provider = MockProvider::new("ok");
        assert!(provider.last_request().is_none());

        let req = request("outline please").with_temperature(0.3);
        provider.generate(&req).unwrap();
        assert_eq!(provider.last_request(), Some(req));
    }

    #[test]
    fn test_mock_provider_clone() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate(&request("test")).unwrap();

        // Both should share the same call count due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_status_error_mapping() {
        use reqwest::StatusCode;

        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new(), "m"),
            LlmError::Authentication(_)
        ));
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, String::new(), "m"),
            LlmError::ModelNotAvailable("m".to_string())
        );
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, String::new(), "m"),
            LlmError::RateLimitExceeded
        );
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, "oops".to_string(), "m"),
            LlmError::Communication(_)
        ));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  \n".to_string()), Err(LlmError::EmptyCompletion));
        assert_eq!(non_empty("text".to_string()), Ok("text".to_string()));
    }
}
