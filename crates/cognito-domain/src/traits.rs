//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the outline pipeline and the
//! services it consumes. Implementations live in other crates and are
//! injected at construction time.

use crate::DocumentAnalysis;

/// Trait for turning raw text into linguistic features
///
/// Implemented by the NLP layer (cognito-nlp)
pub trait FeatureExtractor {
    /// Error type for extraction failures
    type Error;

    /// Tokenize, tag and chunk a text
    ///
    /// Must be deterministic for identical input.
    fn extract(&self, text: &str) -> Result<DocumentAnalysis, Self::Error>;
}

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion budget in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// A single chat-style completion request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System role message
    pub system: String,

    /// User role message
    pub user: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Create a request with default sampling settings
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (cognito-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate one text completion
    ///
    /// Implementations make a single attempt; callers decide what a failure
    /// means.
    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error>;

    /// Model identifier, for logging
    fn model_name(&self) -> &str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_defaults() {
        let request = GenerationRequest::new("system", "user");
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(request.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_generation_request_builders() {
        let request = GenerationRequest::new("s", "u")
            .with_temperature(0.2)
            .with_max_tokens(64);
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 64);
        assert_eq!(request.system, "s");
        assert_eq!(request.user, "u");
    }
}
