//! Generative backend selection.

use crate::config::{ProviderKind, ProviderSettings};
use crate::error::{CliError, Result};
use cognito_domain::{GenerationRequest, LlmProvider};
use cognito_llm::{ollama, openai, LlmError, MockProvider, OllamaProvider, OpenAiProvider};
use std::time::Duration;

/// Ollama model used when none is configured
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// Any of the supported backends, chosen at runtime.
pub enum Provider {
    /// Offline mock
    Mock(MockProvider),
    /// Ollama
    Ollama(OllamaProvider),
    /// OpenAI-compatible chat completions
    OpenAi(OpenAiProvider),
}

impl Provider {
    /// Build the backend described by `settings`.
    ///
    /// The OpenAI key is read from the environment variable named in the
    /// settings, which may come from a `.env` file.
    pub fn from_settings(settings: &ProviderSettings, timeout: Duration) -> Result<Self> {
        let provider = match settings.kind {
            ProviderKind::Mock => Provider::Mock(MockProvider::default()),
            ProviderKind::Ollama => Provider::Ollama(
                OllamaProvider::new(
                    settings.endpoint.as_deref().unwrap_or(ollama::DEFAULT_ENDPOINT),
                    settings.model.as_deref().unwrap_or(DEFAULT_OLLAMA_MODEL),
                )
                .with_timeout(timeout),
            ),
            ProviderKind::OpenAi => {
                let api_key = std::env::var(&settings.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| {
                        CliError::Config(format!("{} is not set", settings.api_key_env))
                    })?;
                Provider::OpenAi(
                    OpenAiProvider::new(
                        settings.endpoint.as_deref().unwrap_or(openai::DEFAULT_BASE_URL),
                        settings.model.as_deref().unwrap_or(openai::DEFAULT_MODEL),
                        api_key,
                    )
                    .with_timeout(timeout),
                )
            }
        };
        Ok(provider)
    }
}

impl LlmProvider for Provider {
    type Error = LlmError;

    fn generate(&self, request: &GenerationRequest) -> std::result::Result<String, Self::Error> {
        match self {
            Provider::Mock(p) => p.generate(request),
            Provider::Ollama(p) => p.generate(request),
            Provider::OpenAi(p) => p.generate(request),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            Provider::Mock(p) => p.model_name(),
            Provider::Ollama(p) => p.model_name(),
            Provider::OpenAi(p) => p.model_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(kind: ProviderKind) -> ProviderSettings {
        ProviderSettings {
            kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_mock_provider() {
        let provider =
            Provider::from_settings(&settings(ProviderKind::Mock), Duration::from_secs(1)).unwrap();
        assert!(matches!(provider, Provider::Mock(_)));
        assert_eq!(provider.model_name(), "mock");
    }

    #[test]
    fn test_ollama_defaults() {
        let provider =
            Provider::from_settings(&settings(ProviderKind::Ollama), Duration::from_secs(5))
                .unwrap();
        assert_eq!(provider.model_name(), DEFAULT_OLLAMA_MODEL);
        match provider {
            Provider::Ollama(p) => assert_eq!(p.timeout(), Duration::from_secs(5)),
            _ => panic!("Expected Ollama provider"),
        }
    }

    #[test]
    fn test_openai_requires_key() {
        let mut settings = settings(ProviderKind::OpenAi);
        settings.api_key_env = "COGNITO_TEST_UNSET_KEY".to_string();
        let result = Provider::from_settings(&settings, Duration::from_secs(1));
        assert!(matches!(
            result,
            Err(CliError::Config(msg)) if msg.contains("COGNITO_TEST_UNSET_KEY")
        ));
    }
}
