//! Error types for outline generation

use cognito_llm::LlmError;
use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can escape outline generation
///
/// Generation-service problems never appear here; they are recovered
/// through the fallback outline.
#[derive(Error, Debug)]
pub enum OutlineError {
    /// The feature extractor rejected the input text
    ///
    /// Holds the extractor's own error; use `downcast_ref` to recover it.
    #[error("Feature extraction error: {0}")]
    FeatureExtraction(#[source] Box<dyn StdError + Send + Sync>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why the generative step produced no usable sections
///
/// Every variant resolves to the fallback outline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// Transport, authentication, rate limit or other service error
    #[error("generation service error: {0}")]
    Service(String),

    /// The call did not finish within the configured timeout
    #[error("generation timed out")]
    Timeout,

    /// The service returned no text
    #[error("empty completion")]
    Empty,

    /// The completion contained no recognizable section header
    #[error("no sections could be parsed from the completion")]
    ParseDegeneracy,
}

impl From<LlmError> for GenerationFailure {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Timeout => GenerationFailure::Timeout,
            LlmError::EmptyCompletion => GenerationFailure::Empty,
            other => GenerationFailure::Service(other.to_string()),
        }
    }
}

impl OutlineError {
    /// The extractor error behind a `FeatureExtraction` failure
    pub fn extraction_error<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            OutlineError::FeatureExtraction(source) => source.downcast_ref::<E>(),
            OutlineError::Config(_) => None,
        }
    }
}
