//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Outline generation error
    #[error("Outline error: {0}")]
    Outline(#[from] cognito_outline::OutlineError),

    /// Feature extraction error
    #[error("Analysis error: {0}")]
    Extraction(#[from] cognito_nlp::FeatureExtractionError),

    /// Provider setup error
    #[error("Provider error: {0}")]
    Provider(#[from] cognito_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
