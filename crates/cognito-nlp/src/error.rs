//! Error types for feature extraction

use thiserror::Error;

/// Errors that can occur while extracting document features
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureExtractionError {
    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Text cannot be tokenized
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
