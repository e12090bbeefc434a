//! Configuration for the outline generator

use cognito_domain::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the outline generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Sampling temperature for the generation call
    pub temperature: f32,

    /// Completion budget in tokens
    pub max_tokens: u32,

    /// Maximum time for the generation call (seconds)
    pub generation_timeout_secs: u64,

    /// Maximum number of ranked topics
    pub max_topics: usize,

    /// Noun chunks longer than this many words are not topics
    pub max_topic_words: usize,

    /// Number of topics named in the prompt
    pub prompt_topics: usize,

    /// Input text beyond this many characters is not sent to the model
    pub max_text_length: usize,

    /// Fallback total is the sum of section minimums instead of 600
    pub sum_fallback_lengths: bool,
}

impl OutlineConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        if self.max_topics == 0 {
            return Err("max_topics must be greater than 0".to_string());
        }
        if self.max_topic_words == 0 {
            return Err("max_topic_words must be greater than 0".to_string());
        }
        if self.prompt_topics > self.max_topics {
            return Err("prompt_topics cannot exceed max_topics".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for OutlineConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            generation_timeout_secs: 60,
            max_topics: 5,
            max_topic_words: 3,
            prompt_topics: 3,
            max_text_length: 50_000,
            sum_fallback_lengths: false,
        }
    }
}

impl OutlineConfig {
    /// Fast preset: short timeout and a smaller completion budget
    pub fn fast() -> Self {
        Self {
            max_tokens: 600,
            generation_timeout_secs: 20,
            max_text_length: 20_000,
            ..Self::default()
        }
    }

    /// Thorough preset: long timeout, larger budget, more text sent
    pub fn thorough() -> Self {
        Self {
            temperature: 0.5,
            max_tokens: 2000,
            generation_timeout_secs: 180,
            max_text_length: 100_000,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml(&contents)
    }
}
