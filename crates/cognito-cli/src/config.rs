//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use cognito_outline::OutlineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Outline pipeline settings
    #[serde(default)]
    pub outline: OutlineConfig,

    /// Generative backend
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Generative backend selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Backend kind
    #[serde(default)]
    pub kind: ProviderKind,

    /// Endpoint URL, backend default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Model name, backend default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Generative backend kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Offline mock
    #[default]
    Mock,
    /// Ollama
    Ollama,
    /// OpenAI-compatible chat completions
    OpenAi,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".cognito").join("config.toml"))
    }

    /// Load the default configuration file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Validate the outline settings.
    pub fn validate(&self) -> Result<()> {
        self.outline.validate().map_err(CliError::Config)
    }
}

impl ProviderSettings {
    /// Apply command-line overrides on top of the file settings.
    pub fn with_overrides(
        mut self,
        kind: Option<ProviderKind>,
        model: Option<String>,
        endpoint: Option<String>,
    ) -> Self {
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if model.is_some() {
            self.model = model;
        }
        if endpoint.is_some() {
            self.endpoint = endpoint;
        }
        self
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            endpoint: None,
            model: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_api_key_env() -> String {
    cognito_llm::openai::API_KEY_ENV.to_string()
}

fn default_true() -> bool {
    true
}
