//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cognito CLI - Turn free-form notes into structured document outlines.
#[derive(Debug, Parser)]
#[command(name = "cognito")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "COGNITO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a document outline from notes
    Outline(OutlineArgs),

    /// Print text, style and structure analysis of a text
    Analyze(AnalyzeArgs),
}

/// Arguments for the outline command.
#[derive(Debug, Parser)]
pub struct OutlineArgs {
    /// Notes file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Generative backend
    #[arg(short, long, value_enum, env = "COGNITO_PROVIDER")]
    pub provider: Option<ProviderArg>,

    /// Model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Backend endpoint URL
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Reference text whose style the outline should follow (repeatable)
    #[arg(short = 's', long = "style-example")]
    pub style_examples: Vec<PathBuf>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Text file (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

/// Generative backend argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProviderArg {
    /// Offline mock, always yields the fallback outline
    Mock,
    /// Local Ollama server
    Ollama,
    /// OpenAI-compatible chat completions
    Openai,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<ProviderArg> for crate::config::ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Mock => crate::config::ProviderKind::Mock,
            ProviderArg::Ollama => crate::config::ProviderKind::Ollama,
            ProviderArg::Openai => crate::config::ProviderKind::OpenAi,
        }
    }
}
