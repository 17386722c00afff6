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

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(#[from] cardsmith_llm::LlmError),

    /// Generation error
    #[error("Generation error: {0}")]
    Extractor(#[from] cardsmith_extractor::ExtractorError),

    /// Mochi export error
    #[error("Export error: {0}")]
    Mochi(#[from] cardsmith_mochi::MochiError),

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

    /// Some cards were not exported
    #[error("{0} of {1} card(s) failed to export")]
    ExportIncomplete(usize, usize),

    /// API key not supplied
    #[error("Missing API key. Set {0} or pass it on the command line.")]
    MissingApiKey(&'static str),
}
