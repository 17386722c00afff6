//! Error types for generation
//!
//! Only the network-facing half of the crate can fail. The extraction
//! pipeline absorbs every parse and shape failure and never returns one.

use thiserror::Error;

/// Errors that can occur while generating records
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Selection is empty or whitespace
    #[error("Selected text is empty")]
    EmptyText,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Generation timeout
    #[error("Generation timeout")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
