//! Request and response types for generation

use crate::pipeline::ExtractionSource;
use cardsmith_domain::{GenerationId, RecordKind};

/// Request to generate records from a text selection
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The selected text
    pub text: String,

    /// Deck or topic name suggested to the model
    pub deck: Option<String>,
}

impl GenerationRequest {
    /// Create a request without a deck hint
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            deck: None,
        }
    }

    /// Suggest a deck or topic name
    pub fn with_deck(mut self, deck: impl Into<String>) -> Self {
        self.deck = Some(deck.into());
        self
    }
}

/// Records produced by one generation
#[derive(Debug, Clone)]
pub struct Generation<T> {
    /// The records, never empty
    pub records: Vec<T>,

    /// Metadata about the generation
    pub metadata: GenerationMetadata,
}

/// Metadata about a generation
#[derive(Debug, Clone)]
pub struct GenerationMetadata {
    /// Identifier of this generation
    pub generation_id: GenerationId,

    /// Record kind requested
    pub kind: RecordKind,

    /// Name of the LLM model used
    pub model_name: String,

    /// Pipeline stage that produced the records
    pub source: ExtractionSource,

    /// Length of the unwrapped response text (characters)
    pub response_chars: usize,

    /// Processing time in milliseconds, LLM call included
    pub processing_time_ms: u64,
}
