//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::export::ExportReport;
use crate::record::Card;
use std::future::Future;

/// A two-part prompt sent to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Standing instructions (output format, record shape)
    pub system: String,

    /// The user turn, carrying the selected text
    pub user: String,
}

impl Prompt {
    /// Create a new prompt
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// Total prompt length in characters
    pub fn len(&self) -> usize {
        self.system.chars().count() + self.user.chars().count()
    }

    /// Whether both parts are empty
    pub fn is_empty(&self) -> bool {
        self.system.is_empty() && self.user.is_empty()
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (cardsmith-llm). The returned
/// string is the provider's raw response body: the envelope is unwrapped
/// by the extraction pipeline, not by the provider.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Send a prompt and return the raw response body
    fn generate(&self, prompt: &Prompt) -> Result<String, Self::Error>;

    /// Name of the model answering requests
    fn model_name(&self) -> &str;
}

/// Trait for exporting cards to a third-party card service
///
/// Implemented by the infrastructure layer (cardsmith-mochi)
pub trait CardExporter {
    /// Error type for failures that abort the whole export
    type Error;

    /// Export cards, one remote card per input card
    ///
    /// Per-card failures are reported in the [`ExportReport`]; only failures
    /// that prevent any upload (such as resolving a deck) are errors.
    fn export_cards(
        &self,
        cards: &[Card],
    ) -> impl Future<Output = Result<ExportReport, Self::Error>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_len_counts_characters() {
        let prompt = Prompt::new("Résumé", "naïve ü");
        assert_eq!(prompt.len(), 13);
        assert!(!prompt.is_empty());
    }

    #[test]
    fn test_empty_prompt() {
        let prompt = Prompt::new("", "");
        assert_eq!(prompt.len(), 0);
        assert!(prompt.is_empty());
    }
}
