//! Generator: one LLM call per selection, piped through the extraction pipeline

use crate::config::ExtractorConfig;
use crate::envelope::ProviderResponse;
use crate::error::ExtractorError;
use crate::normalize::ExtractRecord;
use crate::pipeline::extract;
use crate::prompt::PromptBuilder;
use crate::types::{Generation, GenerationMetadata, GenerationRequest};
use cardsmith_domain::{Card, GenerationId, LlmProvider, Prompt, Question};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info};

/// Turns text selections into cards or questions
pub struct Generator<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
}

impl<L> Generator<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Generator
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Generate flashcards from a selection
    pub async fn generate_cards(
        &self,
        request: GenerationRequest,
    ) -> Result<Generation<Card>, ExtractorError> {
        self.generate(request).await
    }

    /// Generate discussion questions from a selection
    pub async fn generate_questions(
        &self,
        request: GenerationRequest,
    ) -> Result<Generation<Question>, ExtractorError> {
        self.generate(request).await
    }

    async fn generate<T: ExtractRecord>(
        &self,
        request: GenerationRequest,
    ) -> Result<Generation<T>, ExtractorError> {
        let text_chars = request.text.chars().count();
        if request.text.trim().is_empty() {
            return Err(ExtractorError::EmptyText);
        }
        if text_chars > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                text_chars,
                self.config.max_text_length,
            ));
        }

        let generation_id = GenerationId::new();
        let start = Instant::now();

        info!(
            "Generation {}: {} from {} chars of text",
            generation_id,
            T::KIND,
            text_chars
        );

        let deck = request.deck.or_else(|| self.config.default_deck.clone());
        let prompt = PromptBuilder::new(request.text, T::KIND)
            .with_deck(deck)
            .build();

        debug!("Prompt length: {} chars", prompt.len());

        let body = timeout(self.config.generation_timeout(), self.call_llm(prompt))
            .await
            .map_err(|_| ExtractorError::Timeout)??;

        let response = ProviderResponse::from_body(&body);
        let response_chars = response.raw_text().chars().count();
        let result = extract::<T>(&response);

        info!(
            "Generation {}: {} {} via {}",
            generation_id,
            result.len(),
            T::KIND,
            result.source
        );

        Ok(Generation {
            metadata: GenerationMetadata {
                generation_id,
                kind: T::KIND,
                model_name: self.llm_provider.model_name().to_string(),
                source: result.source,
                response_chars,
                processing_time_ms: start.elapsed().as_millis() as u64,
            },
            records: result.records,
        })
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: Prompt) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);

        // The provider trait is blocking
        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_llm::MockProvider;

    fn create_test_generator(body: &str) -> Generator<MockProvider> {
        Generator::new(MockProvider::new(body), ExtractorConfig::default())
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let generator = create_test_generator("[]");
        let result = generator.generate_cards(GenerationRequest::new("   ")).await;
        assert!(matches!(result, Err(ExtractorError::EmptyText)));
    }

    #[tokio::test]
    async fn test_text_too_long() {
        let generator = create_test_generator("[]");
        let long_text = "a".repeat(20_001);
        let result = generator
            .generate_questions(GenerationRequest::new(long_text))
            .await;
        assert!(matches!(result, Err(ExtractorError::TextTooLong(20_001, 20_000))));
    }

    #[tokio::test]
    async fn test_length_limit_counts_characters() {
        let config = ExtractorConfig {
            max_text_length: 3,
            ..Default::default()
        };
        let generator = Generator::new(MockProvider::new("[]"), config);
        let result = generator.generate_cards(GenerationRequest::new("äöü")).await;
        assert!(result.is_ok());
    }
}
