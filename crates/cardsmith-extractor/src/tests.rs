//! Integration tests for the Generator

#[cfg(test)]
mod tests {
    use crate::{
        ExtractionSource, ExtractorConfig, ExtractorError, GenerationRequest, Generator, Strategy,
    };
    use cardsmith_domain::{Card, Question, RecordKind};
    use cardsmith_llm::MockProvider;

    #[tokio::test]
    async fn test_full_card_flow() {
        let llm = MockProvider::with_text_block(
            r#"[{"front":"What powers the cell?","back":"ATP","deck":"Biology"}]"#,
        );
        let generator = Generator::new(llm, ExtractorConfig::default());

        let generation = generator
            .generate_cards(GenerationRequest::new("Cells run on ATP."))
            .await
            .unwrap();

        assert_eq!(
            generation.records,
            vec![Card::new("What powers the cell?", "ATP", "Biology")]
        );
        assert_eq!(generation.metadata.kind, RecordKind::Cards);
        assert_eq!(generation.metadata.model_name, "mock");
        assert_eq!(
            generation.metadata.source,
            ExtractionSource::Candidate(Strategy::Direct)
        );
    }

    #[tokio::test]
    async fn test_question_flow_through_prose() {
        let llm = MockProvider::with_text_block(
            "Sure! Here are some questions.\n\nTopic: Optics\n1. Why is the sky blue?\n2. What bends light?",
        );
        let generator = Generator::new(llm, ExtractorConfig::default());

        let generation = generator
            .generate_questions(GenerationRequest::new("Rayleigh scattering..."))
            .await
            .unwrap();

        assert_eq!(
            generation.records,
            vec![
                Question::new("Sure! Here are some questions.", "Optics"),
                Question::new("Why is the sky blue?", "Optics"),
                Question::new("What bends light?", "Optics"),
            ]
        );
        assert_eq!(generation.metadata.source, ExtractionSource::Heuristic);
    }

    #[tokio::test]
    async fn test_unparseable_response_still_yields_a_card() {
        let llm = MockProvider::with_text_block("I'm sorry, I can't help with that.");
        let generator = Generator::new(llm, ExtractorConfig::default());

        let generation = generator
            .generate_cards(GenerationRequest::new("Some text"))
            .await
            .unwrap();

        assert_eq!(generation.records.len(), 1);
        assert_eq!(generation.records[0].back, "I'm sorry, I can't help with that.");
        assert_eq!(generation.metadata.source, ExtractionSource::Fallback);
        assert_eq!(generation.metadata.response_chars, 34);
    }

    #[tokio::test]
    async fn test_plain_body_without_envelope() {
        let llm = MockProvider::new(r#"[{"question":"How?"}]"#);
        let generator = Generator::new(llm, ExtractorConfig::default());

        let generation = generator
            .generate_questions(GenerationRequest::new("text"))
            .await
            .unwrap();

        assert_eq!(generation.records, vec![Question::new("How?", "General")]);
    }

    #[tokio::test]
    async fn test_provider_error_is_propagated() {
        let mut llm = MockProvider::default();
        // The mock keys responses on the full user turn
        llm.add_error("Text:\n---\nboom\n---");
        let generator = Generator::new(llm, ExtractorConfig::default());

        let result = generator.generate_cards(GenerationRequest::new("boom")).await;
        assert!(matches!(result, Err(ExtractorError::Llm(_))));
    }

    #[tokio::test]
    async fn test_each_generation_calls_provider_once() {
        let llm = MockProvider::new("[]");
        let generator = Generator::new(llm.clone(), ExtractorConfig::default());

        generator
            .generate_cards(GenerationRequest::new("one"))
            .await
            .unwrap();
        generator
            .generate_questions(GenerationRequest::new("two"))
            .await
            .unwrap();

        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_generation_ids_are_unique() {
        let generator = Generator::new(MockProvider::new("[]"), ExtractorConfig::default());

        let first = generator
            .generate_cards(GenerationRequest::new("a"))
            .await
            .unwrap();
        let second = generator
            .generate_cards(GenerationRequest::new("a"))
            .await
            .unwrap();

        assert_ne!(
            first.metadata.generation_id,
            second.metadata.generation_id
        );
    }
}
