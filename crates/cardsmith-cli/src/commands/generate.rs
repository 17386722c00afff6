//! Generate command implementation.

use super::export::{check_report, upload};
use super::read_input;
use crate::cli::{GenerateArgs, KindArg};
use crate::config::{Config, OutputFormat, ProviderConfig};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cardsmith_extractor::{Generator, GenerationMetadata, GenerationRequest};
use cardsmith_llm::AnthropicProvider;
use std::time::Duration;
use tracing::info;

/// Execute the generate command.
pub async fn execute_generate(
    args: GenerateArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    if args.export && args.kind == KindArg::Questions {
        return Err(CliError::InvalidInput(
            "--export applies to cards only".to_string(),
        ));
    }
    let mochi_key = if args.export {
        Some(
            args.mochi_api_key
                .ok_or(CliError::MissingApiKey("MOCHI_API_KEY"))?,
        )
    } else {
        None
    };
    let api_key = args
        .api_key
        .ok_or(CliError::MissingApiKey("ANTHROPIC_API_KEY"))?;

    let text = read_input(args.text, args.file.as_deref(), args.stdin)?;
    let model = args.model.unwrap_or_else(|| config.provider.model.clone());

    // The provider's blocking HTTP client is built off the async workers
    let provider_config = config.provider.clone();
    let provider =
        tokio::task::spawn_blocking(move || build_provider(api_key, model, &provider_config))
            .await
            .map_err(|e| CliError::Config(format!("Provider setup failed: {}", e)))??;

    let generator = Generator::new(provider, config.extractor.clone());
    let mut request = GenerationRequest::new(text);
    if let Some(deck) = args.deck {
        request = request.with_deck(deck);
    }

    match args.kind {
        KindArg::Cards => {
            let generation = generator.generate_cards(request).await?;
            note(formatter, generation.records.len(), &generation.metadata);
            println!("{}", formatter.format_cards(&generation.records)?);

            if let Some(key) = mochi_key {
                let report = upload(&generation.records, key, config).await?;
                eprintln!("{}", formatter.export_report(&report));
                check_report(&report)?;
            }
        }
        KindArg::Questions => {
            let generation = generator.generate_questions(request).await?;
            note(formatter, generation.records.len(), &generation.metadata);
            println!("{}", formatter.format_questions(&generation.records)?);
        }
    }

    Ok(())
}

fn build_provider(
    api_key: String,
    model: String,
    config: &ProviderConfig,
) -> Result<AnthropicProvider> {
    let provider = AnthropicProvider::new(api_key, model)?
        .with_endpoint(config.endpoint.clone())
        .with_max_tokens(config.max_tokens)
        .with_timeout(Duration::from_secs(config.timeout_secs))?;
    Ok(provider)
}

fn note(formatter: &Formatter, count: usize, metadata: &GenerationMetadata) {
    info!(
        "Generation {} with {} took {}ms",
        metadata.generation_id, metadata.model_name, metadata.processing_time_ms
    );
    if formatter.format() != OutputFormat::Quiet {
        eprintln!("{}", formatter.extraction_note(count, metadata.source));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: KindArg) -> GenerateArgs {
        GenerateArgs {
            kind,
            text: Some("Mitochondria produce ATP.".to_string()),
            file: None,
            stdin: false,
            deck: None,
            model: None,
            export: false,
            api_key: Some("key".to_string()),
            mochi_api_key: None,
        }
    }

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Quiet, false)
    }

    #[tokio::test]
    async fn test_export_rejected_for_questions() {
        let mut args = args(KindArg::Questions);
        args.export = true;
        args.mochi_api_key = Some("mochi".to_string());

        let result = execute_generate(args, &Config::default(), &formatter()).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_missing_keys_reported_before_any_request() {
        let mut no_llm_key = args(KindArg::Cards);
        no_llm_key.api_key = None;
        let result = execute_generate(no_llm_key, &Config::default(), &formatter()).await;
        assert!(matches!(result, Err(CliError::MissingApiKey("ANTHROPIC_API_KEY"))));

        let mut no_mochi_key = args(KindArg::Cards);
        no_mochi_key.export = true;
        let result = execute_generate(no_mochi_key, &Config::default(), &formatter()).await;
        assert!(matches!(result, Err(CliError::MissingApiKey("MOCHI_API_KEY"))));
    }

    #[test]
    fn test_build_provider_uses_config() {
        let config = ProviderConfig {
            model: "ignored".to_string(),
            ..ProviderConfig::default()
        };
        let provider = build_provider("key".to_string(), "claude-test".to_string(), &config).unwrap();
        assert_eq!(cardsmith_domain::LlmProvider::model_name(&provider), "claude-test");
    }

    #[test]
    fn test_build_provider_rejects_empty_key() {
        let result = build_provider(String::new(), "m".to_string(), &ProviderConfig::default());
        assert!(matches!(result, Err(CliError::Llm(_))));
    }
}
