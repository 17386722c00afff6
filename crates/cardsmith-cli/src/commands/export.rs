//! Export command implementation.

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cardsmith_domain::{Card, CardExporter};
use cardsmith_mochi::MochiClient;
use std::fs;

/// Execute the export command.
pub async fn execute_export(args: ExportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let api_key = args
        .mochi_api_key
        .ok_or(CliError::MissingApiKey("MOCHI_API_KEY"))?;

    let json_data = fs::read_to_string(&args.file)?;
    let mut cards = load_cards(&json_data)?;
    if let Some(deck) = args.deck {
        retarget(&mut cards, &deck)?;
    }

    let report = upload(&cards, api_key, config).await?;
    println!("{}", formatter.export_report(&report));
    check_report(&report)
}

/// Upload cards to Mochi with the configured base URL.
pub(crate) async fn upload(
    cards: &[Card],
    api_key: String,
    config: &Config,
) -> Result<cardsmith_domain::ExportReport> {
    let client = MochiClient::new(api_key)?.with_base_url(config.mochi.base_url.clone());
    Ok(client.export_cards(cards).await?)
}

/// Turn a partially failed export into an error for the exit code.
pub(crate) fn check_report(report: &cardsmith_domain::ExportReport) -> Result<()> {
    if report.is_complete() {
        Ok(())
    } else {
        Err(CliError::ExportIncomplete(
            report.failures.len(),
            report.attempted(),
        ))
    }
}

/// Parse a JSON array of cards, as written by `generate cards --format json`.
fn load_cards(json_data: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(json_data)?;

    if cards.is_empty() {
        return Err(CliError::InvalidInput("No cards provided".to_string()));
    }
    if let Some(index) = cards
        .iter()
        .position(|c| c.front.trim().is_empty() || c.back.trim().is_empty())
    {
        return Err(CliError::InvalidInput(format!(
            "Card {} has an empty front or back",
            index + 1
        )));
    }

    Ok(cards)
}

/// Move every card into `deck`.
fn retarget(cards: &mut [Card], deck: &str) -> Result<()> {
    let deck = deck.trim();
    if deck.is_empty() {
        return Err(CliError::InvalidInput("Deck name must not be empty".to_string()));
    }
    for card in cards.iter_mut() {
        card.deck = deck.to_string();
    }
    Ok(())
}
