//! Mochi client implementation.

use crate::error::MochiError;
use crate::wire::{card_content, CreateCardRequest, CreateDeckRequest, CreatedCard, Deck, DeckPage};
use cardsmith_domain::{Card, CardExporter, ExportFailure, ExportReport, ExportedCard};
use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Mochi REST API base URL
pub const DEFAULT_BASE_URL: &str = "https://app.mochi.cards/api";

/// Default per-request timeout (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Mochi API client
pub struct MochiClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl MochiClient {
    /// Create a new client against the public API
    pub fn new(api_key: impl Into<String>) -> Result<Self, MochiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(MochiError::AuthError("API key is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| MochiError::ConnectionError(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            http,
        })
    }

    /// Use a different API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Base URL in use
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all active decks, following pagination bookmarks
    pub async fn list_decks(&self) -> Result<Vec<Deck>, MochiError> {
        let url = format!("{}/decks/", self.base_url);
        let mut decks = Vec::new();
        let mut bookmark: Option<String> = None;

        loop {
            let mut request = self.http.get(&url);
            if let Some(mark) = &bookmark {
                request = request.query(&[("bookmark", mark)]);
            }

            let page: DeckPage = self.send(request).await?.json().await?;
            if page.docs.is_empty() {
                break;
            }
            decks.extend(page.docs.into_iter().filter(Deck::is_active));

            match page.bookmark {
                Some(next) if bookmark.as_ref() != Some(&next) => bookmark = Some(next),
                _ => break,
            }
        }

        debug!("Listed {} Mochi decks", decks.len());
        Ok(decks)
    }

    /// Create a deck
    pub async fn create_deck(&self, name: &str) -> Result<Deck, MochiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MochiError::EmptyDeckName);
        }

        let request = self
            .http
            .post(format!("{}/decks/", self.base_url))
            .json(&CreateDeckRequest { name });
        let deck: Deck = self.send(request).await?.json().await?;

        info!("Created Mochi deck '{}' ({})", deck.name, deck.id);
        Ok(deck)
    }

    /// Find a deck by name (case-insensitive), creating it if missing
    pub async fn resolve_deck(&self, name: &str) -> Result<Deck, MochiError> {
        let decks = self.list_decks().await?;
        match find_deck(&decks, name) {
            Some(deck) => Ok(deck.clone()),
            None => self.create_deck(name).await,
        }
    }

    /// Create one card in a deck, returning the remote card id
    pub async fn create_card(&self, card: &Card, deck_id: &str) -> Result<String, MochiError> {
        let request = self
            .http
            .post(format!("{}/cards/", self.base_url))
            .json(&CreateCardRequest {
                content: card_content(card),
                deck_id,
            });
        let created: CreatedCard = self.send(request).await?.json().await?;
        Ok(created.id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, MochiError> {
        let response = request
            .basic_auth(&self.api_key, None::<&str>)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                MochiError::AuthError(format!("HTTP {}", status))
            }
            _ => MochiError::ApiError(format!("HTTP {}: {}", status, error_text)),
        })
    }
}

impl CardExporter for MochiClient {
    type Error = MochiError;

    async fn export_cards(&self, cards: &[Card]) -> Result<ExportReport, MochiError> {
        let mut report = ExportReport::default();
        if cards.is_empty() {
            return Ok(report);
        }

        let mut decks = self.list_decks().await?;

        for (deck_name, group) in group_by_deck(cards) {
            let deck = match find_deck(&decks, &deck_name) {
                Some(deck) => deck.clone(),
                None => match self.create_deck(&deck_name).await {
                    Ok(deck) => {
                        decks.push(deck.clone());
                        deck
                    }
                    Err(e) => {
                        warn!("Could not create deck '{}': {}", deck_name, e);
                        report.failures.extend(group.into_iter().map(|card| ExportFailure {
                            card: card.clone(),
                            reason: format!("deck '{}': {}", deck_name, e),
                        }));
                        continue;
                    }
                },
            };

            for card in group {
                match self.create_card(card, &deck.id).await {
                    Ok(remote_id) => report.created.push(ExportedCard {
                        remote_id,
                        deck: deck.name.clone(),
                    }),
                    Err(e) => {
                        warn!("Failed to upload card '{}': {}", card.front, e);
                        report.failures.push(ExportFailure {
                            card: card.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        info!(
            "Mochi export complete: {} created, {} failed",
            report.created.len(),
            report.failures.len()
        );
        Ok(report)
    }
}

/// Group cards by deck name, decks in order of first appearance
pub fn group_by_deck(cards: &[Card]) -> Vec<(String, Vec<&Card>)> {
    let mut groups: Vec<(String, Vec<&Card>)> = Vec::new();
    for card in cards {
        match groups
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&card.deck))
        {
            Some((_, group)) => group.push(card),
            None => groups.push((card.deck.clone(), vec![card])),
        }
    }
    groups
}

fn find_deck<'a>(decks: &'a [Deck], name: &str) -> Option<&'a Deck> {
    let name = name.trim();
    decks.iter().find(|deck| deck.name.trim().eq_ignore_ascii_case(name))
}
