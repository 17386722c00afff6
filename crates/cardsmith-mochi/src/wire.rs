//! Request and response bodies of the Mochi API.

use cardsmith_domain::Card;
use serde::{Deserialize, Serialize};

/// Separator between the two sides of a Mochi card's markdown content
const SIDE_SEPARATOR: &str = "\n---\n";

/// A Mochi deck
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deck {
    /// Deck ID
    pub id: String,
    /// Deck name
    pub name: String,
    /// Set when the deck is in the trash
    #[serde(rename = "trashed?", default)]
    pub trashed: Option<serde_json::Value>,
}

impl Deck {
    /// Whether the deck is usable as an export target
    pub fn is_active(&self) -> bool {
        matches!(self.trashed, None | Some(serde_json::Value::Null))
    }
}

/// One page of `GET /decks/`
#[derive(Debug, Deserialize)]
pub(crate) struct DeckPage {
    #[serde(default)]
    pub docs: Vec<Deck>,
    #[serde(default)]
    pub bookmark: Option<String>,
}

/// `POST /decks/` body
#[derive(Debug, Serialize)]
pub(crate) struct CreateDeckRequest<'a> {
    pub name: &'a str,
}

/// `POST /cards/` body
#[derive(Debug, Serialize)]
pub(crate) struct CreateCardRequest<'a> {
    pub content: String,
    #[serde(rename = "deck-id")]
    pub deck_id: &'a str,
}

/// Created card (only the fields we use)
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedCard {
    pub id: String,
}

/// Markdown content of a Mochi card: front, separator, back
///
/// # Examples
///
/// ```
/// use cardsmith_domain::Card;
/// use cardsmith_mochi::card_content;
///
/// let card = Card::in_default_deck("Capital of France?", "Paris");
/// assert_eq!(card_content(&card), "Capital of France?\n---\nParis");
/// ```
pub fn card_content(card: &Card) -> String {
    format!("{}{}{}", card.front, SIDE_SEPARATOR, card.back)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_page_parsing() {
        let json = r#"{
            "bookmark": "g1AAAA",
            "docs": [
                { "id": "abc", "name": "Biology", "sort": 1 },
                { "id": "def", "name": "Old", "trashed?": "2024-01-01T00:00:00Z" }
            ]
        }"#;

        let page: DeckPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.bookmark.as_deref(), Some("g1AAAA"));
        assert_eq!(page.docs.len(), 2);
        assert!(page.docs[0].is_active());
        assert!(!page.docs[1].is_active());
    }

    #[test]
    fn test_empty_page() {
        let page: DeckPage = serde_json::from_str("{}").unwrap();
        assert!(page.docs.is_empty());
        assert!(page.bookmark.is_none());
    }

    #[test]
    fn test_create_card_body_uses_hyphenated_deck_id() {
        let body = CreateCardRequest {
            content: "Q\n---\nA".to_string(),
            deck_id: "abc",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["deck-id"], "abc");
        assert_eq!(json["content"], "Q\n---\nA");
    }
}
