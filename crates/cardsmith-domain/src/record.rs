//! Record module - the flashcards and questions a generation produces

use serde::{Deserialize, Serialize};

/// Deck assigned to a card when the model does not name one
pub const DEFAULT_DECK: &str = "General";

/// Topic assigned to a question when the model does not name one
pub const DEFAULT_TOPIC: &str = "General";

/// A spaced-repetition flashcard
///
/// `front` and `back` are always non-empty once a card leaves the
/// extraction pipeline. `deck` names the group the card is exported into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Prompt side of the card
    pub front: String,

    /// Answer side of the card
    pub back: String,

    /// Deck the card belongs to
    #[serde(default = "default_deck")]
    pub deck: String,
}

impl Card {
    /// Create a new card
    ///
    /// # Examples
    ///
    /// ```
    /// use cardsmith_domain::Card;
    ///
    /// let card = Card::new("What is ATP?", "The cell's energy currency", "Biology");
    /// assert_eq!(card.deck, "Biology");
    /// ```
    pub fn new(front: impl Into<String>, back: impl Into<String>, deck: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            deck: deck.into(),
        }
    }

    /// Create a card in the default deck
    pub fn in_default_deck(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self::new(front, back, DEFAULT_DECK)
    }
}

/// A discussion question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text
    pub question: String,

    /// Topic the question is filed under
    #[serde(default = "default_topic")]
    pub topic: String,
}

impl Question {
    /// Create a new question
    pub fn new(question: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            topic: topic.into(),
        }
    }
}

fn default_deck() -> String {
    DEFAULT_DECK.to_string()
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_in_default_deck() {
        let card = Card::in_default_deck("Q", "A");
        assert_eq!(card.deck, DEFAULT_DECK);
    }

    #[test]
    fn test_card_file_without_deck_uses_default() {
        let cards: Vec<Card> = serde_json::from_str(r#"[{"front":"Q","back":"A"}]"#).unwrap();
        assert_eq!(cards, vec![Card::new("Q", "A", "General")]);
    }

    #[test]
    fn test_question_serializes_both_fields() {
        let json = serde_json::to_value(Question::new("Why?", "Physics")).unwrap();
        assert_eq!(json["question"], "Why?");
        assert_eq!(json["topic"], "Physics");
    }
}
