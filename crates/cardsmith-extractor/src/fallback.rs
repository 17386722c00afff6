//! Terminal stage: records returned when nothing else could be extracted

use cardsmith_domain::{Card, Question, DEFAULT_DECK, DEFAULT_TOPIC};

/// Front of the single card synthesized from an unparseable response
pub const FALLBACK_CARD_FRONT: &str = "Review: what are the key points of this passage?";

/// Characters of the response kept on the fallback card's back
pub const FALLBACK_PREVIEW_CHARS: usize = 300;

/// Appended to the preview when the response was longer
pub const TRUNCATION_MARKER: &str = "...";

/// Questions returned when no question could be recovered
pub const FALLBACK_QUESTIONS: [&str; 2] = [
    "What are the main ideas presented in this text?",
    "How could the ideas in this text be applied in practice?",
];

/// One generic card whose back previews the raw response
pub fn fallback_cards(raw: &str) -> Vec<Card> {
    vec![Card::new(
        FALLBACK_CARD_FRONT,
        preview(raw, FALLBACK_PREVIEW_CHARS),
        DEFAULT_DECK,
    )]
}

/// Two generic questions, independent of the response
pub fn fallback_questions() -> Vec<Question> {
    FALLBACK_QUESTIONS
        .iter()
        .map(|question| Question::new(*question, DEFAULT_TOPIC))
        .collect()
}

/// First `max` characters of `text`, marked when truncated
fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_response_not_truncated() {
        let cards = fallback_cards("The model said something odd.");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, FALLBACK_CARD_FRONT);
        assert_eq!(cards[0].back, "The model said something odd.");
        assert_eq!(cards[0].deck, "General");
    }

    #[test]
    fn test_long_response_truncated_with_marker() {
        let raw = "x".repeat(301);
        let back = &fallback_cards(&raw)[0].back;
        assert_eq!(back.len(), 300 + TRUNCATION_MARKER.len());
        assert!(back.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_exactly_limit_not_marked() {
        let raw = "y".repeat(300);
        assert_eq!(fallback_cards(&raw)[0].back, raw);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let raw = "é".repeat(400);
        let back = &fallback_cards(&raw)[0].back;
        assert_eq!(back.chars().count(), 300 + TRUNCATION_MARKER.chars().count());
    }

    #[test]
    fn test_empty_response_still_produces_card() {
        let cards = fallback_cards("");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].back, "");
    }

    #[test]
    fn test_fallback_questions() {
        let questions = fallback_questions();
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.topic == "General"));
    }
}
