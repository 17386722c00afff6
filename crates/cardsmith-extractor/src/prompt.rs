//! Prompts asking the model for cards or questions

use cardsmith_domain::{Prompt, RecordKind};

/// Builds the prompt for one generation request
pub struct PromptBuilder {
    text: String,
    kind: RecordKind,
    deck: Option<String>,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: String, kind: RecordKind) -> Self {
        Self {
            text,
            kind,
            deck: None,
        }
    }

    /// Suggest a deck (cards) or topic (questions) name to the model
    pub fn with_deck(mut self, deck: Option<String>) -> Self {
        self.deck = deck;
        self
    }

    /// Build the system and user parts
    pub fn build(&self) -> Prompt {
        let mut system = String::new();
        system.push_str(match self.kind {
            RecordKind::Cards => CARD_INSTRUCTIONS,
            RecordKind::Questions => QUESTION_INSTRUCTIONS,
        });

        if let Some(deck) = &self.deck {
            let field = match self.kind {
                RecordKind::Cards => "deck",
                RecordKind::Questions => "topic",
            };
            system.push_str(&format!("\n\nUse \"{}\" as the {} for every item.", deck, field));
        }

        system.push_str("\n\n");
        system.push_str(OUTPUT_FORMAT_REMINDER);

        let mut user = String::new();
        user.push_str("Text:\n---\n");
        user.push_str(&self.text);
        user.push_str("\n---");

        Prompt::new(system, user)
    }
}

const CARD_INSTRUCTIONS: &str = r#"Create spaced-repetition flashcards from the text the user selected.
Each flashcard is a JSON object:

{ "front": "question or cue", "back": "answer", "deck": "short subject name" }

Rules:
- One fact per card
- Keep the front answerable from the back alone"#;

const QUESTION_INSTRUCTIONS: &str = r#"Write open discussion questions about the text the user selected.
Each question is a JSON object:

{ "question": "the question", "topic": "short subject name" }"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Return ONLY a JSON array of these objects: no markdown code blocks, no explanations.";
